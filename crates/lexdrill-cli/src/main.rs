//! lexdrill CLI entry point.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lexdrill", version, about = "Vocabulary practice drills in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive practice session
    Practice {
        /// Path to a dictionary .toml file
        #[arg(long)]
        dictionary: PathBuf,

        /// Exercise mode: association, context, context-hard,
        /// translation-hard, writing-hard, simple-review
        #[arg(long, default_value = "association")]
        mode: String,

        /// Set length for sampled modes
        #[arg(long, default_value = "10")]
        length: usize,

        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Directory to save the session report to
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the words in a dictionary
    List {
        /// Path to a dictionary .toml file or directory
        #[arg(long)]
        dictionary: PathBuf,
    },

    /// Validate dictionary TOML files
    Validate {
        /// Path to a dictionary file or directory
        #[arg(long)]
        dictionary: PathBuf,
    },

    /// Compare two session reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Minimum per-word accuracy movement that counts
        #[arg(long, default_value = "0.05")]
        threshold: f64,

        /// Exit code 1 if any word slipped
        #[arg(long)]
        fail_on_slip: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter dictionary file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            dictionary,
            mode,
            length,
            seed,
            output,
        } => commands::practice::execute(dictionary, mode, length, seed, output),
        Commands::List { dictionary } => commands::list::execute(dictionary),
        Commands::Validate { dictionary } => commands::validate::execute(dictionary),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_slip,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_slip, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
