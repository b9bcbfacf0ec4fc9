//! The `lexdrill compare` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_core::report::SessionReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: f64,
    fail_on_slip: bool,
    format: String,
) -> Result<()> {
    let baseline = SessionReport::load_json(&baseline_path)?;
    let current = SessionReport::load_json(&current_path)?;

    let report = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} slips, {} improvements, {} unchanged",
                report.slips.len(),
                report.improvements.len(),
                report.unchanged
            );

            if !report.slips.is_empty() {
                println!("\nSlips:");
                for s in &report.slips {
                    println!(
                        "  {} ({}) {:.1}% -> {:.1}% ({:+.1}%)",
                        s.term,
                        s.word_id,
                        s.baseline_accuracy * 100.0,
                        s.current_accuracy * 100.0,
                        s.delta * 100.0
                    );
                }
            }

            if !report.improvements.is_empty() {
                println!("\nImprovements:");
                for i in &report.improvements {
                    println!(
                        "  {} ({}) {:.1}% -> {:.1}% (+{:.1}%)",
                        i.term,
                        i.word_id,
                        i.baseline_accuracy * 100.0,
                        i.current_accuracy * 100.0,
                        i.delta * 100.0
                    );
                }
            }

            if report.new_words > 0 {
                println!("\n{} new word(s)", report.new_words);
            }
            if report.removed_words > 0 {
                println!("{} removed word(s)", report.removed_words);
            }
        }
    }

    if fail_on_slip && report.has_slips() {
        std::process::exit(1);
    }

    Ok(())
}
