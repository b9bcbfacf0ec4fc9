//! The `lexdrill practice` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::ThreadRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lexdrill_core::engine::{EngineConfig, ExerciseEngine};
use lexdrill_core::error::EngineError;
use lexdrill_core::grade::{expected_answer, Response};
use lexdrill_core::model::{Dictionary, ExerciseItem, ExerciseMode, ExerciseSet, QuestionForm, WordEntry};
use lexdrill_core::parser;
use lexdrill_core::report::SessionReport;
use lexdrill_core::session::{ItemOutcome, PracticeSession};
use lexdrill_core::statistics::compute_session_stats;
use lexdrill_store::MasteryLedger;

/// A seedable session RNG: reproducible runs with `--seed`, OS
/// randomness otherwise.
enum SessionRng {
    Seeded(ChaCha8Rng),
    Os(ThreadRng),
}

impl SessionRng {
    fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SessionRng::Seeded(ChaCha8Rng::seed_from_u64(seed)),
            None => SessionRng::Os(rand::thread_rng()),
        }
    }

    fn as_rng(&mut self) -> &mut dyn rand::RngCore {
        match self {
            SessionRng::Seeded(rng) => rng,
            SessionRng::Os(rng) => rng,
        }
    }
}

pub fn execute(
    dictionary_path: PathBuf,
    mode_str: String,
    length: usize,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(length >= 1, "length must be at least 1");
    let mode: ExerciseMode = mode_str
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e}"))?;

    let dict = parser::parse_dictionary(&dictionary_path)?;
    tracing::info!(dictionary = %dict.name, words = dict.words.len(), "loaded dictionary");
    let engine = ExerciseEngine::new(EngineConfig {
        typed_set_size: length,
        ..EngineConfig::default()
    });
    let mut rng = SessionRng::new(seed);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    loop {
        let set = match engine.generate_set(&dict.words, mode, rng.as_rng()) {
            Ok(set) => set,
            Err(EngineError::InsufficientPool { required, actual, .. }) => {
                writeln!(
                    out,
                    "Not enough words yet: {mode} needs {required}, '{}' has {actual}.",
                    dict.name
                )?;
                writeln!(out, "Add more words to the dictionary and try again.")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let report = run_session(&dict, set, &mut input, &mut out)?;

        if let Some(dir) = &output {
            std::fs::create_dir_all(dir)?;
            let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
            let path = dir.join(format!("session-{timestamp}.json"));
            report.save_json(&path)?;
            writeln!(out, "Report saved to: {}", path.display())?;
        }

        // A restart is a freshly generated set, never a replay.
        write!(out, "\nPractice again with a fresh set? [y/N] ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        writeln!(out)?;
    }
}

/// Drive one session over the given set, returning its report.
fn run_session(
    dict: &Dictionary,
    set: ExerciseSet,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<SessionReport> {
    let mode = set.mode;
    let total = set.len();
    let start = Instant::now();
    let mut ledger = MasteryLedger::seeded_from(&dict.words);
    let mut session = PracticeSession::new(set);

    writeln!(out, "{}: {} ({} items)\n", dict.name, mode, total)?;

    while let Some(item) = session.current() {
        let item = item.clone();
        writeln!(out, "[{}/{}]", session.position() + 1, total)?;
        present(&item, out)?;

        if item.form == QuestionForm::Review {
            write!(out, "Press Enter to continue... ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            session
                .submit(Response::Typed(String::new()))
                .map_err(|e| anyhow::anyhow!("session state error: {e}"))?;
            session.advance();
            writeln!(out)?;
            continue;
        }

        let response = read_response(&item, input, out)?;
        let verdict = session
            .submit(response)
            .map_err(|e| anyhow::anyhow!("session state error: {e}"))?;

        if verdict.correct {
            writeln!(out, "Correct! {:+} mastery\n", verdict.score_delta)?;
        } else {
            writeln!(
                out,
                "Incorrect. The answer is \"{}\"  {:+} mastery\n",
                expected_answer(&item),
                verdict.score_delta
            )?;
        }
        session.advance();
    }

    let correct = session.correct_count();
    writeln!(out, "Exercise Complete!  {correct} / {total}")?;
    let message = if correct == total {
        "Perfect score! Amazing work!"
    } else if correct as f64 >= total as f64 * 0.7 {
        "Great job! Keep practicing!"
    } else {
        "Keep learning, you'll get better!"
    };
    writeln!(out, "{message}\n")?;

    let updated = ledger.apply_all(&session.score_deltas());
    print_summary(session.outcomes(), &updated, out)?;

    let outcomes = session.outcomes().to_vec();
    let stats = compute_session_stats(&outcomes);
    Ok(SessionReport {
        id: uuid::Uuid::new_v4(),
        created_at: chrono::Utc::now(),
        dictionary: dict.summary(),
        mode,
        outcomes,
        stats,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Print the question for one item.
fn present(item: &ExerciseItem, out: &mut impl Write) -> Result<()> {
    let word = &item.correct;
    match item.form {
        QuestionForm::ImageToWord => {
            writeln!(out, "What is this?  [image: {}]", word.image.as_deref().unwrap_or("-"))?;
            print_options(item, out, |w| format!("{} ({})", w.term, w.definition))?;
        }
        QuestionForm::WordToImage => {
            writeln!(out, "Choose the matching image for: {} ({})", word.term, word.definition)?;
            print_options(item, out, |w| {
                format!("[image: {}]", w.image.as_deref().unwrap_or("-"))
            })?;
        }
        QuestionForm::ClozeChoice => {
            writeln!(out, "Fill the blank: {}", item.cloze_sentence().unwrap_or("-"))?;
            print_options(item, out, |w| w.term.clone())?;
        }
        QuestionForm::ClozeTyped => {
            writeln!(out, "Fill the blank: {}", item.cloze_sentence().unwrap_or("-"))?;
        }
        QuestionForm::TermToDefinition => {
            writeln!(out, "Type the word for: {}", word.definition)?;
        }
        QuestionForm::DefinitionToTerm => {
            writeln!(out, "Type the meaning of: {}", word.term)?;
        }
        QuestionForm::ComposeSentence => {
            writeln!(out, "Write a sentence using \"{}\" ({})", word.term, word.definition)?;
        }
        QuestionForm::Review => {
            writeln!(out, "{}: {}", word.term, word.definition)?;
            if let Some(example) = &word.example {
                writeln!(out, "  e.g. {example}")?;
            }
        }
    }
    Ok(())
}

fn print_options(
    item: &ExerciseItem,
    out: &mut impl Write,
    label: impl Fn(&WordEntry) -> String,
) -> Result<()> {
    for (index, option) in item.options.iter().enumerate() {
        writeln!(out, "  {}) {}", index + 1, label(option))?;
    }
    Ok(())
}

/// Read one response from the terminal, re-asking on invalid input.
fn read_response(
    item: &ExerciseItem,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Response> {
    loop {
        if item.options.is_empty() {
            write!(out, "> ")?;
        } else {
            write!(out, "Pick 1-{}: ", item.options.len())?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the session finished");
        }
        let line = line.trim();

        if item.options.is_empty() {
            if line.is_empty() {
                continue;
            }
            return Ok(Response::Typed(line.to_string()));
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=item.options.len()).contains(&n) => {
                return Ok(Response::Selected(item.options[n - 1].id.clone()));
            }
            _ => {
                writeln!(out, "Please enter a number between 1 and {}.", item.options.len())?;
            }
        }
    }
}

/// Per-word results table with the mastery movement.
fn print_summary(
    outcomes: &[ItemOutcome],
    updated: &[(String, u8)],
    out: &mut impl Write,
) -> Result<()> {
    use comfy_table::{Cell, Table};

    if outcomes.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Word", "Form", "Result", "Delta", "Mastery"]);

    for (outcome, (_, score)) in outcomes.iter().zip(updated) {
        table.add_row(vec![
            Cell::new(&outcome.term),
            Cell::new(&outcome.form),
            Cell::new(if outcome.correct { "correct" } else { "incorrect" }),
            Cell::new(format!("{:+}", outcome.score_delta)),
            Cell::new(format!("{score}")),
        ]);
    }

    writeln!(out, "{table}")?;
    let net: i32 = outcomes.iter().map(|o| o.score_delta).sum();
    writeln!(out, "Net mastery movement: {net:+}")?;
    Ok(())
}
