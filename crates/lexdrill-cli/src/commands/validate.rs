//! The `lexdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_core::parser;

pub fn execute(path: PathBuf) -> Result<()> {
    let dictionaries = if path.is_dir() {
        parser::load_dictionary_directory(&path)?
    } else {
        vec![parser::parse_dictionary(&path)?]
    };

    anyhow::ensure!(
        !dictionaries.is_empty(),
        "no dictionary files found in {}",
        path.display()
    );

    let mut total_warnings = 0;
    for dict in &dictionaries {
        let warnings = parser::validate_dictionary(dict);
        if warnings.is_empty() {
            println!("{}: ok ({} words)", dict.name, dict.words.len());
            continue;
        }
        println!("{}:", dict.name);
        for warning in &warnings {
            let id = warning.word_id.as_deref().unwrap_or("-");
            println!("  [{id}] {}", warning.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All dictionaries valid.");
    } else {
        println!("{total_warnings} warning(s) found.");
    }
    Ok(())
}
