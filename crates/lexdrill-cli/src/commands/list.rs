//! The `lexdrill list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexdrill_core::model::Dictionary;
use lexdrill_core::parser;

pub fn execute(path: PathBuf) -> Result<()> {
    let dictionaries = if path.is_dir() {
        parser::load_dictionary_directory(&path)?
    } else {
        vec![parser::parse_dictionary(&path)?]
    };

    if dictionaries.is_empty() {
        println!("No dictionaries found in {}", path.display());
        return Ok(());
    }

    for dict in &dictionaries {
        print_dictionary(dict);
    }
    Ok(())
}

fn print_dictionary(dict: &Dictionary) {
    println!(
        "{} {} ({}, {} words)",
        dict.flag.as_deref().unwrap_or(""),
        dict.name,
        dict.language,
        dict.words.len()
    );

    let mut table = Table::new();
    table.set_header(vec!["Id", "Term", "Definition", "Sentence", "Mastery"]);
    for word in &dict.words {
        table.add_row(vec![
            Cell::new(&word.id),
            Cell::new(&word.term),
            Cell::new(&word.definition),
            Cell::new(word.sentence.as_deref().unwrap_or("-")),
            Cell::new(format!("{}", word.mastery)),
        ]);
    }
    println!("{table}\n");
}
