//! TOML dictionary parser.
//!
//! Loads dictionaries from TOML files and directories, and validates
//! them for the problems that would surface mid-exercise otherwise.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Dictionary, WordEntry, BLANK_TOKEN};

/// Intermediate TOML structure for parsing dictionary files.
#[derive(Debug, Deserialize)]
struct TomlDictionaryFile {
    dictionary: TomlDictionaryHeader,
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlDictionaryHeader {
    id: String,
    name: String,
    language: String,
    #[serde(default)]
    flag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    id: String,
    term: String,
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    sentence: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    mastery: u8,
}

/// Parse a single TOML file into a `Dictionary`.
pub fn parse_dictionary(path: &Path) -> Result<Dictionary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary file: {}", path.display()))?;

    parse_dictionary_str(&content, path)
}

/// Parse a TOML string into a `Dictionary` (useful for testing).
pub fn parse_dictionary_str(content: &str, source_path: &Path) -> Result<Dictionary> {
    let parsed: TomlDictionaryFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let words = parsed
        .words
        .into_iter()
        .map(|w| WordEntry {
            id: w.id,
            term: w.term,
            definition: w.definition,
            example: w.example,
            sentence: w.sentence,
            image: w.image,
            mastery: w.mastery,
        })
        .collect();

    Ok(Dictionary {
        id: parsed.dictionary.id,
        name: parsed.dictionary.name,
        language: parsed.dictionary.language,
        flag: parsed.dictionary.flag,
        words,
    })
}

/// Recursively load all `.toml` dictionary files from a directory.
pub fn load_dictionary_directory(dir: &Path) -> Result<Vec<Dictionary>> {
    let mut dictionaries = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            dictionaries.extend(load_dictionary_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_dictionary(&path) {
                Ok(dict) => dictionaries.push(dict),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(dictionaries)
}

/// A warning from dictionary validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The word ID (if applicable).
    pub word_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a dictionary for common issues.
pub fn validate_dictionary(dict: &Dictionary) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate word IDs
    let mut seen_ids = std::collections::HashSet::new();
    for word in &dict.words {
        if !seen_ids.insert(&word.id) {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: format!("duplicate word ID: {}", word.id),
            });
        }
    }

    for word in &dict.words {
        if word.term.trim().is_empty() {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: "term is empty".into(),
            });
        }
        if word.definition.trim().is_empty() {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: "definition is empty".into(),
            });
        }

        // A blank-less sentence renders as an unanswerable cloze item.
        if let Some(sentence) = &word.sentence {
            match sentence.matches(BLANK_TOKEN).count() {
                0 => warnings.push(ValidationWarning {
                    word_id: Some(word.id.clone()),
                    message: format!("sentence has no '{BLANK_TOKEN}' blank"),
                }),
                1 => {}
                n => warnings.push(ValidationWarning {
                    word_id: Some(word.id.clone()),
                    message: format!("sentence has {n} blanks, expected 1"),
                }),
            }
        }

        if let Some(example) = &word.example {
            if !example.contains(word.term.trim()) {
                warnings.push(ValidationWarning {
                    word_id: Some(word.id.clone()),
                    message: "example does not contain the term verbatim".into(),
                });
            }
        }

        if word.mastery > 100 {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: format!("mastery {} is above 100", word.mastery),
            });
        }
    }

    warnings
}
