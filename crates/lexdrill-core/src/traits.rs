//! Collaborator traits at the engine boundary.
//!
//! The engine itself is pure; word supply and mastery bookkeeping live
//! behind these traits. The `lexdrill-store` crate provides the
//! in-memory implementations.

use crate::error::StoreError;
use crate::model::{Dictionary, DictionarySummary, WordEntry};

/// Supplies word pools to drive exercise generation, and accepts the
/// edits the dictionary screens make. The engine only uses the read
/// side.
pub trait WordStore {
    fn list_dictionaries(&self) -> Vec<DictionarySummary>;

    fn get_dictionary(&self, dictionary_id: &str) -> Result<&Dictionary, StoreError>;

    /// Snapshot of the words in one dictionary.
    fn list_words(&self, dictionary_id: &str) -> Result<Vec<WordEntry>, StoreError>;

    fn add_word(&mut self, dictionary_id: &str, word: WordEntry) -> Result<(), StoreError>;

    fn update_word(&mut self, dictionary_id: &str, word: WordEntry) -> Result<(), StoreError>;

    fn remove_word(&mut self, dictionary_id: &str, word_id: &str) -> Result<(), StoreError>;
}

/// Persists score deltas from completed exercises. Calls are advisory;
/// implementations clamp the running score to [0, 100].
pub trait MasteryTracker {
    /// Apply one delta and return the new score.
    fn apply_delta(&mut self, word_id: &str, delta: i32) -> u8;

    /// Current score for a word, if one was ever recorded.
    fn mastery(&self, word_id: &str) -> Option<u8>;
}
