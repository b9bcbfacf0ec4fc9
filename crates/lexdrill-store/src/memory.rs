//! In-memory word store with dictionary CRUD.

use std::collections::BTreeMap;

use lexdrill_core::error::StoreError;
use lexdrill_core::model::{Dictionary, DictionarySummary, WordEntry};
use lexdrill_core::traits::WordStore;

/// Word store backed by an in-memory map, keyed by dictionary id.
/// Dictionaries iterate in id order so listings are stable.
#[derive(Debug, Default)]
pub struct InMemoryWordStore {
    dictionaries: BTreeMap<String, Dictionary>,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from parsed dictionaries. A later dictionary with
    /// the same id replaces an earlier one.
    pub fn with_dictionaries(dictionaries: impl IntoIterator<Item = Dictionary>) -> Self {
        let mut store = Self::new();
        for dict in dictionaries {
            store.insert_dictionary(dict);
        }
        store
    }

    pub fn insert_dictionary(&mut self, dict: Dictionary) {
        tracing::debug!(id = %dict.id, words = dict.words.len(), "inserting dictionary");
        self.dictionaries.insert(dict.id.clone(), dict);
    }

    pub fn remove_dictionary(&mut self, dictionary_id: &str) -> Result<Dictionary, StoreError> {
        self.dictionaries
            .remove(dictionary_id)
            .ok_or_else(|| StoreError::DictionaryNotFound(dictionary_id.to_string()))
    }

    fn dictionary_mut(&mut self, dictionary_id: &str) -> Result<&mut Dictionary, StoreError> {
        self.dictionaries
            .get_mut(dictionary_id)
            .ok_or_else(|| StoreError::DictionaryNotFound(dictionary_id.to_string()))
    }
}

impl WordStore for InMemoryWordStore {
    fn list_dictionaries(&self) -> Vec<DictionarySummary> {
        self.dictionaries.values().map(Dictionary::summary).collect()
    }

    fn get_dictionary(&self, dictionary_id: &str) -> Result<&Dictionary, StoreError> {
        self.dictionaries
            .get(dictionary_id)
            .ok_or_else(|| StoreError::DictionaryNotFound(dictionary_id.to_string()))
    }

    fn list_words(&self, dictionary_id: &str) -> Result<Vec<WordEntry>, StoreError> {
        Ok(self.get_dictionary(dictionary_id)?.words.clone())
    }

    fn add_word(&mut self, dictionary_id: &str, word: WordEntry) -> Result<(), StoreError> {
        let dict = self.dictionary_mut(dictionary_id)?;
        if dict.words.iter().any(|w| w.id == word.id) {
            return Err(StoreError::DuplicateWord(word.id));
        }
        tracing::debug!(dictionary = dictionary_id, word = %word.id, "adding word");
        dict.words.push(word);
        Ok(())
    }

    fn update_word(&mut self, dictionary_id: &str, word: WordEntry) -> Result<(), StoreError> {
        let dict = self.dictionary_mut(dictionary_id)?;
        match dict.words.iter_mut().find(|w| w.id == word.id) {
            Some(existing) => {
                *existing = word;
                Ok(())
            }
            None => Err(StoreError::WordNotFound(word.id)),
        }
    }

    fn remove_word(&mut self, dictionary_id: &str, word_id: &str) -> Result<(), StoreError> {
        let dict = self.dictionary_mut(dictionary_id)?;
        let before = dict.words.len();
        dict.words.retain(|w| w.id != word_id);
        if dict.words.len() == before {
            return Err(StoreError::WordNotFound(word_id.to_string()));
        }
        tracing::debug!(dictionary = dictionary_id, word = word_id, "removed word");
        Ok(())
    }
}
