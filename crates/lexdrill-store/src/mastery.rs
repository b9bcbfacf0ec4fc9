//! In-memory mastery tracker.

use std::collections::HashMap;

use lexdrill_core::model::WordEntry;
use lexdrill_core::traits::MasteryTracker;

/// Running mastery scores keyed by word id, clamped to [0, 100].
#[derive(Debug, Default)]
pub struct MasteryLedger {
    scores: HashMap<String, u8>,
}

impl MasteryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the ledger with the scores already carried by a word pool.
    pub fn seeded_from(words: &[WordEntry]) -> Self {
        let scores = words
            .iter()
            .map(|w| (w.id.clone(), w.mastery.min(100)))
            .collect();
        Self { scores }
    }

    /// Apply a batch of session deltas, returning `(word_id, new
    /// score)` in application order.
    pub fn apply_all(&mut self, deltas: &[(String, i32)]) -> Vec<(String, u8)> {
        deltas
            .iter()
            .map(|(id, delta)| (id.clone(), self.apply_delta(id, *delta)))
            .collect()
    }
}

impl MasteryTracker for MasteryLedger {
    fn apply_delta(&mut self, word_id: &str, delta: i32) -> u8 {
        let current = self.scores.get(word_id).copied().unwrap_or(0);
        let updated = (i32::from(current) + delta).clamp(0, 100) as u8;
        tracing::debug!(word = word_id, delta, score = updated, "mastery updated");
        self.scores.insert(word_id.to_string(), updated);
        updated
    }

    fn mastery(&self, word_id: &str) -> Option<u8> {
        self.scores.get(word_id).copied()
    }
}
