//! Practice session state machine.
//!
//! Per item: `unanswered -> {correct | incorrect}`, terminal for that
//! item. Per session: `in-progress -> completed`. A restart is a
//! freshly generated set, never a replay of this one; the caller asks
//! the engine for a new set and builds a new session.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::grade::{evaluate, Response, Verdict};
use crate::model::{ExerciseItem, ExerciseSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// The grading record for one item in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub word_id: String,
    pub term: String,
    pub form: String,
    pub response: Response,
    pub correct: bool,
    pub score_delta: i32,
}

/// One in-progress run through an exercise set.
///
/// The session owns its set snapshot; concurrent edits to the word
/// store are neither reflected here nor able to corrupt it.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    set: ExerciseSet,
    position: usize,
    answered_current: bool,
    outcomes: Vec<ItemOutcome>,
}

impl PracticeSession {
    pub fn new(set: ExerciseSet) -> Self {
        Self {
            set,
            position: 0,
            answered_current: false,
            outcomes: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.position >= self.set.len() {
            SessionState::Completed
        } else {
            SessionState::InProgress
        }
    }

    /// The item awaiting an answer, if any.
    pub fn current(&self) -> Option<&ExerciseItem> {
        self.set.items.get(self.position)
    }

    /// Zero-based index of the current item.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set(&self) -> &ExerciseSet {
        &self.set
    }

    /// Grade the current item and record the outcome. The item is
    /// terminal afterwards: a second submit for the same position is
    /// rejected, and `advance` moves to the next item.
    pub fn submit(&mut self, response: Response) -> Result<Verdict, SessionError> {
        let item = self.set.items.get(self.position).ok_or(SessionError::Completed)?;
        if self.answered_current {
            return Err(SessionError::AlreadyAnswered(self.position));
        }

        let verdict = evaluate(item, &response);
        self.answered_current = true;
        self.outcomes.push(ItemOutcome {
            word_id: item.correct.id.clone(),
            term: item.correct.term.clone(),
            form: item.form.to_string(),
            response,
            correct: verdict.correct,
            score_delta: verdict.score_delta,
        });
        Ok(verdict)
    }

    /// Move past the current item. Submitting is not required first;
    /// skipped review cards simply record no outcome.
    pub fn advance(&mut self) {
        if self.position < self.set.len() {
            self.position += 1;
            self.answered_current = false;
        }
    }

    pub fn correct_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.correct).count()
    }

    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    /// `(word_id, delta)` pairs to forward to the mastery tracker.
    pub fn score_deltas(&self) -> Vec<(String, i32)> {
        self.outcomes
            .iter()
            .map(|o| (o.word_id.clone(), o.score_delta))
            .collect()
    }
}
