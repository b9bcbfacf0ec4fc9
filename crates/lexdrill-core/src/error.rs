//! Engine and store error types.
//!
//! Defined here so callers can match on failure kinds and surface the
//! right user-facing state (e.g. "not enough words yet") without
//! string matching.

use thiserror::Error;

use crate::model::ExerciseMode;

/// Errors raised while generating an exercise set.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pool cannot supply the minimum distinct entries the mode
    /// requires (4 for choice-based modes, 1 for typed modes).
    #[error("{mode} needs at least {required} words, pool has {actual}")]
    InsufficientPool {
        mode: ExerciseMode,
        required: usize,
        actual: usize,
    },

    /// An entry would produce an unanswerable item.
    #[error("malformed entry '{id}': {reason}")]
    MalformedEntry { id: String, reason: String },
}

impl EngineError {
    pub(crate) fn malformed(id: &str, reason: impl Into<String>) -> Self {
        EngineError::MalformedEntry {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by word store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("word not found: {0}")]
    WordNotFound(String),

    #[error("word id already exists: {0}")]
    DuplicateWord(String),
}

/// Errors raised by the session state machine.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The current item was already graded; per-item state is terminal.
    #[error("item {0} was already answered")]
    AlreadyAnswered(usize),

    /// The session has no remaining items to grade.
    #[error("session is already completed")]
    Completed,
}
