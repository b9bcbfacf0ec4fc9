//! In-memory collaborator implementations for lexdrill.
//!
//! Implements the `WordStore` and `MasteryTracker` traits from
//! `lexdrill-core` with plain in-memory maps. Nothing here persists
//! across processes; durable learner state is out of scope.

pub mod mastery;
pub mod memory;

pub use mastery::MasteryLedger;
pub use memory::InMemoryWordStore;
