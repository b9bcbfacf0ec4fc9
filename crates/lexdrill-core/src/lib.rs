//! Exercise generation, grading, and session state for lexdrill.
//!
//! This crate defines the fundamental data model, the mode-keyed
//! exercise generator, and the answer graders that the rest of the
//! lexdrill system builds on.

pub mod engine;
pub mod error;
pub mod grade;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod shuffle;
pub mod statistics;
pub mod traits;
