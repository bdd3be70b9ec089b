//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external
//! collaborators. All types here are pure, testable, and have clear rules.

mod verdict;
mod word;

pub use verdict::{Verdict, VerdictRow};
pub use word::{WORD_LENGTH, Word, WordError};
