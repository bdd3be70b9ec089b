//! Daily Word
//!
//! A terminal word-guessing game: six attempts to guess a secret five-letter
//! word, with per-letter color feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_word::core::{Verdict, VerdictRow, Word};
//!
//! let secret = Word::new("crate").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let row = VerdictRow::evaluate(&guess, &secret);
//! assert_eq!(row.count_of(Verdict::Correct), 3);
//! ```

// Core domain types
pub mod core;

// Session state machine and statistics
pub mod game;

// Remote word endpoints
pub mod api;

// Game configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
