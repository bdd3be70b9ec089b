//! Terminal output formatting
//!
//! Display utilities for CLI results and the shareable emoji grid.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_stats};
pub use formatters::{colored_guess, row_to_emoji, share_text};
