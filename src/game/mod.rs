//! Game session state machine and statistics

mod session;
mod stats;

pub use session::{GameSession, GuessRow, MAX_ATTEMPTS, SessionError, SessionState, TurnOutcome};
pub use stats::{GameStats, default_stats_path};
