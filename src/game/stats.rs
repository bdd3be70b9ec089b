//! Lifetime statistics and their persistence
//!
//! Four counters survive between sessions: games played, games won, current
//! streak, and max streak. They live in a small JSON file; a missing or
//! unreadable file just means fresh counters.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name used under the home directory by default
const STATS_FILE_NAME: &str = ".daily_word_stats.json";

/// Accumulated game statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl GameStats {
    /// Record a finished game
    ///
    /// A win extends the streak and the max-streak watermark; a loss resets
    /// the current streak to zero.
    pub fn record(&mut self, won: bool) {
        self.games_played += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Win rate as a rounded percentage (0 when no games played)
    #[must_use]
    pub fn win_rate_percent(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
        }
    }

    /// Load statistics from a file
    ///
    /// A missing file initializes all counters to zero. A corrupt file is
    /// logged and also treated as zero; it will be overwritten on the next
    /// save.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(stats) => stats,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt stats file, starting fresh");
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read stats file");
                Self::default()
            }
        }
    }

    /// Save statistics to a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be written; callers treat this
    /// as a warning, never as fatal.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

/// Default location of the stats file
///
/// `$HOME/.daily_word_stats.json`, falling back to the current directory when
/// no home directory is set.
#[must_use]
pub fn default_stats_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(STATS_FILE_NAME),
        |home| PathBuf::from(home).join(STATS_FILE_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_start_at_zero() {
        let stats = GameStats::default();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 0);
        assert_eq!(stats.win_rate_percent(), 0);
    }

    #[test]
    fn stats_record_win() {
        let mut stats = GameStats::default();
        stats.record(true);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.win_rate_percent(), 100);
    }

    #[test]
    fn stats_loss_resets_streak_but_keeps_max() {
        let mut stats = GameStats::default();
        stats.record(true);
        stats.record(true);
        stats.record(false);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.win_rate_percent(), 67);
    }

    #[test]
    fn stats_streak_rebuilds_after_loss() {
        let mut stats = GameStats::default();
        stats.record(true);
        stats.record(false);
        stats.record(true);
        stats.record(true);
        stats.record(true);

        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn stats_load_missing_file_is_zero() {
        let path = std::env::temp_dir().join("daily_word_no_such_stats.json");
        let _ = fs::remove_file(&path);

        assert_eq!(GameStats::load(&path), GameStats::default());
    }

    #[test]
    fn stats_load_corrupt_file_is_zero() {
        let path = std::env::temp_dir().join("daily_word_corrupt_stats.json");
        fs::write(&path, "not json{").unwrap();

        assert_eq!(GameStats::load(&path), GameStats::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn stats_save_then_load_round_trip() {
        let path = std::env::temp_dir().join("daily_word_roundtrip_stats.json");

        let mut stats = GameStats::default();
        stats.record(true);
        stats.record(false);
        stats.record(true);

        stats.save(&path).unwrap();
        assert_eq!(GameStats::load(&path), stats);
        let _ = fs::remove_file(&path);
    }
}
