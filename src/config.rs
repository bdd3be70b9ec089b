//! Game configuration assembled from CLI flags
//!
//! `GameOptions` is the single seam between the UIs and the outside world:
//! where secrets come from, whether guesses are dictionary-checked, and where
//! statistics are persisted. Both the TUI and the plain CLI mode take it by
//! reference, so neither owns any global state.

use crate::api::WordApi;
use crate::core::Word;
use crate::wordlists::{self, OFFLINE_ANSWERS, loader::words_from_slice};
use std::path::PathBuf;
use tracing::warn;

/// Sources and sinks for one run of the game
#[derive(Debug)]
pub struct GameOptions {
    /// Remote endpoints; `None` in offline mode
    pub api: Option<WordApi>,
    /// Answer pool used when no API is configured
    pub answer_pool: Vec<Word>,
    /// Fixed secret word (practice mode), overrides both sources
    pub fixed_word: Option<Word>,
    /// Where statistics are loaded from and saved to
    pub stats_path: PathBuf,
}

impl GameOptions {
    /// Offline options with the embedded answer pool (used by tests)
    #[must_use]
    pub fn offline(stats_path: PathBuf) -> Self {
        Self {
            api: None,
            answer_pool: words_from_slice(OFFLINE_ANSWERS),
            fixed_word: None,
            stats_path,
        }
    }

    /// Choose the secret word for a new session
    ///
    /// Order of precedence: fixed word, then the word-of-the-day endpoint,
    /// then the offline pool. A failing endpoint substitutes a uniformly
    /// random word from the built-in fallback list; fetching never fails the
    /// game.
    #[must_use]
    pub fn next_secret(&self) -> Word {
        if let Some(word) = &self.fixed_word {
            return word.clone();
        }

        if let Some(api) = &self.api {
            return match api.word_of_the_day() {
                Ok(word) => word,
                Err(e) => {
                    warn!(error = %e, "Word source unreachable, using fallback word");
                    wordlists::random_fallback()
                }
            };
        }

        wordlists::random_answer(&self.answer_pool).unwrap_or_else(wordlists::random_fallback)
    }

    /// Dictionary-check a guess
    ///
    /// Offline mode accepts any well-formed word; with an API configured the
    /// check fails closed on endpoint errors.
    #[must_use]
    pub fn validate_guess(&self, word: &Word) -> bool {
        self.api.as_ref().is_none_or(|api| api.validate(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GameOptions {
        GameOptions::offline(std::env::temp_dir().join("daily_word_test_stats.json"))
    }

    #[test]
    fn fixed_word_takes_precedence() {
        let mut opts = options();
        opts.fixed_word = Some(Word::new("crane").unwrap());

        for _ in 0..5 {
            assert_eq!(opts.next_secret().text(), "crane");
        }
    }

    #[test]
    fn offline_secret_comes_from_pool() {
        let mut opts = options();
        opts.answer_pool = vec![Word::new("crate").unwrap()];
        assert_eq!(opts.next_secret().text(), "crate");
    }

    #[test]
    fn empty_pool_falls_back() {
        let mut opts = options();
        opts.answer_pool.clear();

        let secret = opts.next_secret();
        assert!(wordlists::FALLBACK_WORDS.contains(&secret.text()));
    }

    #[test]
    fn unreachable_api_falls_back() {
        let mut opts = options();
        opts.api = Some(WordApi::with_base_url("http://127.0.0.1:9").unwrap());

        let secret = opts.next_secret();
        assert!(wordlists::FALLBACK_WORDS.contains(&secret.text()));
    }

    #[test]
    fn offline_validation_accepts_any_word() {
        let opts = options();
        assert!(opts.validate_guess(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn unreachable_api_rejects_guesses() {
        let mut opts = options();
        opts.api = Some(WordApi::with_base_url("http://127.0.0.1:9").unwrap());
        assert!(!opts.validate_guess(&Word::new("crane").unwrap()));
    }
}
