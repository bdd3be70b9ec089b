//! Word lists for the game
//!
//! Provides the embedded fallback/offline lists plus random selection from
//! them.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK_COUNT, FALLBACK_WORDS, OFFLINE_ANSWERS, OFFLINE_COUNT};

use crate::core::Word;
use rand::seq::IndexedRandom;

/// Pick a uniformly random fallback word
///
/// Used when the word-of-the-day endpoint is unreachable.
///
/// # Panics
/// Will not panic - the embedded list is non-empty and every entry is a valid
/// word (both enforced by tests).
#[must_use]
pub fn random_fallback() -> Word {
    let text = FALLBACK_WORDS
        .choose(&mut rand::rng())
        .expect("fallback list is non-empty");
    Word::new(*text).expect("embedded words are valid")
}

/// Pick a uniformly random secret from an answer pool
///
/// Returns `None` for an empty pool (e.g. a custom word list file with no
/// valid entries).
#[must_use]
pub fn random_answer(pool: &[Word]) -> Option<Word> {
    pool.choose(&mut rand::rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK_WORDS.len(), FALLBACK_COUNT);
    }

    #[test]
    fn offline_count_matches_const() {
        assert_eq!(OFFLINE_ANSWERS.len(), OFFLINE_COUNT);
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK_WORDS {
            assert!(Word::new(word).is_ok(), "Bad fallback word '{word}'");
        }
    }

    #[test]
    fn offline_answers_are_valid() {
        for &word in OFFLINE_ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn random_fallback_comes_from_list() {
        for _ in 0..20 {
            let word = random_fallback();
            assert!(FALLBACK_WORDS.contains(&word.text()));
        }
    }

    #[test]
    fn random_answer_empty_pool() {
        assert_eq!(random_answer(&[]), None);
    }

    #[test]
    fn random_answer_singleton_pool() {
        let pool = vec![Word::new("crane").unwrap()];
        assert_eq!(random_answer(&pool), Some(pool[0].clone()));
    }
}
