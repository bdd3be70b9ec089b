//! Guess evaluation and per-letter verdicts
//!
//! A `VerdictRow` encodes the feedback for one guess:
//! - `Correct` (green): letter matches the secret at that exact position
//! - `Present` (yellow): letter occurs elsewhere in the secret, subject to
//!   multiplicity
//! - `Absent` (black): letter does not occur, or all its occurrences are
//!   already accounted for

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

/// Ordered feedback for one full guess, one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictRow([Verdict; WORD_LENGTH]);

impl VerdictRow {
    /// Evaluate `guess` against `secret`
    ///
    /// This implements the standard feedback rules, including proper handling
    /// of duplicate letters. The letter pool is rebuilt from the secret on
    /// every call, so evaluation is a pure function of its two inputs.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (`Correct`) and remove each matched
    ///    letter from the available pool
    /// 2. Second pass: mark displaced letters (`Present`) only while the pool
    ///    still has that letter, else `Absent`
    ///
    /// Resolving exact matches first guarantees that a letter is credited
    /// `Correct`/`Present` at most as many times as it occurs in the secret.
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::{Verdict, VerdictRow, Word};
    ///
    /// let secret = Word::new("crate").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let row = VerdictRow::evaluate(&guess, &secret);
    ///
    /// use Verdict::{Correct, Present};
    /// assert_eq!(
    ///     row.verdicts(),
    ///     &[Present, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = Verdict::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced letters, limited by the remaining pool
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] != Verdict::Correct {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if this row is a win (all positions `Correct`)
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count_of(self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }
}
