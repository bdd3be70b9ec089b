//! Game session state machine
//!
//! A `GameSession` owns the secret word and the rows played so far. It is the
//! single source of truth for one game; rendering layers read from it instead
//! of holding state of their own, and sessions are plain serializable values
//! so tests can run as many of them side by side as they like.

use crate::core::{VerdictRow, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// One submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRow {
    pub guess: Word,
    pub verdicts: VerdictRow,
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the next guess
    InProgress,
    /// Secret guessed within the attempt limit (terminal)
    Won,
    /// Attempts exhausted or the player gave up (terminal)
    Lost,
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The guess matched the secret
    Won,
    /// Attempt limit reached without a match
    Lost,
    /// Guess evaluated, more attempts remain
    NextTurn,
}

/// Error type for session misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Guess submitted to a session already in a terminal state
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One game: a secret word, up to six evaluated guesses, and an outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    secret: Word,
    rows: Vec<GuessRow>,
    state: SessionState,
}

impl GameSession {
    /// Start a new session around the given secret word
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            rows: Vec::new(),
            state: SessionState::InProgress,
        }
    }

    /// Submit a guess and advance the turn state machine
    ///
    /// The guess is assumed to have already passed dictionary validation;
    /// the session only evaluates it. A win is exactly `guess == secret`,
    /// which is the same as all five verdicts coming back `Correct`.
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the session is already won or lost.
    pub fn submit(&mut self, guess: Word) -> Result<TurnOutcome, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::Finished);
        }

        let verdicts = VerdictRow::evaluate(&guess, &self.secret);
        let won = verdicts.is_win();
        self.rows.push(GuessRow { guess, verdicts });

        if won {
            self.state = SessionState::Won;
            Ok(TurnOutcome::Won)
        } else if self.rows.len() >= MAX_ATTEMPTS {
            self.state = SessionState::Lost;
            Ok(TurnOutcome::Lost)
        } else {
            Ok(TurnOutcome::NextTurn)
        }
    }

    /// Give up: ends the session as a loss
    ///
    /// No-op if the session is already in a terminal state.
    pub fn resign(&mut self) {
        if self.state == SessionState::InProgress {
            self.state = SessionState::Lost;
        }
    }

    /// The secret word (used for reveal and end-of-game messages)
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Rows played so far, in order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.len()
    }

    /// Guesses still available (0 once the session is over)
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.state == SessionState::InProgress {
            MAX_ATTEMPTS - self.rows.len()
        } else {
            0
        }
    }

    /// Whether the session reached a terminal state
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != SessionState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn session_win_on_exact_guess() {
        let mut session = GameSession::new(word("crate"));
        let outcome = session.submit(word("crate")).unwrap();

        assert_eq!(outcome, TurnOutcome::Won);
        assert_eq!(session.state(), SessionState::Won);
        assert!(session.is_over());
        assert_eq!(session.attempts_used(), 1);
        assert!(session.rows()[0].verdicts.is_win());
    }

    #[test]
    fn session_advances_to_next_turn() {
        let mut session = GameSession::new(word("crate"));
        let outcome = session.submit(word("trace")).unwrap();

        assert_eq!(outcome, TurnOutcome::NextTurn);
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn session_lost_after_six_misses() {
        let mut session = GameSession::new(word("crate"));

        for _ in 0..5 {
            assert_eq!(session.submit(word("slate")).unwrap(), TurnOutcome::NextTurn);
        }
        let last = session.submit(word("slate")).unwrap();

        assert_eq!(last, TurnOutcome::Lost);
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.attempts_used(), MAX_ATTEMPTS);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn session_win_on_final_attempt() {
        let mut session = GameSession::new(word("crate"));

        for _ in 0..5 {
            session.submit(word("slate")).unwrap();
        }
        assert_eq!(session.submit(word("crate")).unwrap(), TurnOutcome::Won);
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn session_rejects_guess_after_finish() {
        let mut session = GameSession::new(word("crate"));
        session.submit(word("crate")).unwrap();

        assert_eq!(
            session.submit(word("slate")),
            Err(SessionError::Finished)
        );
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn session_resign_is_a_loss() {
        let mut session = GameSession::new(word("crate"));
        session.submit(word("slate")).unwrap();
        session.resign();

        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.submit(word("crate")), Err(SessionError::Finished));
    }

    #[test]
    fn session_resign_does_not_overwrite_win() {
        let mut session = GameSession::new(word("crate"));
        session.submit(word("crate")).unwrap();
        session.resign();

        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn session_rows_record_feedback_in_order() {
        let mut session = GameSession::new(word("crate"));
        session.submit(word("trace")).unwrap();
        session.submit(word("slate")).unwrap();

        assert_eq!(session.rows().len(), 2);
        assert_eq!(session.rows()[0].guess.text(), "trace");
        assert_eq!(session.rows()[1].guess.text(), "slate");
        assert_eq!(
            session.rows()[0].verdicts.count_of(Verdict::Correct),
            3
        );
    }

    #[test]
    fn session_serde_round_trip() {
        let mut session = GameSession::new(word("allot"));
        session.submit(word("lolly")).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(back.secret().text(), "allot");
        assert_eq!(back.rows(), session.rows());
        assert_eq!(back.state(), SessionState::InProgress);
    }

    #[test]
    fn independent_sessions_do_not_share_state() {
        let mut a = GameSession::new(word("crate"));
        let mut b = GameSession::new(word("allot"));

        a.submit(word("crate")).unwrap();
        b.submit(word("slate")).unwrap();

        assert_eq!(a.state(), SessionState::Won);
        assert_eq!(b.state(), SessionState::InProgress);
    }
}
