//! Remote word endpoints
//!
//! Two black-box collaborators: a GET endpoint handing out the secret word
//! and a POST endpoint checking that a guess is a real dictionary word.
//! Neither failure is ever fatal: the word source falls back to an embedded
//! list at the call site, and the validator fails closed (guess rejected).

use crate::core::Word;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Production endpoint base
pub const DEFAULT_BASE_URL: &str = "https://words.dev-apis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct WordOfTheDay {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Blocking client for the word endpoints
///
/// The game's event loop is single-threaded and guesses are serialized by the
/// turn state machine, so a blocking client with a short timeout is all the
/// concurrency this needs.
#[derive(Debug, Clone)]
pub struct WordApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl WordApi {
    /// Create a client against the production endpoints
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, self-hosted mirrors)
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the secret word of the day
    ///
    /// # Errors
    /// Returns an error on network failure, non-success status, malformed
    /// body, or a word that fails local validation. Callers recover by
    /// substituting a random fallback word; see
    /// [`crate::wordlists::random_fallback`].
    pub fn word_of_the_day(&self) -> Result<Word> {
        let url = format!("{}/word-of-the-day", self.base_url);
        debug!(%url, "Fetching word of the day");

        let body: WordOfTheDay = self
            .client
            .get(&url)
            .send()
            .context("Word-of-the-day request failed")?
            .error_for_status()
            .context("Word-of-the-day request rejected")?
            .json()
            .context("Malformed word-of-the-day response")?;

        Word::new(body.word).map_err(|e| anyhow!("Word source returned an unusable word: {e}"))
    }

    /// Check whether a guess is a real dictionary word
    ///
    /// Fails closed: any transport or decoding error is logged and reported
    /// as "not a valid word", so a flaky validator costs the player a retry,
    /// never an attempt.
    #[must_use]
    pub fn validate(&self, word: &Word) -> bool {
        match self.try_validate(word) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(word = %word, error = %e, "Word validation failed, treating as invalid");
                false
            }
        }
    }

    fn try_validate(&self, word: &Word) -> Result<bool> {
        let url = format!("{}/validate-word", self.base_url);

        let body: ValidateResponse = self
            .client
            .post(&url)
            .json(&ValidateRequest { word: word.text() })
            .send()
            .context("Validate-word request failed")?
            .error_for_status()
            .context("Validate-word request rejected")?
            .json()
            .context("Malformed validate-word response")?;

        Ok(body.valid_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_of_the_day_body_parses() {
        let body: WordOfTheDay = serde_json::from_str(r#"{"word": "crane"}"#).unwrap();
        assert_eq!(body.word, "crane");
    }

    #[test]
    fn validate_response_uses_camel_case() {
        let body: ValidateResponse =
            serde_json::from_str(r#"{"validWord": true, "word": "crane"}"#).unwrap();
        assert!(body.valid_word);

        let body: ValidateResponse = serde_json::from_str(r#"{"validWord": false}"#).unwrap();
        assert!(!body.valid_word);
    }

    #[test]
    fn validate_request_serializes_word_field() {
        let word = Word::new("crane").unwrap();
        let json = serde_json::to_string(&ValidateRequest { word: word.text() }).unwrap();
        assert_eq!(json, r#"{"word":"crane"}"#);
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let api = WordApi::with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(api.base_url, "http://localhost:8080");
    }

    #[test]
    fn validate_fails_closed_when_unreachable() {
        // Nothing listens on port 9; the request errors out immediately and
        // the guess must be rejected rather than accepted.
        let api = WordApi::with_base_url("http://127.0.0.1:9").unwrap();
        let word = Word::new("crane").unwrap();
        assert!(!api.validate(&word));
    }

    #[test]
    fn word_of_the_day_errors_when_unreachable() {
        let api = WordApi::with_base_url("http://127.0.0.1:9").unwrap();
        assert!(api.word_of_the_day().is_err());
    }
}
