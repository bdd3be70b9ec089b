//! Formatting utilities for terminal output

use crate::core::{Verdict, VerdictRow};
use crate::game::{GameSession, GuessRow, MAX_ATTEMPTS, SessionState};
use colored::Colorize;

/// Format a verdict row as colored-square emoji
#[must_use]
pub fn row_to_emoji(row: VerdictRow) -> String {
    row.verdicts()
        .iter()
        .map(|v| match v {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬛',
        })
        .collect()
}

/// Render a session's attempt history as shareable text
///
/// Header line is `Word Game {attempts}/6` on a win and `Word Game X/6`
/// otherwise, followed by one emoji line per played row. The text never
/// contains the letters themselves, so it can be shared without spoiling the
/// word.
#[must_use]
pub fn share_text(session: &GameSession) -> String {
    let attempts = if session.state() == SessionState::Won {
        session.attempts_used().to_string()
    } else {
        "X".to_string()
    };

    let mut result = format!("Word Game {attempts}/{MAX_ATTEMPTS}\n\n");
    for row in session.rows() {
        result.push_str(&row_to_emoji(row.verdicts));
        result.push('\n');
    }

    result
}

/// Format one played row for plain-CLI display
///
/// Letters are uppercased and colored by verdict: green for correct, yellow
/// for present, dim for absent.
#[must_use]
pub fn colored_guess(row: &GuessRow) -> String {
    row.guess
        .text()
        .chars()
        .zip(row.verdicts.verdicts())
        .map(|(ch, verdict)| {
            let letter = ch.to_ascii_uppercase().to_string();
            match verdict {
                Verdict::Correct => letter.bright_green().bold().to_string(),
                Verdict::Present => letter.bright_yellow().bold().to_string(),
                Verdict::Absent => letter.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
