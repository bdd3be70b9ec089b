//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::config::GameOptions;
use crate::core::{Word, WordError};
use crate::game::{GameSession, GameStats, MAX_ATTEMPTS, TurnOutcome};
use crate::output::{print_board, print_game_over, print_stats, share_text};
use std::io::{self, Write};
use tracing::warn;

/// One line of player input, disambiguated
///
/// Any well-formed 5-letter word is a guess, so playable words like "share"
/// can never be shadowed; commands only use short or non-5-letter spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerInput {
    Guess(Word),
    Quit,
    Share,
    Reveal,
    Invalid(WordError),
}

fn parse_input(input: &str) -> PlayerInput {
    match Word::new(input) {
        Ok(word) => PlayerInput::Guess(word),
        Err(e) => match input {
            "quit" | "q" | "exit" => PlayerInput::Quit,
            "s" => PlayerInput::Share,
            "r" | "reveal" | "give up" => PlayerInput::Reveal,
            _ => PlayerInput::Invalid(e),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(options: &GameOptions) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Daily Word - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("After each guess the letters are colored:");
    println!("  - Green:  correct position");
    println!("  - Yellow: in the word, wrong position");
    println!("  - Dim:    not in the word\n");
    println!("Commands: 'quit' to exit, 's' for the result grid, 'reveal' to give up\n");

    let mut stats = GameStats::load(&options.stats_path);
    let mut session = GameSession::new(options.next_secret());

    loop {
        let turn = session.attempts_used() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))?.to_lowercase();

        let guess = match parse_input(&input) {
            PlayerInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayerInput::Share => {
                println!("\n{}", share_text(&session));
                continue;
            }
            PlayerInput::Reveal => {
                println!(
                    "\nThe word was: {}",
                    session.secret().text().to_uppercase()
                );
                session.resign();
                record_and_show(&mut stats, options, false);

                if !play_again(&mut session, options)? {
                    return Ok(());
                }
                continue;
            }
            PlayerInput::Invalid(e) => {
                println!("❌ {e}\n");
                continue;
            }
            PlayerInput::Guess(word) => word,
        };

        if !options.validate_guess(&guess) {
            println!("❌ Not a valid word!\n");
            continue;
        }

        let outcome = session.submit(guess).map_err(|e| e.to_string())?;

        // Echo the full board so far
        println!();
        print_board(&session);
        println!();

        match outcome {
            TurnOutcome::NextTurn => {}
            TurnOutcome::Won => {
                print_game_over(&session);
                record_and_show(&mut stats, options, true);

                if !play_again(&mut session, options)? {
                    return Ok(());
                }
            }
            TurnOutcome::Lost => {
                print_game_over(&session);
                record_and_show(&mut stats, options, false);

                if !play_again(&mut session, options)? {
                    return Ok(());
                }
            }
        }
    }
}

fn record_and_show(stats: &mut GameStats, options: &GameOptions, won: bool) {
    stats.record(won);
    if let Err(e) = stats.save(&options.stats_path) {
        warn!(error = %e, "Failed to save statistics");
    }
    print_stats(stats);
}

/// Ask to continue; on yes, swap in a fresh session
fn play_again(session: &mut GameSession, options: &GameOptions) -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            *session = GameSession::new(options.next_secret());
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;

    #[test]
    fn five_letter_words_are_always_guesses() {
        // "share" is a playable word; it must never be swallowed as a command
        assert_eq!(
            parse_input("share"),
            PlayerInput::Guess(Word::new("share").unwrap())
        );
        assert_eq!(
            parse_input("quits"),
            PlayerInput::Guess(Word::new("quits").unwrap())
        );
    }

    #[test]
    fn commands_use_non_word_spellings() {
        assert_eq!(parse_input("quit"), PlayerInput::Quit);
        assert_eq!(parse_input("q"), PlayerInput::Quit);
        assert_eq!(parse_input("exit"), PlayerInput::Quit);
        assert_eq!(parse_input("s"), PlayerInput::Share);
        assert_eq!(parse_input("r"), PlayerInput::Reveal);
        assert_eq!(parse_input("reveal"), PlayerInput::Reveal);
        assert_eq!(parse_input("give up"), PlayerInput::Reveal);
    }

    #[test]
    fn malformed_input_reports_word_error() {
        assert!(matches!(
            parse_input("cat"),
            PlayerInput::Invalid(WordError::InvalidLength(3))
        ));
        assert!(matches!(
            parse_input("cr4te"),
            PlayerInput::Invalid(WordError::InvalidCharacters)
        ));
    }

    #[test]
    fn secret_share_is_winnable() {
        let mut session = GameSession::new(Word::new("share").unwrap());

        let PlayerInput::Guess(guess) = parse_input("share") else {
            panic!("'share' must parse as a guess");
        };
        session.submit(guess).unwrap();

        assert_eq!(session.state(), SessionState::Won);
    }
}
