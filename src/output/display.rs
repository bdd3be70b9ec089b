//! Display functions for game results and statistics

use super::formatters::{colored_guess, share_text};
use crate::game::{GameSession, GameStats, SessionState};
use colored::Colorize;

/// Print the board played so far, one colored line per guess
pub fn print_board(session: &GameSession) {
    for (i, row) in session.rows().iter().enumerate() {
        println!("  {}  {}", (i + 1).to_string().bright_black(), colored_guess(row));
    }
}

/// Print the end-of-game banner, the secret on a loss, and the share grid
pub fn print_game_over(session: &GameSession) {
    println!("\n{}", "─".repeat(40).cyan());

    match session.state() {
        SessionState::Won => {
            println!(
                "{}",
                format!("🎉 You won in {}/6!", session.attempts_used())
                    .green()
                    .bold()
            );
        }
        SessionState::Lost => {
            println!(
                "{} The word was: {}",
                "😞 Game over!".red().bold(),
                session.secret().text().to_uppercase().bright_yellow().bold()
            );
        }
        SessionState::InProgress => return,
    }

    println!("\n{}", share_text(session));
}

/// Print the saved statistics block
pub fn print_stats(stats: &GameStats) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", " Statistics ".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  Played:         {}", stats.games_played);
    println!("  Won:            {}", stats.games_won);
    println!("  Win rate:       {}%", stats.win_rate_percent());
    println!("  Current streak: {}", stats.current_streak);
    println!("  Max streak:     {}", stats.max_streak);
    println!();
}
