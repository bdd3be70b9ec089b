//! Daily Word - CLI
//!
//! Terminal word-guessing game with TUI and plain-CLI modes. The secret word
//! comes from a word-of-the-day endpoint (with a local fallback list) and
//! guesses are dictionary-checked remotely.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use daily_word::{
    api::WordApi,
    commands::run_simple,
    config::GameOptions,
    core::Word,
    game::{GameStats, default_stats_path},
    interactive::{App, run_tui},
    output::print_stats,
    wordlists::{OFFLINE_ANSWERS, loader},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daily_word",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play without network access (secret drawn from the built-in list)
    #[arg(long, global = true)]
    offline: bool,

    /// Fix the secret word (practice mode; implies no word-of-the-day fetch)
    #[arg(long, global = true)]
    word: Option<String>,

    /// Custom answer-pool file for offline play (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Override the word endpoints base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Override the statistics file location
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (no TUI)
    Simple,

    /// Show saved statistics
    Stats,
}

/// Assemble game options from the CLI flags
fn build_options(cli: &Cli) -> Result<GameOptions> {
    let fixed_word = cli
        .word
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("Invalid --word value")?;

    let answer_pool = match &cli.wordlist {
        Some(path) => {
            let pool = loader::load_from_file(path)
                .with_context(|| format!("Failed to load wordlist {}", path.display()))?;
            if pool.is_empty() {
                return Err(anyhow!(
                    "Wordlist {} contains no valid 5-letter words",
                    path.display()
                ));
            }
            pool
        }
        None => loader::words_from_slice(OFFLINE_ANSWERS),
    };

    let api = if cli.offline {
        None
    } else {
        let api = match &cli.api_url {
            Some(url) => WordApi::with_base_url(url.clone())?,
            None => WordApi::new()?,
        };
        Some(api)
    };

    Ok(GameOptions {
        api,
        answer_pool,
        fixed_word,
        stats_path: cli.stats_file.clone().unwrap_or_else(default_stats_path),
    })
}

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG turns on network/persistence diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = build_options(&cli)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(options)),
        Commands::Simple => run_simple(&options).map_err(|e| anyhow!(e)),
        Commands::Stats => {
            print_stats(&GameStats::load(&options.stats_path));
            Ok(())
        }
    }
}
