//! TUI application state and logic

use crate::config::GameOptions;
use crate::core::{Verdict, WORD_LENGTH, Word};
use crate::game::{GameSession, GameStats, SessionState, TurnOutcome};
use crate::output::share_text;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use tracing::warn;

/// Application state
pub struct App {
    pub options: GameOptions,
    pub session: GameSession,
    pub stats: GameStats,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    stats_recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Player is filling the current row
    Typing,
    /// Session finished; waiting for new-game/share/quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        let stats = GameStats::load(&options.stats_path);
        let session = GameSession::new(options.next_secret());

        Self {
            options,
            session,
            stats,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the 5-letter word! Type letters and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Typing,
            should_quit: false,
            stats_recorded: false,
        }
    }

    /// Submit the current input buffer as a guess
    ///
    /// Runs the full turn: length gate, dictionary validation, evaluation,
    /// win/loss bookkeeping. The transitions mirror
    /// AwaitingInput → Validating → Evaluated → (Won | NextTurn | Lost).
    pub fn submit_current(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let guess = match Word::new(&self.input_buffer) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
                return;
            }
        };

        if !self.options.validate_guess(&guess) {
            self.add_message("Not a valid word!", MessageStyle::Error);
            return;
        }

        match self.session.submit(guess) {
            Ok(TurnOutcome::Won) => {
                let attempts = self.session.attempts_used();
                self.finish_game(true);
                self.add_message(
                    &format!("🎉 Congratulations! You won in {attempts}/6!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game, 's' to share, 'q' to quit.", MessageStyle::Info);
            }
            Ok(TurnOutcome::Lost) => {
                let secret = self.session.secret().text().to_uppercase();
                self.finish_game(false);
                self.add_message(
                    &format!("😞 Game over! The word was: {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game, 's' to share, 'q' to quit.", MessageStyle::Info);
            }
            Ok(TurnOutcome::NextTurn) => {
                let remaining = self.session.attempts_remaining();
                self.add_message(&format!("{remaining} attempts remaining"), MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
            }
        }

        self.input_buffer.clear();
    }

    /// Give up and reveal the secret; counts as a loss
    pub fn reveal(&mut self) {
        if self.session.is_over() {
            return;
        }

        let secret = self.session.secret().text().to_uppercase();
        self.session.resign();
        self.finish_game(false);
        self.add_message(&format!("The word was: {secret}"), MessageStyle::Info);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh session with a new secret
    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.options.next_secret());
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.stats_recorded = false;
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Show the shareable emoji grid in the message area
    pub fn share(&mut self) {
        for line in share_text(&self.session).lines() {
            if !line.is_empty() {
                self.add_message(line, MessageStyle::Info);
            }
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.input_mode = InputMode::GameOver;

        // One stats entry per session, even if reveal fires after a loss
        if self.stats_recorded {
            return;
        }
        self.stats_recorded = true;

        self.stats.record(won);
        if let Err(e) = self.stats.save(&self.options.stats_path) {
            warn!(error = %e, "Failed to save statistics");
            self.add_message("Could not save statistics", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best verdict seen so far for each guessed letter
    ///
    /// Drives the keyboard hint row: `Correct` beats `Present` beats
    /// `Absent`.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, Verdict> {
        fn rank(v: Verdict) -> u8 {
            match v {
                Verdict::Correct => 2,
                Verdict::Present => 1,
                Verdict::Absent => 0,
            }
        }

        let mut hints: FxHashMap<u8, Verdict> = FxHashMap::default();
        for row in self.session.rows() {
            for (&ch, &verdict) in row.guess.chars().iter().zip(row.verdicts.verdicts()) {
                hints
                    .entry(ch)
                    .and_modify(|best| {
                        if rank(verdict) > rank(*best) {
                            *best = verdict;
                        }
                    })
                    .or_insert(verdict);
            }
        }
        hints
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('s') => {
                        app.share();
                    }
                    _ => {
                        // Ignore other keys once the game is over
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.share();
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.reveal();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
