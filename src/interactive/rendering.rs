//! TUI rendering with ratatui
//!
//! Board, keyboard hints, statistics, and message area for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board on the left, stats and keyboard on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 DAILY WORD - Guess the Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.session.rows();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for i in 0..MAX_ATTEMPTS {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];

        if let Some(row) = rows.get(i) {
            // Played row: letters on verdict-colored cells
            for (&ch, &verdict) in row.guess.chars().iter().zip(row.verdicts.verdicts()) {
                spans.push(Span::styled(
                    format!(" {} ", ch.to_ascii_uppercase() as char),
                    verdict_style(verdict),
                ));
                spans.push(Span::raw(" "));
            }
        } else if i == rows.len() && !app.session.is_over() {
            // Active row: typed letters plus placeholders
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for pos in 0..WORD_LENGTH {
                let cell = typed.get(pos).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&c| {
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                );
                spans.push(cell);
                spans.push(Span::raw(" "));
            }
        } else {
            // Future row
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Attempt {}/{} ",
                (app.session.attempts_used() + 1).min(MAX_ATTEMPTS),
                MAX_ATTEMPTS
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let content = vec![
        Line::from(format!("Played:         {}", stats.games_played)),
        Line::from(format!("Win rate:       {}%", stats.win_rate_percent())),
        Line::from(format!("Current streak: {}", stats.current_streak)),
        Line::from(format!("Max streak:     {}", stats.max_streak)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.letter_hints();

    let key_style = |ch: u8| match hints.get(&ch) {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    };

    let mut lines: Vec<Line> = Vec::with_capacity(5);
    for (indent, row) in [(0, "qwertyuiop"), (1, "asdfghjkl"), (2, "zxcvbnm")] {
        let mut spans: Vec<Span> = vec![Span::raw(" ".repeat(indent))];
        for ch in row.bytes() {
            spans.push(Span::styled(
                format!("{} ", (ch.to_ascii_uppercase()) as char),
                key_style(ch),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(msg.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::Typing => {
            "Type letters · Enter submit · Backspace delete · ^R new game · ^S share · ^D reveal · Esc quit"
        }
        InputMode::GameOver => "n new game · s share · q quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
