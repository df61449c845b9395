//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and statistics for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{MAX_GUESSES, WordSelector};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSelector>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages and stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

/// Tile colors for a letter status; `None` is an unscored tile
fn tile_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn render_board<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let board = app.session.board();
    let cursor = app.session.cursor();

    let mut lines = vec![Line::from("")];
    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let cell = board.cell(row, col);
            let text = format!(" {} ", cell.letter().unwrap_or('·'));
            let mut style = tile_style(app.visible_status(row, col));
            if !app.session.is_game_over() && row == cursor.row && col == cursor.tile {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Messages
            Constraint::Percentage(60), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = &app.stats;
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!(
            "Played: {}  Win %: {:.0}  Streak: {} (max {})",
            stats.total_games,
            stats.win_rate(),
            stats.current_streak,
            stats.max_streak
        )),
        Line::from(""),
    ];

    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar_len = count * 20 / max_count;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Some(share) = app.session.share_grid().filter(|_| app.reveal.is_none()) {
        lines.push(Line::from(""));
        lines.extend(share.lines().map(|l| Line::from(l.to_string())));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(format!(" {c} "), tile_style(app.shown_keys.get(c))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let progress = if app.session.is_game_over() {
        "Game over".to_string()
    } else {
        format!("Guess {}/{MAX_GUESSES}", app.session.guesses_used() + 1)
    };
    let progress = Paragraph::new(progress)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(progress, chunks[0]);

    let help_text = if app.session.is_game_over() {
        "n/Enter: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
