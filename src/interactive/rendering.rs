//! TUI rendering with ratatui
//!
//! Layout for the Spelling Bee play mode.

use super::app::{App, MESSAGE_CAP, MessageStyle};
use crate::session::WordStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Attempt
            Constraint::Length(5), // Letters
            Constraint::Length(3), // Score gauge
            Constraint::Min(8),    // Tiers / found / messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_attempt(f, app, chunks[1]);
    render_letters(f, app, chunks[2]);
    render_score(f, app, chunks[3]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Tier ladder
            Constraint::Percentage(35), // Found words
            Constraint::Percentage(35), // Messages
        ])
        .split(chunks[4]);

    render_tiers(f, app, main_chunks[0]);
    render_found(f, app, main_chunks[1]);
    render_messages(f, app, main_chunks[2]);

    render_status(f, chunks[5]);
}

fn render_header<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(format!(
        "🐝 SPELLING BEE — {}",
        app.session.puzzle().seed()
    ))
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(header, area);
}

fn render_attempt<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let puzzle = app.session.puzzle();

    // Color each letter by its standing: center letter gold, letters outside
    // the set red, the rest plain
    let mut spans: Vec<Span> = app
        .session
        .attempt()
        .chars()
        .map(|c| {
            let style = if c == puzzle.center() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if puzzle.letters().contains(c) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Red)
            };
            Span::styled(c.to_ascii_uppercase().to_string(), style)
        })
        .collect();
    spans.push(Span::styled("▌", Style::default().fg(Color::DarkGray)));

    let attempt = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Attempt ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(attempt, area);
}

fn render_letters<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let center = app.session.puzzle().center();

    let spans: Vec<Span> = app
        .display_order
        .iter()
        .flat_map(|&c| {
            let styled = if c == center {
                Span::styled(
                    format!("[{}]", c.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    c.to_ascii_uppercase().to_string(),
                    Style::default().fg(Color::White),
                )
            };
            [styled, Span::raw("  ")]
        })
        .collect();

    let letters = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters (Space to shuffle) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(letters, area);
}

fn render_score<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let score = app.session.score();
    let max = app.session.puzzle().max_score();
    let percent = if max > 0 {
        ((f64::from(score) / f64::from(max)) * 100.0).min(100.0) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!("{score}/{max} ({})", app.session.title()));

    f.render_widget(gauge, area);
}

fn render_tiers<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let score = app.session.score();

    let items: Vec<ListItem> = app
        .session
        .puzzle()
        .tiers()
        .iter()
        .map(|tier| {
            let achieved = score >= tier.threshold;
            let marker = if achieved { "✓" } else { " " };
            let style = if achieved {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!("{marker} {:<11} {:>4}", tier.title, tier.threshold))
                .style(style)
        })
        .collect();

    let tiers = List::new(items).block(Block::default().title(" Tiers ").borders(Borders::ALL));
    f.render_widget(tiers, area);
}

fn render_found<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let found = app.session.found();

    let items: Vec<ListItem> = found
        .iter()
        .map(|word| {
            if crate::core::scoring::is_pangram(word) {
                ListItem::new(word.clone()).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(word.clone())
            }
        })
        .collect();

    let title = format!(
        " Found {}/{} ",
        found.len(),
        app.session.puzzle().word_count()
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages<S: WordStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(MESSAGE_CAP)
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

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Type letters | Enter: Submit | Backspace: Delete | Tab: Clear | Space: Shuffle | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}
