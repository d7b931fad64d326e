//! TUI rendering with ratatui
//!
//! Guess grid, suggestions, hints and share text for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::FeedbackTag;
use crate::game::GameStatus;
use crate::output::formatters::{cell_text, truncate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Guess grid
            Constraint::Percentage(35), // Side panel
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Colour for a feedback tag
const fn tag_color(tag: FeedbackTag) -> Color {
    match tag {
        FeedbackTag::Correct => Color::Green,
        FeedbackTag::Partial => Color::Yellow,
        FeedbackTag::TooHigh => Color::Rgb(255, 140, 0),
        FeedbackTag::TooLow => Color::Magenta,
        FeedbackTag::Incorrect => Color::Red,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.options.practice {
        "🎯 ITERADLE - Practice".to_string()
    } else {
        format!(
            "🎯 ITERADLE #{} - {}",
            crate::game::puzzle_number(app.options.date),
            app.options.date
        )
    };

    let header = Paragraph::new(title)
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

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let attributes = app.schema.attributes();
    let inner_width = area.width.saturating_sub(2) as usize;
    let cell_width = (inner_width / attributes.len().max(1)).max(4);

    let pad = |text: &str| format!("{:<cell_width$}", truncate(text, cell_width - 1));

    let mut lines = vec![Line::from(
        attributes
            .iter()
            .map(|spec| {
                Span::styled(
                    pad(spec.label),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )];

    for (guess, result) in app.session.guesses().iter().zip(app.session.results()) {
        let guessed = app.roster.resolve(guess);
        let spans: Vec<Span> = attributes
            .iter()
            .map(|spec| match result.tag(spec.key) {
                Some(tag) => {
                    let text = if guessed.is_none() && spec.key == crate::core::NAME_KEY {
                        format!("{guess} {}", tag.symbol())
                    } else {
                        cell_text(spec, guessed, tag)
                    };
                    Span::styled(
                        pad(&text),
                        Style::default()
                            .fg(tag_color(tag))
                            .add_modifier(Modifier::BOLD),
                    )
                }
                None => Span::raw(pad("")),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    for _ in 0..app.session.guesses_left() {
        lines.push(Line::from(Span::styled(
            attributes.iter().map(|_| pad("·")).collect::<String>(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Suggestions or share text
            Constraint::Length(3),      // Guesses gauge
            Constraint::Min(4),         // Hints
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    if app.input_mode == InputMode::GameOver {
        render_share(f, app, chunks[0]);
    } else {
        render_suggestions(f, app, chunks[0]);
    }
    render_guess_gauge(f, app, chunks[1]);
    render_hints(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let suggestions = app.suggestions();

    let items: Vec<ListItem> = if suggestions.is_empty() {
        vec![ListItem::new("Start typing a name...").style(Style::default().fg(Color::DarkGray))]
    } else {
        suggestions
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if app.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(record.name().to_string()).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.session.status() == GameStatus::Won {
        (" 🎉 Share your result ", Color::Green)
    } else {
        (" Share your result ", Color::Red)
    };

    let paragraph = Paragraph::new(app.share_text().unwrap_or_default())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_guess_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.guesses().len();
    let max = app.session.limits().max_guesses;
    let progress_pct = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{used}/{max} guesses"));

    f.render_widget(gauge, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .hints
        .iter()
        .map(|hint| Line::from(format!("💡 {hint}")))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press ? for a hint",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(
        " Hints ({}/{}) ",
        app.session.hints_used(),
        app.session.hint_limit()
    );
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a Name | ↑/↓ select, TAB complete, ? hint, ESC quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!(
        "Mode: {} ({})",
        if app.options.practice { "Practice" } else { "Daily" },
        app.schema.variant().name()
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let roster_text = format!("Roster: {} people", app.roster.len());
    let roster = Paragraph::new(roster_text).alignment(Alignment::Center);
    f.render_widget(roster, chunks[2]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Enter: Guess | ?: Hint | ESC: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
