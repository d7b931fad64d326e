//! TUI application state and logic

use crate::commands::{GameOptions, now_ms};
use crate::core::{PersonRecord, Roster, Schema};
use crate::error::GameError;
use crate::game::{GameSession, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Most suggestions shown under the input box
pub const MAX_SUGGESTIONS: usize = 6;

/// Application state
pub struct App<'a> {
    pub roster: &'a Roster,
    pub schema: &'a Schema,
    pub options: GameOptions,
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub selected: Option<usize>,
    pub hints: Vec<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses for a win
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRoster` if the roster is empty.
    pub fn new(
        roster: &'a Roster,
        schema: &'a Schema,
        options: GameOptions,
    ) -> Result<Self, GameError> {
        let target = options.pick_target(roster)?;
        let session = GameSession::new(roster, schema, target, options.limits, Some(now_ms()));

        Ok(Self {
            roster,
            schema,
            options,
            session,
            input_buffer: String::new(),
            selected: None,
            hints: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess today's person by name or email.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "↑/↓ pick a suggestion, TAB completes, ? for a hint".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                guess_distribution: vec![0; options.limits.max_guesses + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Roster entries matching the current input
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'a PersonRecord> {
        if self.input_buffer.trim().is_empty() {
            return Vec::new();
        }
        self.roster.search(&self.input_buffer, MAX_SUGGESTIONS)
    }

    pub fn select_next(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % count));
    }

    pub fn select_previous(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(count - 1, |i| (i + count - 1) % count));
    }

    /// Replace the input with the highlighted (or first) suggestion
    pub fn autocomplete(&mut self) {
        let suggestions = self.suggestions();
        if let Some(record) = suggestions.get(self.selected.unwrap_or(0)) {
            self.input_buffer = record.name().to_string();
        }
        self.selected = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.selected = None;
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
        self.selected = None;
    }

    /// Submit the highlighted suggestion, or the typed text
    pub fn submit_guess(&mut self) {
        let guess = match self.selected {
            Some(i) => self
                .suggestions()
                .get(i)
                .map_or_else(|| self.input_buffer.clone(), |r| r.name().to_string()),
            None => self.input_buffer.clone(),
        };

        let resolved = self.roster.resolve(&guess).is_some();
        let outcome = self.session.submit_guess(&guess, Some(now_ms())).map(|_| ());
        match outcome {
            Ok(()) => {
                self.input_buffer.clear();
                self.selected = None;
                if !resolved {
                    self.add_message(
                        &format!("'{}' is not on the roster - guess used", guess.trim()),
                        MessageStyle::Error,
                    );
                }
                self.after_guess();
            }
            Err(GameError::BlankGuess) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn after_guess(&mut self) {
        let tries = self.session.guesses().len();
        match self.session.status() {
            GameStatus::InProgress => {
                let left = self.session.guesses_left();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
            GameStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(tries) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match tries {
                    1 => "🎯 FIRST TRY! Do you sit next to them? 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got there in the end! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                let name = self.session.target().name();
                self.add_message(
                    &format!("Game over! The answer was {name}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
        debug!(tries, status = ?self.session.status(), "guess submitted");
    }

    pub fn use_hint(&mut self) {
        match self.session.take_hint() {
            Ok(hint) => {
                self.add_message("Hint used", MessageStyle::Info);
                self.hints.push(hint);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        match self.options.pick_target(self.roster) {
            Ok(target) => {
                self.session = GameSession::new(
                    self.roster,
                    self.schema,
                    target,
                    self.options.limits,
                    Some(now_ms()),
                );
                self.input_buffer.clear();
                self.selected = None;
                self.hints.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    if self.options.practice {
                        "New practice game started!"
                    } else {
                        "New game started! Same person as before - it's the daily puzzle."
                    },
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
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

    /// Share text for the finished game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.session
            .share_text(self.options.date, self.options.glyphs)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share text of the last finished game, if any
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Game is over, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('?') => {
                        app.use_hint();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    KeyCode::Down => {
                        app.select_next();
                    }
                    KeyCode::Up => {
                        app.select_previous();
                    }
                    KeyCode::Tab => {
                        app.autocomplete();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share_text())
}
