//! Iteradle
//!
//! A daily guess-the-colleague puzzle. Players name people from a roster and
//! get attribute-by-attribute feedback: exact, close, too high, too low, or
//! wrong.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use iteradle::core::Schema;
//! use iteradle::game::{GameSession, Limits, select_target};
//! use iteradle::rosters::demo_roster;
//! use iteradle::share::GlyphStyle;
//!
//! let schema = Schema::classic();
//! let roster = demo_roster(&schema).unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//!
//! // Everyone gets the same target on the same day
//! let target = select_target(roster.records(), today).unwrap();
//! let mut session = GameSession::new(&roster, &schema, target, Limits::default(), Some(0));
//!
//! let result = session.submit_guess("Ada Lindqvist", Some(30_000)).unwrap();
//! println!("correct: {}", result.is_correct());
//! if let Some(text) = session.share_text(today, GlyphStyle::Unicode) {
//!     println!("{text}");
//! }
//! ```

// Core domain types
pub mod core;

// Target selection, evaluation, hints and sessions
pub mod game;

// Share text
pub mod share;

// Roster files
pub mod rosters;

// Configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
