//! Error types
//!
//! Unresolvable guesses are not errors: they evaluate to an all-`incorrect`
//! result and still consume a turn.

use thiserror::Error;

/// Errors raised while starting or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot select a target from an empty roster")]
    EmptyRoster,

    #[error("guess must not be blank")]
    BlankGuess,

    #[error("the game is over; start a new game to keep playing")]
    GameOver,

    #[error("no hints left (used {used} of {max})")]
    HintsExhausted { used: usize, max: usize },
}

/// Errors raised while building or loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("roster record #{0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate name in roster: {0}")]
    DuplicateName(String),
}

/// Errors raised while loading game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown game variant: {0}")]
    UnknownVariant(String),

    #[error("unknown glyph style: {0}")]
    UnknownGlyphs(String),

    #[error("tolerance set for '{0}', which is not a numeric attribute of this variant")]
    NotNumeric(String),

    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
}
