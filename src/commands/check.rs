//! One-shot guess and hint commands
//!
//! Evaluate a single guess, or look up a single hint, against the target
//! for a date without starting an interactive game.

use crate::core::{GuessResult, PersonRecord, Roster, Schema};
use crate::error::GameError;
use crate::game::{evaluate, get_hint, select_target};
use chrono::NaiveDate;

/// Result of checking a single guess
#[derive(Debug, Clone)]
pub struct GuessReport<'a> {
    pub guess: String,
    /// The record the guess resolved to, if any
    pub resolved: Option<&'a PersonRecord>,
    pub result: GuessResult,
}

/// Evaluate `guess` against the target for `date`
///
/// # Errors
///
/// Returns `GameError::EmptyRoster` if the roster is empty and
/// `GameError::BlankGuess` for whitespace-only input.
pub fn check_guess<'a>(
    guess: &str,
    roster: &'a Roster,
    schema: &Schema,
    date: NaiveDate,
) -> Result<GuessReport<'a>, GameError> {
    let guess = guess.trim();
    if guess.is_empty() {
        return Err(GameError::BlankGuess);
    }
    let target = select_target(roster.records(), date)?;

    Ok(GuessReport {
        guess: guess.to_string(),
        resolved: roster.resolve(guess),
        result: evaluate(guess, target, roster, schema),
    })
}

/// The hint at `index` for the target of `date`
///
/// # Errors
///
/// Returns `GameError::EmptyRoster` if the roster is empty.
pub fn hint_for_date(
    roster: &Roster,
    schema: &Schema,
    date: NaiveDate,
    index: usize,
) -> Result<String, GameError> {
    let target = select_target(roster.records(), date)?;
    Ok(get_hint(target, schema, index))
}
