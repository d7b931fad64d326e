//! Game session state
//!
//! A `GameSession` holds the target, the guesses made so far and their
//! feedback, hint usage, and timing for a single puzzle. Timestamps are
//! supplied by the caller in milliseconds.

use super::evaluator::evaluate;
use super::hints::{get_hint, hint_count};
use crate::core::{GuessResult, PersonRecord, Roster, Schema};
use crate::error::GameError;
use crate::share::{GlyphStyle, ShareRequest, format_share_text};
use chrono::NaiveDate;
use tracing::info;

/// Per-game limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_guesses: usize,
    pub max_hints: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            max_hints: 3,
        }
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Mutable state of one puzzle
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    roster: &'a Roster,
    schema: &'a Schema,
    target: &'a PersonRecord,
    limits: Limits,
    guesses: Vec<String>,
    results: Vec<GuessResult>,
    hints_used: usize,
    status: GameStatus,
    started_at: Option<i64>,
    ended_at: Option<i64>,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub const fn new(
        roster: &'a Roster,
        schema: &'a Schema,
        target: &'a PersonRecord,
        limits: Limits,
        started_at: Option<i64>,
    ) -> Self {
        Self {
            roster,
            schema,
            target,
            limits,
            guesses: Vec::new(),
            results: Vec::new(),
            hints_used: 0,
            status: GameStatus::InProgress,
            started_at,
            ended_at: None,
        }
    }

    /// Evaluate and record a guess
    ///
    /// # Errors
    /// `GameError::BlankGuess` for whitespace-only input (no turn used) and
    /// `GameError::GameOver` once the game has been won or lost.
    pub fn submit_guess(&mut self, text: &str, now: Option<i64>) -> Result<&GuessResult, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(GameError::BlankGuess);
        }

        let result = evaluate(text, self.target, self.roster, self.schema);

        if result.is_correct() {
            self.finish(GameStatus::Won, now);
        } else if self.guesses.len() + 1 >= self.limits.max_guesses {
            self.finish(GameStatus::Lost, now);
        }

        self.guesses.push(text.to_string());
        self.results.push(result);
        Ok(&self.results[self.results.len() - 1])
    }

    /// Reveal the next hint
    ///
    /// # Errors
    /// `GameError::HintsExhausted` once the hint limit is reached and
    /// `GameError::GameOver` after the game has ended.
    pub fn take_hint(&mut self) -> Result<String, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let limit = self.hint_limit();
        if self.hints_used >= limit {
            return Err(GameError::HintsExhausted {
                used: self.hints_used,
                max: limit,
            });
        }

        let hint = get_hint(self.target, self.schema, self.hints_used);
        self.hints_used += 1;
        Ok(hint)
    }

    /// Shareable summary of this game; `None` until it is won or lost
    #[must_use]
    pub fn share_text(&self, date: NaiveDate, glyphs: GlyphStyle) -> Option<String> {
        if !self.status.is_over() {
            return None;
        }
        Some(format_share_text(&ShareRequest {
            won: self.status == GameStatus::Won,
            guesses: &self.guesses,
            feedbacks: &self.results,
            schema: self.schema,
            date,
            started_at: self.started_at,
            ended_at: self.ended_at,
            hints_used: self.hints_used,
            glyphs,
        }))
    }

    fn finish(&mut self, status: GameStatus, now: Option<i64>) {
        self.status = status;
        self.ended_at = now;
        info!(?status, guesses = self.guesses.len() + 1, "game finished");
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &'a PersonRecord {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn roster(&self) -> &'a Roster {
        self.roster
    }

    #[inline]
    #[must_use]
    pub const fn schema(&self) -> &'a Schema {
        self.schema
    }

    #[inline]
    #[must_use]
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Feedback for each guess, parallel to [`guesses`](Self::guesses)
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.limits.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Hints available this game: `max_hints`, capped by the schema's hint list
    #[must_use]
    pub fn hint_limit(&self) -> usize {
        self.limits.max_hints.min(hint_count(self.schema))
    }

    #[must_use]
    pub fn hints_left(&self) -> usize {
        self.hint_limit().saturating_sub(self.hints_used)
    }

    #[inline]
    #[must_use]
    pub const fn started_at(&self) -> Option<i64> {
        self.started_at
    }

    #[inline]
    #[must_use]
    pub const fn ended_at(&self) -> Option<i64> {
        self.ended_at
    }
}
