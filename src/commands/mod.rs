//! Command implementations

pub mod check;
pub mod schedule;
pub mod simple;
pub mod today;

pub use check::{GuessReport, check_guess, hint_for_date};
pub use schedule::{ScheduleStatistics, print_schedule_statistics, run_schedule};
pub use simple::run_simple;
pub use today::{TodayInfo, today_info};

use crate::core::{PersonRecord, Roster};
use crate::error::GameError;
use crate::game::{Daily, Limits, Practice, TargetSelector};
use crate::share::GlyphStyle;
use chrono::NaiveDate;

/// Options shared by the interactive game modes
#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    /// Puzzle date (also used for the share text's puzzle number)
    pub date: NaiveDate,
    pub limits: Limits,
    pub glyphs: GlyphStyle,
    /// Random target per game instead of the daily one
    pub practice: bool,
}

impl GameOptions {
    /// Choose the target for a new game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRoster` if the roster is empty.
    pub fn pick_target<'a>(&self, roster: &'a Roster) -> Result<&'a PersonRecord, GameError> {
        if self.practice {
            Practice::new(rand::rng()).select(roster.records())
        } else {
            Daily { date: self.date }.select(roster.records())
        }
    }
}

/// Current wall-clock time in milliseconds
#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
