//! Today's puzzle summary
//!
//! Reports the puzzle number and, on request, who today's target is.

use crate::core::Roster;
use crate::error::GameError;
use crate::game::{puzzle_number, select_target};
use chrono::NaiveDate;

/// Summary of the puzzle for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub date: NaiveDate,
    pub puzzle_number: u32,
    pub roster_size: usize,
    /// Only filled in when the target is revealed
    pub target: Option<String>,
}

/// Describe the puzzle for `date`
///
/// # Errors
///
/// Returns `GameError::EmptyRoster` if the roster is empty.
pub fn today_info(roster: &Roster, date: NaiveDate, reveal: bool) -> Result<TodayInfo, GameError> {
    let target = select_target(roster.records(), date)?;

    Ok(TodayInfo {
        date,
        puzzle_number: puzzle_number(date),
        roster_size: roster.len(),
        target: reveal.then(|| target.name().to_string()),
    })
}
