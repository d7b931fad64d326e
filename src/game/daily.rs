//! Target selection
//!
//! The daily target is a pure function of the calendar date and the roster
//! order. Both the target index and the puzzle number shown to players are
//! derived from [`date_hash`].

use crate::core::PersonRecord;
use crate::error::GameError;
use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

/// Highest puzzle number; numbers run from 1 to this value
pub const PUZZLE_NUMBER_RANGE: u32 = 1000;

/// Stable 32-bit hash of a date's `YYYY-MM-DD` form
///
/// For each character: `hash = (hash << 5) - hash + codepoint`, with
/// wrap-around at 32 bits.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use iteradle::game::date_hash;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// assert_eq!(date_hash(date), 274_221_665);
/// ```
#[must_use]
pub fn date_hash(date: NaiveDate) -> i32 {
    date.format("%Y-%m-%d")
        .to_string()
        .chars()
        .fold(0i32, |hash, c| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(c as i32)
        })
}

/// Puzzle number for a date, in `1..=1000`
#[must_use]
pub fn puzzle_number(date: NaiveDate) -> u32 {
    date_hash(date).unsigned_abs() % PUZZLE_NUMBER_RANGE + 1
}

/// Index into a roster of `len` records for a date
///
/// Returns `None` for an empty roster.
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> Option<usize> {
    (len > 0).then(|| date_hash(date).unsigned_abs() as usize % len)
}

/// Pick today's target
///
/// # Errors
/// Returns `GameError::EmptyRoster` if `records` is empty.
pub fn select_target(records: &[PersonRecord], date: NaiveDate) -> Result<&PersonRecord, GameError> {
    let index = daily_index(date, records.len()).ok_or(GameError::EmptyRoster)?;
    debug!(%date, index, "selected daily target");
    Ok(&records[index])
}

/// Pick a uniformly random target (practice mode)
///
/// # Errors
/// Returns `GameError::EmptyRoster` if `records` is empty.
pub fn select_random<'a, R: Rng + ?Sized>(
    records: &'a [PersonRecord],
    rng: &mut R,
) -> Result<&'a PersonRecord, GameError> {
    if records.is_empty() {
        return Err(GameError::EmptyRoster);
    }
    let index = rng.random_range(0..records.len());
    debug!(index, "selected practice target");
    Ok(&records[index])
}

/// A way of choosing the target for a new game
pub trait TargetSelector {
    /// Choose a target from the roster
    ///
    /// # Errors
    /// Returns `GameError::EmptyRoster` if `records` is empty.
    fn select<'a>(&mut self, records: &'a [PersonRecord]) -> Result<&'a PersonRecord, GameError>;
}

/// Same target for everyone on a given date
#[derive(Debug, Clone, Copy)]
pub struct Daily {
    pub date: NaiveDate,
}

impl TargetSelector for Daily {
    fn select<'a>(&mut self, records: &'a [PersonRecord]) -> Result<&'a PersonRecord, GameError> {
        select_target(records, self.date)
    }
}

/// Fresh random target every game
#[derive(Debug, Clone)]
pub struct Practice<R> {
    rng: R,
}

impl<R: Rng> Practice<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetSelector for Practice<R> {
    fn select<'a>(&mut self, records: &'a [PersonRecord]) -> Result<&'a PersonRecord, GameError> {
        select_random(records, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster(n: usize) -> Vec<PersonRecord> {
        (0..n).map(|i| PersonRecord::new(format!("Person {i}"))).collect()
    }

    #[test]
    fn hash_known_values() {
        // Reference values computed with 32-bit wrap-around
        assert_eq!(date_hash(date(2025, 3, 14)), 274_221_665);
        assert_eq!(date_hash(date(2024, 1, 1)), -613_341_632);
        assert_eq!(date_hash(date(2026, 10, 19)), 1_162_559_499);
    }

    #[test]
    fn puzzle_numbers_in_range() {
        assert_eq!(puzzle_number(date(2024, 1, 1)), 633);
        assert_eq!(puzzle_number(date(2025, 3, 14)), 666);
        assert_eq!(puzzle_number(date(2026, 10, 19)), 500);

        let mut day = date(2020, 1, 1);
        for _ in 0..1000 {
            let n = puzzle_number(day);
            assert!((1..=PUZZLE_NUMBER_RANGE).contains(&n));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn daily_index_uses_absolute_hash() {
        assert_eq!(daily_index(date(2024, 1, 1), 3), Some(2));
        assert_eq!(daily_index(date(2025, 3, 14), 7), Some(4));
        assert_eq!(daily_index(date(2026, 10, 20), 3), Some(1));
        assert_eq!(daily_index(date(2024, 1, 1), 0), None);
    }

    #[test]
    fn select_target_is_deterministic() {
        let records = roster(17);
        let mut day = date(2024, 2, 1);
        for _ in 0..60 {
            let first = select_target(&records, day).unwrap();
            let second = select_target(&records, day).unwrap();
            assert_eq!(first.name(), second.name());
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn single_record_roster_always_selected() {
        let records = roster(1);
        assert_eq!(
            select_target(&records, date(2030, 12, 31)).unwrap().name(),
            "Person 0"
        );
    }

    #[test]
    fn empty_roster_fails() {
        assert_eq!(
            select_target(&[], date(2024, 1, 1)),
            Err(GameError::EmptyRoster)
        );
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_random(&[], &mut rng), Err(GameError::EmptyRoster));
    }

    #[test]
    fn practice_selector_stays_in_roster() {
        let records = roster(5);
        let mut selector = Practice::new(StdRng::seed_from_u64(42));
        for _ in 0..50 {
            let picked = selector.select(&records).unwrap();
            assert!(records.iter().any(|r| r.name() == picked.name()));
        }
    }

    #[test]
    fn practice_selector_is_reproducible_with_seed() {
        let records = roster(50);
        let mut a = Practice::new(StdRng::seed_from_u64(9));
        let mut b = Practice::new(StdRng::seed_from_u64(9));
        for _ in 0..10 {
            assert_eq!(
                a.select(&records).unwrap().name(),
                b.select(&records).unwrap().name()
            );
        }
    }

    #[test]
    fn daily_selector_matches_free_function() {
        let records = roster(11);
        let day = date(2026, 10, 19);
        let mut selector = Daily { date: day };
        assert_eq!(
            selector.select(&records).unwrap().name(),
            select_target(&records, day).unwrap().name()
        );
    }
}
