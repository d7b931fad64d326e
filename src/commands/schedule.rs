//! Schedule audit
//!
//! Computes the daily target for a run of consecutive dates and reports how
//! evenly the date hash spreads the roster.

use crate::core::Roster;
use crate::game::{PUZZLE_NUMBER_RANGE, daily_index, puzzle_number};
use crate::output::formatters::create_progress_bar;
use chrono::{Days, NaiveDate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Target for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDay {
    pub date: NaiveDate,
    pub puzzle_number: u32,
    pub target: String,
}

/// Statistics over a run of dates
#[derive(Debug)]
pub struct ScheduleStatistics {
    pub days: Vec<ScheduledDay>,
    /// Times each person was picked, in roster order
    pub pick_counts: Vec<(String, usize)>,
    /// Longest run of consecutive days with the same target
    pub longest_repeat: usize,
    /// Dates whose puzzle number was already used earlier in the run
    pub puzzle_number_collisions: usize,
    pub duration: Duration,
}

impl ScheduleStatistics {
    /// People never picked during the run
    #[must_use]
    pub fn never_picked(&self) -> Vec<&str> {
        self.pick_counts
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Compute targets for `days` dates starting at `from`
///
/// Dates past the end of the calendar are dropped.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_schedule(roster: &Roster, from: NaiveDate, days: usize) -> ScheduleStatistics {
    let start = Instant::now();
    let records = roster.records();

    let pb = ProgressBar::new(days as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let indices: Vec<(NaiveDate, usize)> = (0..days as u64)
        .into_par_iter()
        .filter_map(|offset| {
            let date = from.checked_add_days(Days::new(offset))?;
            let index = daily_index(date, records.len())?;
            pb.inc(1);
            Some((date, index))
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut counts = vec![0usize; records.len()];
    let mut seen_numbers = vec![false; PUZZLE_NUMBER_RANGE as usize + 1];
    let mut puzzle_number_collisions = 0;
    let mut longest_repeat = 0;
    let mut current_repeat = 0;
    let mut previous: Option<usize> = None;
    let mut schedule = Vec::with_capacity(indices.len());

    for (date, index) in indices {
        counts[index] += 1;

        current_repeat = if previous == Some(index) {
            current_repeat + 1
        } else {
            1
        };
        longest_repeat = longest_repeat.max(current_repeat);
        previous = Some(index);

        let number = puzzle_number(date);
        if std::mem::replace(&mut seen_numbers[number as usize], true) {
            puzzle_number_collisions += 1;
        }

        schedule.push(ScheduledDay {
            date,
            puzzle_number: number,
            target: records[index].name().to_string(),
        });
    }

    ScheduleStatistics {
        days: schedule,
        pick_counts: records
            .iter()
            .zip(counts)
            .map(|(record, count)| (record.name().to_string(), count))
            .collect(),
        longest_repeat,
        puzzle_number_collisions,
        duration: start.elapsed(),
    }
}

/// Print schedule statistics
pub fn print_schedule_statistics(stats: &ScheduleStatistics, show_days: bool) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "SCHEDULE AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    let total = stats.days.len();
    if let (Some(first), Some(last)) = (stats.days.first(), stats.days.last()) {
        println!("\n📅 {} → {} ({total} days)", first.date, last.date);
    } else {
        println!("\n📅 No dates scheduled");
        return;
    }

    if show_days {
        println!("\n{}", "Targets:".bright_cyan().bold());
        for day in &stats.days {
            println!("   {}  #{:<4} {}", day.date, day.puzzle_number, day.target);
        }
    }

    println!("\n📈 {}", "Picks per person:".bright_cyan().bold());
    let max = stats
        .pick_counts
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);
    for (name, count) in &stats.pick_counts {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, max as f64, 30);
        println!("   {name:<24} {} {count:4} ({pct:5.1}%)", bar.green());
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Longest repeat:          {} days", stats.longest_repeat);
    println!(
        "   Puzzle number reuse:     {}",
        stats.puzzle_number_collisions
    );
    let never = stats.never_picked();
    if never.is_empty() {
        println!("   Never picked:            {}", "nobody".green());
    } else {
        println!("   Never picked:            {}", never.join(", ").yellow());
    }
    println!("   Time taken:              {:.3}s", stats.duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PersonRecord;
    use crate::game::select_target;

    fn roster(n: usize) -> Roster {
        Roster::new((0..n).map(|i| PersonRecord::new(format!("Person {i}"))).collect()).unwrap()
    }

    #[test]
    fn schedule_matches_daily_selection() {
        let roster = roster(7);
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let stats = run_schedule(&roster, from, 30);

        assert_eq!(stats.days.len(), 30);
        for (offset, day) in stats.days.iter().enumerate() {
            let expected = from + Days::new(offset as u64);
            assert_eq!(day.date, expected);
            assert_eq!(
                day.target,
                select_target(roster.records(), expected).unwrap().name()
            );
        }

        let picks: usize = stats.pick_counts.iter().map(|(_, c)| c).sum();
        assert_eq!(picks, 30);
        assert!(stats.longest_repeat >= 1);
    }

    #[test]
    fn single_person_always_repeats() {
        let roster = roster(1);
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let stats = run_schedule(&roster, from, 10);

        assert_eq!(stats.longest_repeat, 10);
        assert_eq!(stats.pick_counts, vec![("Person 0".to_string(), 10)]);
        assert!(stats.never_picked().is_empty());
    }

    #[test]
    fn empty_roster_schedules_nothing() {
        let roster = roster(0);
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let stats = run_schedule(&roster, from, 5);
        assert!(stats.days.is_empty());
        assert!(stats.pick_counts.is_empty());
    }
}
