//! Display functions for command results

use super::formatters::{cell_text, tag_color, truncate};
use crate::commands::{GuessReport, TodayInfo};
use crate::core::{GuessResult, PersonRecord, Schema};
use colored::Colorize;

/// Widest a single feedback cell may be
const CELL_WIDTH: usize = 18;

/// Print one coloured feedback row, one cell per declared attribute
pub fn print_feedback_row(schema: &Schema, guessed: Option<&PersonRecord>, result: &GuessResult) {
    let cells: Vec<String> = schema
        .attributes()
        .iter()
        .filter_map(|spec| {
            let tag = result.tag(spec.key)?;
            let text = truncate(&cell_text(spec, guessed, tag), CELL_WIDTH);
            Some(format!(
                "{} {}",
                spec.label.bright_black(),
                text.color(tag_color(tag)).bold()
            ))
        })
        .collect();

    println!("  {}", cells.join("  │  "));
}

/// Print the result of checking one guess
pub fn print_guess_report(report: &GuessReport<'_>, schema: &Schema) {
    println!("\n{}", "─".repeat(60).cyan());
    match report.resolved {
        Some(record) => println!("Guess: {}", record.name().bright_yellow().bold()),
        None => println!(
            "Guess: {} {}",
            report.guess.bright_yellow().bold(),
            "(not on the roster)".bright_black()
        ),
    }
    println!("{}", "─".repeat(60).cyan());

    print_feedback_row(schema, report.resolved, &report.result);

    println!();
    if report.result.is_correct() {
        println!("{}", "✅ That's today's person!".green().bold());
    } else {
        println!("{}", "❌ Not today's person".red().bold());
    }
}

/// Print today's puzzle summary
pub fn print_today(info: &TodayInfo) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ITERADLE".bright_cyan().bold(),
        format!("#{}", info.puzzle_number).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📅 Date:        {}", info.date);
    println!("👥 Roster:      {} people", info.roster_size);
    if let Some(ref target) = info.target {
        println!("🎯 Target:      {}", target.bright_green().bold());
    }
}

/// Print the feedback legend
pub fn print_legend() {
    use crate::core::FeedbackTag;

    let entries: Vec<String> = [
        (FeedbackTag::Correct, "exact"),
        (FeedbackTag::Partial, "close"),
        (FeedbackTag::TooHigh, "too high"),
        (FeedbackTag::TooLow, "too low"),
        (FeedbackTag::Incorrect, "no match"),
    ]
    .into_iter()
    .map(|(tag, meaning)| {
        format!(
            "{} {meaning}",
            tag.symbol().to_string().color(tag_color(tag)).bold()
        )
    })
    .collect();

    println!("  {}", entries.join("   "));
}
