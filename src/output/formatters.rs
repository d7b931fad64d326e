//! Formatting utilities for terminal output

use crate::core::{AttributeSpec, FeedbackTag, PersonRecord};

/// Terminal colour name for a feedback tag
#[must_use]
pub const fn tag_color(tag: FeedbackTag) -> colored::Color {
    match tag {
        FeedbackTag::Correct => colored::Color::Green,
        FeedbackTag::Partial => colored::Color::Yellow,
        FeedbackTag::TooHigh => colored::Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        FeedbackTag::TooLow => colored::Color::Magenta,
        FeedbackTag::Incorrect => colored::Color::Red,
    }
}

/// Text for one grid cell: the guessed value followed by the tag symbol
///
/// Unresolved guesses have no record, so only the symbol is shown.
#[must_use]
pub fn cell_text(spec: &AttributeSpec, guessed: Option<&PersonRecord>, tag: FeedbackTag) -> String {
    let value = guessed
        .and_then(|record| record.get(spec.key))
        .map(ToString::to_string)
        .unwrap_or_default();

    if value.is_empty() {
        tag.symbol().to_string()
    } else {
        format!("{value} {}", tag.symbol())
    }
}

/// Truncate to at most `width` characters, marking the cut with `…`
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttributeValue, Schema};

    #[test]
    fn cell_text_with_value() {
        let schema = Schema::classic();
        let spec = schema.attribute("birth_year").unwrap();
        let record = PersonRecord::new("Ada").with("birth_year", AttributeValue::Number(1990));

        assert_eq!(cell_text(spec, Some(&record), FeedbackTag::TooHigh), "1990 ↑");
        assert_eq!(cell_text(spec, None, FeedbackTag::Incorrect), "✗");
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("Senior Developer", 6), "Senio…");
        assert_eq!(truncate("Dev", 6), "Dev");
        assert_eq!(truncate("Bjørn", 5), "Bjørn");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
