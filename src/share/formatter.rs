//! Shareable result text
//!
//! Produces the block of text a player pastes into chat after a game: the
//! puzzle number, one glyph row per guess, elapsed time, hint usage and a
//! link back to the game.

use crate::core::{FeedbackTag, GuessResult, Schema};
use crate::game::puzzle_number;
use chrono::NaiveDate;
use std::str::FromStr;

/// Promotional last line of every share text
pub const SHARE_FOOTER: &str = "Play at iteradle.com :video_game:!";

/// Shown when either timestamp is unknown
pub const DURATION_PLACEHOLDER: &str = "00:00";

/// How feedback tags are rendered in share text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Chat emoji shortcodes, e.g. `:large_green_square:`
    #[default]
    Slack,
    /// Unicode coloured squares
    Unicode,
}

impl GlyphStyle {
    /// Glyph for a tag; `None` renders the neutral glyph
    #[must_use]
    pub const fn glyph(self, tag: Option<FeedbackTag>) -> &'static str {
        match self {
            Self::Slack => match tag {
                Some(FeedbackTag::Correct) => ":large_green_square:",
                Some(FeedbackTag::Partial) => ":large_yellow_square:",
                Some(FeedbackTag::TooHigh) => ":large_orange_square:",
                Some(FeedbackTag::TooLow) => ":large_purple_square:",
                Some(FeedbackTag::Incorrect) => ":large_red_square:",
                None => ":white_large_square:",
            },
            Self::Unicode => match tag {
                Some(FeedbackTag::Correct) => "🟩",
                Some(FeedbackTag::Partial) => "🟨",
                Some(FeedbackTag::TooHigh) => "🟧",
                Some(FeedbackTag::TooLow) => "🟪",
                Some(FeedbackTag::Incorrect) => "🟥",
                None => "⬜",
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::Unicode => "unicode",
        }
    }
}

impl FromStr for GlyphStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slack" | "shortcode" => Ok(Self::Slack),
            "unicode" | "emoji" => Ok(Self::Unicode),
            _ => Err(format!("Invalid glyph style: {s}")),
        }
    }
}

/// Everything needed to render a share text
#[derive(Debug, Clone, Copy)]
pub struct ShareRequest<'a> {
    pub won: bool,
    pub guesses: &'a [String],
    pub feedbacks: &'a [GuessResult],
    pub schema: &'a Schema,
    pub date: NaiveDate,
    /// Game start, milliseconds
    pub started_at: Option<i64>,
    /// Game end, milliseconds
    pub ended_at: Option<i64>,
    pub hints_used: usize,
    pub glyphs: GlyphStyle,
}

/// Render the share text
///
/// One glyph row is emitted per guess. A guess without a recorded feedback
/// result renders as a row of neutral glyphs.
#[must_use]
pub fn format_share_text(request: &ShareRequest<'_>) -> String {
    let tries = request.guesses.len();
    let number = puzzle_number(request.date);

    let mut text = if request.won {
        format!(
            "I guessed the #{number} todays #Iterate employee in {tries} {}!",
            plural(tries, "try", "tries")
        )
    } else {
        format!("I failed to guess the #{number} todays #Iterate employee")
    };
    text.push('\n');

    for i in 0..tries {
        text.push_str(&glyph_row(
            request.feedbacks.get(i),
            request.schema,
            request.glyphs,
        ));
        text.push('\n');
    }

    text.push_str(&format!(
        "Time to {}: {}\n",
        if request.won { "win" } else { "lose" },
        format_duration(request.started_at, request.ended_at)
    ));

    if request.hints_used > 0 {
        text.push_str(&format!(
            "I used {} {}!\n",
            request.hints_used,
            plural(request.hints_used, "hint", "hints")
        ));
    } else {
        text.push_str("Mom look no hints!\n");
    }

    text.push_str(SHARE_FOOTER);
    text
}

/// One glyph per declared attribute, in schema order
#[must_use]
pub fn glyph_row(result: Option<&GuessResult>, schema: &Schema, glyphs: GlyphStyle) -> String {
    schema
        .attributes()
        .iter()
        .map(|spec| glyphs.glyph(result.and_then(|r| r.tag(spec.key))))
        .collect()
}

/// Elapsed time as zero-padded `MM:SS`
///
/// Sub-second remainders are truncated. Negative spans clamp to zero.
///
/// # Examples
/// ```
/// use iteradle::share::format_duration;
///
/// assert_eq!(format_duration(Some(0), Some(65_000)), "01:05");
/// assert_eq!(format_duration(None, Some(65_000)), "00:00");
/// ```
#[must_use]
pub fn format_duration(started_at: Option<i64>, ended_at: Option<i64>) -> String {
    let (Some(start), Some(end)) = (started_at, ended_at) else {
        return DURATION_PLACEHOLDER.to_string();
    };

    let elapsed_ms = end.saturating_sub(start).max(0);
    let minutes = elapsed_ms / 60_000;
    let seconds = (elapsed_ms % 60_000) / 1_000;
    format!("{minutes:02}:{seconds:02}")
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeFeedback;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn result(schema: &Schema, tags: &[FeedbackTag], is_correct: bool) -> GuessResult {
        let feedback = schema
            .attributes()
            .iter()
            .zip(tags)
            .map(|(spec, &tag)| AttributeFeedback {
                key: spec.key.to_string(),
                tag,
            })
            .collect();
        GuessResult::new(is_correct, feedback)
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Some(0), Some(65_000)), "01:05");
        assert_eq!(format_duration(Some(1_000), Some(1_999)), "00:00");
        assert_eq!(format_duration(Some(0), Some(59_999)), "00:59");
        assert_eq!(format_duration(Some(0), Some(3_600_000)), "60:00");
        assert_eq!(format_duration(Some(5_000), Some(0)), "00:00");
        assert_eq!(format_duration(Some(0), None), DURATION_PLACEHOLDER);
        assert_eq!(format_duration(None, None), DURATION_PLACEHOLDER);
    }

    #[test]
    fn winning_share_text() {
        use FeedbackTag::{Correct, Incorrect, Partial, TooHigh, TooLow};

        let schema = Schema::classic();
        let guesses = vec!["Bob".to_string(), "Ada".to_string()];
        let feedbacks = vec![
            result(&schema, &[Incorrect, Correct, Incorrect, Partial, TooHigh, TooLow], false),
            result(&schema, &[Correct; 6], true),
        ];
        let text = format_share_text(&ShareRequest {
            won: true,
            guesses: &guesses,
            feedbacks: &feedbacks,
            schema: &schema,
            date: date(),
            started_at: Some(0),
            ended_at: Some(65_000),
            hints_used: 2,
            glyphs: GlyphStyle::Unicode,
        });

        assert_eq!(
            text,
            "I guessed the #666 todays #Iterate employee in 2 tries!\n\
             🟥🟩🟥🟨🟧🟪\n\
             🟩🟩🟩🟩🟩🟩\n\
             Time to win: 01:05\n\
             I used 2 hints!\n\
             Play at iteradle.com :video_game:!"
        );
    }

    #[test]
    fn losing_share_text_without_hints() {
        let schema = Schema::classic();
        let guesses = vec!["Zed".to_string()];
        let feedbacks = vec![result(&schema, &[FeedbackTag::Incorrect; 6], false)];
        let text = format_share_text(&ShareRequest {
            won: false,
            guesses: &guesses,
            feedbacks: &feedbacks,
            schema: &schema,
            date: date(),
            started_at: None,
            ended_at: None,
            hints_used: 0,
            glyphs: GlyphStyle::Slack,
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "I failed to guess the #666 todays #Iterate employee");
        assert_eq!(lines[1], ":large_red_square:".repeat(6));
        assert_eq!(lines[2], "Time to lose: 00:00");
        assert_eq!(lines[3], "Mom look no hints!");
        assert_eq!(lines[4], SHARE_FOOTER);
    }

    #[test]
    fn singular_wording() {
        let schema = Schema::classic();
        let guesses = vec!["Ada".to_string()];
        let feedbacks = vec![result(&schema, &[FeedbackTag::Correct; 6], true)];
        let text = format_share_text(&ShareRequest {
            won: true,
            guesses: &guesses,
            feedbacks: &feedbacks,
            schema: &schema,
            date: date(),
            started_at: Some(0),
            ended_at: Some(1_000),
            hints_used: 1,
            glyphs: GlyphStyle::Slack,
        });

        assert!(text.contains("in 1 try!"));
        assert!(text.contains("I used 1 hint!"));
    }

    #[test]
    fn one_line_per_guess_one_glyph_per_attribute() {
        let schema = Schema::directory();
        let guesses: Vec<String> = (0..4).map(|i| format!("guess {i}")).collect();
        // Second result covers only three attributes; fourth guess has no result
        let feedbacks = vec![
            result(&schema, &[FeedbackTag::Partial; 9], false),
            result(&schema, &[FeedbackTag::TooLow; 3], false),
            result(&schema, &[FeedbackTag::Incorrect; 9], false),
        ];
        let text = format_share_text(&ShareRequest {
            won: false,
            guesses: &guesses,
            feedbacks: &feedbacks,
            schema: &schema,
            date: date(),
            started_at: None,
            ended_at: None,
            hints_used: 0,
            glyphs: GlyphStyle::Unicode,
        });

        let rows: Vec<&str> = text.lines().skip(1).take(guesses.len()).collect();
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.chars().count(), schema.attributes().len());
        }
        assert_eq!(rows[1], format!("{}{}", "🟪".repeat(3), "⬜".repeat(6)));
        assert_eq!(rows[3], "⬜".repeat(9));
    }

    #[test]
    fn glyph_style_parsing() {
        assert_eq!("slack".parse::<GlyphStyle>(), Ok(GlyphStyle::Slack));
        assert_eq!("Unicode".parse::<GlyphStyle>(), Ok(GlyphStyle::Unicode));
        assert!("ascii".parse::<GlyphStyle>().is_err());
    }
}
