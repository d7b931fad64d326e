//! Per-attribute feedback tags and guess results
//!
//! Every comparable attribute of a guess receives exactly one tag:
//! - `Correct` = exact match
//! - `Partial` = close (numeric within tolerance, or overlapping tag sets)
//! - `TooHigh` / `TooLow` = numeric guess outside tolerance, with direction
//! - `Incorrect` = no match
//!
//! A `GuessResult` keeps the tags in the schema's declared attribute order.

use std::fmt;
use std::str::FromStr;

/// Feedback for a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTag {
    Correct,
    Partial,
    TooHigh,
    TooLow,
    Incorrect,
}

impl FeedbackTag {
    /// All tags, in display order
    pub const ALL: [Self; 5] = [
        Self::Correct,
        Self::Partial,
        Self::TooHigh,
        Self::TooLow,
        Self::Incorrect,
    ];

    /// Wire name of the tag (`correct`, `partial`, `too-high`, `too-low`, `incorrect`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Partial => "partial",
            Self::TooHigh => "too-high",
            Self::TooLow => "too-low",
            Self::Incorrect => "incorrect",
        }
    }

    /// Single-character marker used in on-screen grids
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '✓',
            Self::Partial => '~',
            Self::TooHigh => '↑',
            Self::TooLow => '↓',
            Self::Incorrect => '✗',
        }
    }

    /// Whether the tag carries a direction (numeric attributes only)
    #[inline]
    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::TooHigh | Self::TooLow)
    }
}

impl fmt::Display for FeedbackTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Invalid feedback tag: {s}"))
    }
}

/// Feedback for one declared attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFeedback {
    pub key: String,
    pub tag: FeedbackTag,
}

/// Outcome of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    is_correct: bool,
    feedback: Vec<AttributeFeedback>,
}

impl GuessResult {
    #[must_use]
    pub const fn new(is_correct: bool, feedback: Vec<AttributeFeedback>) -> Self {
        Self {
            is_correct,
            feedback,
        }
    }

    /// True iff the guess named the target
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Feedback entries in declared attribute order
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[AttributeFeedback] {
        &self.feedback
    }

    /// Tag for a given attribute key
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<FeedbackTag> {
        self.feedback
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.tag)
    }

    /// Number of attributes carrying `tag`
    #[must_use]
    pub fn count(&self, tag: FeedbackTag) -> usize {
        self.feedback.iter().filter(|entry| entry.tag == tag).count()
    }
}
