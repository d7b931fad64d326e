//! Guess evaluation
//!
//! A guess is resolved against the roster by name or email, then every
//! attribute in the schema is compared with the target through one
//! table-driven routine.

use crate::core::{
    AttributeFeedback, AttributeKind, AttributeValue, FeedbackTag, GuessResult, PersonRecord,
    Roster, Schema,
};
use tracing::debug;

/// Evaluate a raw guess against the target
///
/// An unresolvable guess gets `Incorrect` for every attribute. The guess is
/// correct iff the resolved record's name equals the target's name.
///
/// # Examples
/// ```
/// use iteradle::core::{AttributeValue, FeedbackTag, PersonRecord, Roster, Schema};
/// use iteradle::game::evaluate;
///
/// let roster = Roster::new(vec![
///     PersonRecord::new("Ada").with("birth_year", AttributeValue::Number(1990)),
///     PersonRecord::new("Bob").with("birth_year", AttributeValue::Number(1987)),
/// ])
/// .unwrap();
/// let target = &roster.records()[0];
///
/// let result = evaluate("bob", target, &roster, &Schema::classic());
/// assert!(!result.is_correct());
/// assert_eq!(result.tag("birth_year"), Some(FeedbackTag::Partial));
/// ```
#[must_use]
pub fn evaluate(guess: &str, target: &PersonRecord, roster: &Roster, schema: &Schema) -> GuessResult {
    let Some(guessed) = roster.resolve(guess) else {
        debug!(guess, "guess did not resolve to anyone on the roster");
        return unresolved(schema);
    };

    let feedback = schema
        .attributes()
        .iter()
        .map(|spec| AttributeFeedback {
            key: spec.key.to_string(),
            tag: compare_attribute(spec.kind, guessed.get(spec.key), target.get(spec.key)),
        })
        .collect();

    let is_correct = guessed.name() == target.name();
    debug!(guess = guessed.name(), is_correct, "evaluated guess");
    GuessResult::new(is_correct, feedback)
}

/// All-`Incorrect` result for a guess that names nobody
#[must_use]
pub fn unresolved(schema: &Schema) -> GuessResult {
    let feedback = schema
        .attributes()
        .iter()
        .map(|spec| AttributeFeedback {
            key: spec.key.to_string(),
            tag: FeedbackTag::Incorrect,
        })
        .collect();
    GuessResult::new(false, feedback)
}

/// Compare one attribute of the guessed record with the target's
///
/// Missing values, or values of a kind that does not match the declared
/// kind, compare as `Incorrect`.
#[must_use]
pub fn compare_attribute(
    kind: AttributeKind,
    guessed: Option<&AttributeValue>,
    target: Option<&AttributeValue>,
) -> FeedbackTag {
    let (Some(guessed), Some(target)) = (guessed, target) else {
        return FeedbackTag::Incorrect;
    };

    match (kind, guessed, target) {
        (AttributeKind::Numeric { tolerance }, AttributeValue::Number(g), AttributeValue::Number(t)) => {
            compare_numeric(*g, *t, tolerance)
        }
        (AttributeKind::Categorical, AttributeValue::Text(g), AttributeValue::Text(t)) => {
            exact(g == t)
        }
        (AttributeKind::Boolean, AttributeValue::Flag(g), AttributeValue::Flag(t)) => exact(g == t),
        (AttributeKind::Set, AttributeValue::Tags(g), AttributeValue::Tags(t)) => {
            if g.iter().any(|tag| t.contains(tag)) {
                FeedbackTag::Partial
            } else {
                FeedbackTag::Incorrect
            }
        }
        _ => FeedbackTag::Incorrect,
    }
}

/// Three-tier numeric rule: exact, within tolerance, then direction
#[must_use]
pub fn compare_numeric(guessed: u32, target: u32, tolerance: u32) -> FeedbackTag {
    if guessed == target {
        FeedbackTag::Correct
    } else if guessed.abs_diff(target) <= tolerance {
        FeedbackTag::Partial
    } else if guessed > target {
        FeedbackTag::TooHigh
    } else {
        FeedbackTag::TooLow
    }
}

const fn exact(matches: bool) -> FeedbackTag {
    if matches {
        FeedbackTag::Correct
    } else {
        FeedbackTag::Incorrect
    }
}
