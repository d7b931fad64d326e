//! Hint sequencing
//!
//! Hints reveal the target's attributes in the schema's fixed order, least
//! identifying first.

use crate::core::{PersonRecord, Schema};

/// Returned once every hint has been revealed
pub const NO_MORE_HINTS: &str = "No more hints available!";

/// The hint at position `hints_used`, or [`NO_MORE_HINTS`] past the end
///
/// # Examples
/// ```
/// use iteradle::core::{AttributeValue, PersonRecord, Schema};
/// use iteradle::game::{NO_MORE_HINTS, get_hint};
///
/// let ada = PersonRecord::new("Ada").with("title", AttributeValue::Text("Engineer".into()));
/// let schema = Schema::classic();
/// assert_eq!(get_hint(&ada, &schema, 0), "This person's title is: Engineer");
/// assert_eq!(get_hint(&ada, &schema, 99), NO_MORE_HINTS);
/// ```
#[must_use]
pub fn get_hint(target: &PersonRecord, schema: &Schema, hints_used: usize) -> String {
    let Some(hint) = schema.hints().get(hints_used) else {
        return NO_MORE_HINTS.to_string();
    };

    let value = target
        .get(hint.key)
        .map(ToString::to_string)
        .unwrap_or_default();
    let value = if hint.lowercase {
        value.to_lowercase()
    } else {
        value
    };

    hint.template.replacen("{}", &value, 1)
}

/// Total number of hints the schema can reveal
#[must_use]
pub fn hint_count(schema: &Schema) -> usize {
    schema.hints().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeValue;

    fn ada() -> PersonRecord {
        PersonRecord::new("Ada")
            .with("title", AttributeValue::Text("Senior Engineer".into()))
            .with("gender", AttributeValue::Text("Female".into()))
            .with("birth_year", AttributeValue::Number(1990))
            .with("years_of_education", AttributeValue::Number(5))
            .with("experience", AttributeValue::Number(10))
    }

    #[test]
    fn classic_hint_sequence() {
        let schema = Schema::classic();
        let target = ada();
        let hints: Vec<String> = (0..hint_count(&schema))
            .map(|i| get_hint(&target, &schema, i))
            .collect();

        assert_eq!(
            hints,
            vec![
                "This person's title is: Senior Engineer",
                "This person is female",
                "This person was born in 1990",
                "This person has 5 years of education",
                "This person has 10 years of work experience",
            ]
        );
    }

    #[test]
    fn exhausted_hints_return_sentinel() {
        let schema = Schema::classic();
        let target = ada();
        let n = hint_count(&schema);
        for used in n..n + 5 {
            assert_eq!(get_hint(&target, &schema, used), NO_MORE_HINTS);
        }
        assert_eq!(get_hint(&target, &schema, usize::MAX), NO_MORE_HINTS);
    }

    #[test]
    fn missing_value_interpolates_empty() {
        let schema = Schema::classic();
        let target = PersonRecord::new("Nobody");
        assert_eq!(get_hint(&target, &schema, 0), "This person's title is: ");
    }

    #[test]
    fn set_values_join_with_commas() {
        let schema = Schema::directory();
        let target = PersonRecord::new("Ada").with(
            "access_roles",
            AttributeValue::tags(["admin", "billing"]),
        );
        let index = schema
            .hints()
            .iter()
            .position(|h| h.key == "access_roles")
            .unwrap();
        assert_eq!(
            get_hint(&target, &schema, index),
            "This person has the access roles: admin, billing"
        );
    }
}
