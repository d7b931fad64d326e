//! Person record representation
//!
//! A `PersonRecord` is one entry of the roster: a display name, an optional
//! secondary key (email) and a bag of typed attribute values keyed by the
//! attribute keys declared in a [`Schema`](super::Schema).

use rustc_hash::FxHashMap;
use std::fmt;

/// Key under which every record stores its display name
pub const NAME_KEY: &str = "name";

/// A single typed attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Non-negative integer (0 doubles as "unknown" for malformed source data)
    Number(u32),
    /// Free-form categorical text, compared case-sensitively
    Text(String),
    /// Yes/no flag
    Flag(bool),
    /// Small unordered set of tags
    Tags(Vec<String>),
}

impl AttributeValue {
    /// Build a tag set, dropping blanks and duplicates while keeping first-seen order
    #[must_use]
    pub fn tags<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = Vec::new();
        for item in items {
            let tag: String = item.into().trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self::Tags(tags)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Flag(true) => write!(f, "yes"),
            Self::Flag(false) => write!(f, "no"),
            Self::Tags(tags) => write!(f, "{}", tags.join(", ")),
        }
    }
}

/// One person in the roster
///
/// The display name is stored both as a field and under [`NAME_KEY`] so that
/// schemas can declare it as an ordinary categorical attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    name: String,
    email: Option<String>,
    attributes: FxHashMap<String, AttributeValue>,
}

impl PersonRecord {
    /// Create a record with only a display name
    ///
    /// # Examples
    /// ```
    /// use iteradle::core::{AttributeValue, PersonRecord};
    ///
    /// let ada = PersonRecord::new("Ada")
    ///     .with_email("ada@example.com")
    ///     .with("birth_year", AttributeValue::Number(1990));
    /// assert_eq!(ada.name(), "Ada");
    /// assert_eq!(ada.number("birth_year"), Some(1990));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        let mut attributes = FxHashMap::default();
        attributes.insert(NAME_KEY.to_string(), AttributeValue::Text(name.clone()));

        Self {
            name,
            email: None,
            attributes,
        }
    }

    /// Attach a secondary lookup key; blank emails are ignored
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email: String = email.into();
        let trimmed = email.trim();
        self.email = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Attach an attribute value
    ///
    /// The name attribute cannot be overwritten this way.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        let key: String = key.into();
        if key != NAME_KEY {
            self.attributes.insert(key, value);
        }
        self
    }

    /// The display name (unique within a roster)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The secondary lookup key, if any
    #[inline]
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Look up an attribute by key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Numeric attribute value, if present and numeric
    #[must_use]
    pub fn number(&self, key: &str) -> Option<u32> {
        match self.get(key) {
            Some(AttributeValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Text attribute value, if present and textual
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AttributeValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
