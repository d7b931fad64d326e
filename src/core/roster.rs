//! The record store
//!
//! An immutable, ordered roster of people with a case-insensitive index over
//! display names and email addresses.

use super::record::PersonRecord;
use crate::error::RosterError;
use rustc_hash::FxHashMap;

/// Ordered, read-only collection of person records
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<PersonRecord>,
    by_name: FxHashMap<String, usize>,
    by_email: FxHashMap<String, usize>,
}

impl Roster {
    /// Build a roster, validating that names are non-empty and unique
    ///
    /// # Errors
    /// Returns `RosterError::EmptyName` for a blank name and
    /// `RosterError::DuplicateName` when two names differ only by case.
    ///
    /// # Examples
    /// ```
    /// use iteradle::core::{PersonRecord, Roster};
    ///
    /// let roster = Roster::new(vec![
    ///     PersonRecord::new("Ada").with_email("ada@example.com"),
    ///     PersonRecord::new("Bob"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(roster.resolve("ADA@example.com").map(|r| r.name()), Some("Ada"));
    /// assert!(Roster::new(vec![PersonRecord::new("Ada"), PersonRecord::new("ada")]).is_err());
    /// ```
    pub fn new(records: Vec<PersonRecord>) -> Result<Self, RosterError> {
        let mut by_name = FxHashMap::default();
        let mut by_email = FxHashMap::default();

        for (i, record) in records.iter().enumerate() {
            let key = normalize(record.name());
            if key.is_empty() {
                return Err(RosterError::EmptyName(i + 1));
            }
            if by_name.insert(key, i).is_some() {
                return Err(RosterError::DuplicateName(record.name().to_string()));
            }

            // First record wins if two people share an email
            if let Some(email) = record.email() {
                by_email.entry(normalize(email)).or_insert(i);
            }
        }

        Ok(Self {
            records,
            by_name,
            by_email,
        })
    }

    /// Records in roster order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve free text to a record by name, falling back to email
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<&PersonRecord> {
        let key = normalize(text);
        self.by_name
            .get(&key)
            .or_else(|| self.by_email.get(&key))
            .map(|&i| &self.records[i])
    }

    /// Names containing `query` (case-insensitive), in roster order
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&PersonRecord> {
        let query = normalize(query);
        self.records
            .iter()
            .filter(|record| record.name().to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new(vec![
            PersonRecord::new("Ada Lovelace").with_email("ada@example.com"),
            PersonRecord::new("Alan Turing").with_email("alan@example.com"),
            PersonRecord::new("Grace Hopper"),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_by_name_case_insensitive() {
        let roster = sample();
        assert_eq!(
            roster.resolve("ada lovelace").map(PersonRecord::name),
            Some("Ada Lovelace")
        );
        assert_eq!(
            roster.resolve("  GRACE HOPPER ").map(PersonRecord::name),
            Some("Grace Hopper")
        );
    }

    #[test]
    fn resolve_by_email() {
        let roster = sample();
        assert_eq!(
            roster.resolve("Alan@Example.com").map(PersonRecord::name),
            Some("Alan Turing")
        );
    }

    #[test]
    fn resolve_unknown() {
        assert!(sample().resolve("Zzz Unknown").is_none());
        assert!(sample().resolve("").is_none());
    }

    #[test]
    fn name_match_wins_over_email() {
        let roster = Roster::new(vec![
            PersonRecord::new("Ada").with_email("bob"),
            PersonRecord::new("Bob"),
        ])
        .unwrap();
        assert_eq!(roster.resolve("bob").map(PersonRecord::name), Some("Bob"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Roster::new(vec![PersonRecord::new("Ada"), PersonRecord::new("ADA ")]);
        assert!(matches!(err, Err(RosterError::DuplicateName(name)) if name == "ADA "));
    }

    #[test]
    fn rejects_empty_names() {
        let err = Roster::new(vec![PersonRecord::new("Ada"), PersonRecord::new("  ")]);
        assert!(matches!(err, Err(RosterError::EmptyName(2))));
    }

    #[test]
    fn search_preserves_roster_order() {
        let roster = sample();
        let names: Vec<&str> = roster
            .search("a", 10)
            .into_iter()
            .map(PersonRecord::name)
            .collect();
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing", "Grace Hopper"]);

        assert_eq!(roster.search("AL", 1).len(), 1);
        assert!(roster.search("xyz", 10).is_empty());
    }

    #[test]
    fn empty_roster() {
        let roster = Roster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }
}
