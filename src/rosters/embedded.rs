//! Embedded demo roster
//!
//! A small fictional roster compiled into the binary so the game runs
//! without an export file.

/// Demo roster in the semicolon-delimited export format
pub const DEMO_ROSTER: &str = include_str!("../../data/demo_roster.csv");
