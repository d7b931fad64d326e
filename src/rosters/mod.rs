//! Roster sources
//!
//! Loading roster exports from disk, plus a demo roster embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::DEMO_ROSTER;

use crate::core::{Roster, Schema};
use crate::error::RosterError;

/// Parse the embedded demo roster against a schema
///
/// # Errors
///
/// Returns `RosterError` only if the embedded data is malformed.
pub fn demo_roster(schema: &Schema) -> Result<Roster, RosterError> {
    loader::parse_roster(DEMO_ROSTER, schema)
}
