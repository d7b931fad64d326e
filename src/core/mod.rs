//! Core domain types for the guessing game
//!
//! Records, the roster, attribute schemas and feedback. Everything here is
//! pure and performs no I/O.

mod feedback;
mod record;
mod roster;
mod schema;

pub use feedback::{AttributeFeedback, FeedbackTag, GuessResult};
pub use record::{AttributeValue, NAME_KEY, PersonRecord};
pub use roster::Roster;
pub use schema::{AttributeKind, AttributeSpec, HintSpec, Schema, Variant};
