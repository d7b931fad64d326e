//! Game logic
//!
//! Target selection, guess evaluation, hints and the per-game session.

pub mod daily;
pub mod evaluator;
pub mod hints;
pub mod session;

pub use daily::{
    Daily, PUZZLE_NUMBER_RANGE, Practice, TargetSelector, daily_index, date_hash, puzzle_number,
    select_random, select_target,
};
pub use evaluator::{compare_attribute, compare_numeric, evaluate};
pub use hints::{NO_MORE_HINTS, get_hint, hint_count};
pub use session::{GameSession, GameStatus, Limits};
