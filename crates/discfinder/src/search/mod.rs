//! Narrowing and ordering course lists.
//!
//! Both operations here are pure functions over immutable input. Which list they run
//! over, and which parameters they run with, is decided by the caller.

mod compose;
mod dedup;

pub use compose::{ComposeParams, DifficultyFilter, SortKey, compose};
pub use dedup::dedupe;
