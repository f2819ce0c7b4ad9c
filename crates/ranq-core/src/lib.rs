//! Ranq Core Library
//!
//! Pure ranking engine: scores a collection of items against a query under
//! an ordered list of priority rules, plus the reorder operation that list
//! depends on. No persistence, no shared state.

pub mod error;
pub mod format;
pub mod item;
pub mod logging;
pub mod priority;
pub mod rank;
pub mod records;
pub mod rule;

pub use error::{RanqError, Result};
pub use item::Item;
pub use priority::move_priority;
pub use rank::{rank, ScoredItem};
pub use rule::{PriorityRule, RuleKind};
