//! Priority list reordering
//!
//! The single mutation the priority order supports: a stable single-element
//! move. In the original UI this is the landing point of a drag gesture; here
//! the caller supplies the `(from, to)` pair and owns the returned list.

use crate::error::{RanqError, Result};
use crate::rule::PriorityRule;

/// Move the rule at `from_index` to `to_index`, shifting intervening rules
/// by one position. All other relative orderings are preserved.
///
/// Returns a new list; the input is untouched. `from_index == to_index` is
/// an idempotent no-op. Out-of-range indices fail with `IndexOutOfRange`;
/// the core does not clamp on the caller's behalf.
pub fn move_priority(
    list: &[PriorityRule],
    from_index: usize,
    to_index: usize,
) -> Result<Vec<PriorityRule>> {
    let len = list.len();
    for index in [from_index, to_index] {
        if index >= len {
            return Err(RanqError::IndexOutOfRange { index, len });
        }
    }

    let mut result = list.to_vec();
    if from_index != to_index {
        let rule = result.remove(from_index);
        result.insert(to_index, rule);
    }
    Ok(result)
}
