//! The ranking engine
//!
//! Scores every item against a query under the current priority order and
//! returns the matching subset, best first. Pure and total: no state between
//! calls, no side effects, no error conditions.

use serde::Serialize;

use crate::item::Item;
use crate::rule::PriorityRule;

/// An item plus its relevance score. Never persisted; recomputed per query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub id: u64,
    pub name: String,
    pub text: String,
    pub tags: Vec<String>,
    /// Total weighted contribution, always > 0 for returned results
    pub score: f64,
}

/// Rank `items` against `query` under the given priority order.
///
/// A rule at position `i` in a list of `n` rules contributes
/// `(n - i) * base_value` when its predicate matches, so earlier rules weigh
/// more. The dominance is non-strict: a rule placed first outweighs all later
/// contributions only when base values are comparable.
///
/// Items with a total score of zero are dropped. The result is sorted by
/// score descending; ties preserve the input order of `items` (stable sort).
/// A query that is empty after trimming short-circuits to an empty result.
pub fn rank(query: &str, items: &[Item], priorities: &[PriorityRule]) -> Vec<ScoredItem> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // Fold the query once for the whole pass
    let query_lower = trimmed.to_lowercase();
    let rule_count = priorities.len();

    let mut results: Vec<ScoredItem> = items
        .iter()
        .filter_map(|item| {
            let mut score = 0.0;
            for (index, rule) in priorities.iter().enumerate() {
                if rule.kind.matches(item, &query_lower) {
                    score += (rule_count - index) as f64 * rule.kind.base_value();
                }
            }

            if score > 0.0 {
                Some(ScoredItem {
                    id: item.id,
                    name: item.name.clone(),
                    text: item.text.clone(),
                    tags: item.tags.clone(),
                    score,
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable, so equal scores keep input order
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        query = trimmed,
        item_count = items.len(),
        result_count = results.len(),
        "rank"
    );

    results
}
