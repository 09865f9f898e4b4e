//! FILENAME: sales-engine/src/aggregate.rs
//! Grouped Aggregators - The three reduction pipelines over a filtered subset.
//!
//! All three aggregators share one primitive: sum groups keyed by first
//! appearance. Each distinct key is assigned a slot in an order-preserving
//! vector the first time it is seen, and later rows accumulate into that
//! slot. Which groups exist is always derived from the rows themselves;
//! groups with no matching rows are never emitted with a zero value.
//!
//! Ordering is a contract, not an implementation accident:
//! - yearly trend: ascending by year
//! - top products: descending by sum, ties broken by first appearance
//! - regional share: first appearance order of the input

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::model::{TransactionRow, Year};

/// Default entry cap for the ranked product aggregation.
pub const DEFAULT_TOP_LIMIT: usize = 10;

// ============================================================================
// GROUPING PRIMITIVE
// ============================================================================

/// Sum accumulator over grouping keys, preserving first-appearance order.
struct GroupedSums<K> {
    /// Map from key to its slot in `groups`.
    index: FxHashMap<K, usize>,

    /// Groups in the order their keys first appeared.
    groups: Vec<(K, f64)>,
}

impl<K: Eq + Hash + Clone> GroupedSums<K> {
    fn new() -> Self {
        GroupedSums {
            index: FxHashMap::default(),
            groups: Vec::new(),
        }
    }

    fn add(&mut self, key: &K, amount: f64) {
        if let Some(&slot) = self.index.get(key) {
            self.groups[slot].1 += amount;
        } else {
            let slot = self.groups.len();
            self.index.insert(key.clone(), slot);
            self.groups.push((key.clone(), amount));
        }
    }

    fn into_groups(self) -> Vec<(K, f64)> {
        self.groups
    }
}

// ============================================================================
// AGGREGATORS
// ============================================================================

/// Yearly sales trend: groups `rows` by year and sums `sales` per group,
/// ordered ascending by year. Years with no rows are omitted.
pub fn aggregate_by_year(rows: &[TransactionRow]) -> Vec<(Year, f64)> {
    let mut sums = GroupedSums::new();
    for row in rows {
        sums.add(&row.year, row.sales);
    }

    let mut groups = sums.into_groups();
    groups.sort_unstable_by_key(|&(year, _)| year);
    groups
}

/// Ranked product aggregation: groups `rows` by product name, sums `sales`,
/// sorts descending by sum, and truncates to `limit` entries.
///
/// Products with equal sums keep the order in which their first row appears
/// in the input (stable-sort semantics). Fewer than `limit` distinct
/// products yields all of them.
pub fn top_products(rows: &[TransactionRow], limit: usize) -> Vec<(String, f64)> {
    let mut sums = GroupedSums::new();
    for row in rows {
        sums.add(&row.product_name, row.sales);
    }

    let mut groups = sums.into_groups();
    // Stable sort: equal sums keep first-appearance order.
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    groups.truncate(limit);
    groups
}

/// Regional share aggregation: groups `rows` by region and sums `sales`,
/// emitted in the regions' first-appearance order in the input.
///
/// Raw sums only; percentage-of-total is a presentation concern layered on
/// top of these values.
pub fn aggregate_by_region(rows: &[TransactionRow]) -> Vec<(String, f64)> {
    let mut sums = GroupedSums::new();
    for row in rows {
        sums.add(&row.region, row.sales);
    }
    sums.into_groups()
}
