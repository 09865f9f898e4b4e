//! FILENAME: sales-engine/src/model.rs
//! Row Model & Dataset - The typed representation of the source data.
//!
//! A `Dataset` is an ordered, logically immutable sequence of
//! `TransactionRow`s. Re-loading produces a new dataset; nothing mutates an
//! existing one in place, which makes it safe for callers to cache a handle
//! and share it across any number of concurrent readers.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Calendar year of a transaction, as stored alongside the order date.
pub type Year = i32;

// ============================================================================
// TRANSACTION ROW
// ============================================================================

/// One sales record (a single line item).
///
/// `order_id` is an opaque identifier and is NOT unique across rows: one
/// order may span several line items. `sales` is non-negative by convention
/// but the engine tolerates violations (it is an untrusted external value);
/// `profit` may legitimately be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub order_id: String,
    pub order_date: NaiveDate,
    /// Must agree with `order_date`'s year component.
    pub year: Year,
    pub region: String,
    pub product_name: String,
    pub sales: f64,
    pub profit: f64,
}

impl TransactionRow {
    /// Creates a row with `year` derived from the order date, which keeps
    /// the year/date consistency invariant by construction.
    pub fn new(
        order_id: impl Into<String>,
        order_date: NaiveDate,
        region: impl Into<String>,
        product_name: impl Into<String>,
        sales: f64,
        profit: f64,
    ) -> Self {
        TransactionRow {
            order_id: order_id.into(),
            year: order_date.year(),
            order_date,
            region: region.into(),
            product_name: product_name.into(),
            sales,
            profit,
        }
    }
}

// ============================================================================
// DATASET
// ============================================================================

/// An ordered collection of transaction rows.
///
/// Row order is irrelevant to the aggregations but stable for deterministic
/// display, and it defines the "first appearance" order the grouped
/// aggregators use for tie-breaking and categorical ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<TransactionRow>,
}

impl Dataset {
    pub fn new(rows: Vec<TransactionRow>) -> Self {
        Dataset { rows }
    }

    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct years observed in the data, ascending.
    ///
    /// The valid filter vocabulary is derived from the dataset itself, never
    /// hardcoded; this is what populates a year selection widget.
    pub fn distinct_years(&self) -> Vec<Year> {
        let seen: FxHashSet<Year> = self.rows.iter().map(|r| r.year).collect();
        let mut years: Vec<Year> = seen.into_iter().collect();
        years.sort_unstable();
        years
    }

    /// Distinct regions observed in the data, sorted for display.
    pub fn distinct_regions(&self) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut regions: Vec<String> = Vec::new();
        for row in &self.rows {
            if seen.insert(row.region.as_str()) {
                regions.push(row.region.clone());
            }
        }
        regions.sort_unstable();
        regions
    }
}
