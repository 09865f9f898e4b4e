//! FILENAME: sales-engine/src/envelope.rs
//! Result Envelope - The immutable bundle of one engine invocation's outputs.
//!
//! The envelope is created fresh per query, handed to the presentation
//! collaborator, and discarded after consumption; no component ever mutates
//! a previously returned envelope. It is serializable so that presentation
//! code can consume it over any bridge without this crate knowing about
//! chart types, colors, or layout.

use serde::{Deserialize, Serialize};

use crate::model::{TransactionRow, Year};

/// All outputs of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// The filtered row set, preserving dataset order.
    pub filtered_rows: Vec<TransactionRow>,

    /// Sum of `sales` over the filtered rows.
    pub total_sales: f64,

    /// Sum of `profit` over the filtered rows.
    pub total_profit: f64,

    /// Count of distinct order ids across the filtered rows.
    pub total_orders: usize,

    /// (year, sales sum) pairs, ascending by year.
    pub yearly_sales: Vec<(Year, f64)>,

    /// Up to the configured limit of (product, sales sum) pairs, descending
    /// by sum, ties broken by first appearance in the dataset.
    pub top_products: Vec<(String, f64)>,

    /// (region, sales sum) pairs in first-appearance order of the filtered
    /// rows.
    pub region_sales: Vec<(String, f64)>,
}
