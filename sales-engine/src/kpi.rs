//! FILENAME: sales-engine/src/kpi.rs
//! KPI Calculator - Reduces the filtered subset to three scalar metrics.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::model::TransactionRow;

/// The three scalar summary metrics of one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub total_profit: f64,
    /// Count of DISTINCT order ids, not rows: one order may span several
    /// line items.
    pub total_orders: usize,
}

/// Computes the KPI summary over `rows`. All zeros on empty input.
///
/// Sums accumulate in input order, so repeated calls on the same input
/// always display the same value.
pub fn compute_kpis(rows: &[TransactionRow]) -> KpiSummary {
    let mut total_sales = 0.0;
    let mut total_profit = 0.0;
    let mut seen_orders: FxHashSet<&str> = FxHashSet::default();

    for row in rows {
        total_sales += row.sales;
        total_profit += row.profit;
        seen_orders.insert(row.order_id.as_str());
    }

    KpiSummary {
        total_sales,
        total_profit,
        total_orders: seen_orders.len(),
    }
}
