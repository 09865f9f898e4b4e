//! FILENAME: sales-engine/src/engine.rs
//! Engine Invocation Surface - Wires the filter and the four reductions.
//!
//! Pipeline: filter once, then the KPI calculator and the three grouped
//! aggregators each independently consume the filtered subset. None of the
//! reductions depends on another's output, and every function here borrows
//! its inputs immutably, so a caller that wants to may run them on separate
//! threads over shared references without coordination. The engine itself
//! stays synchronous.
//!
//! Aggregation over a well-typed dataset is infallible: an empty filtered
//! subset produces empty sequences and zero scalars, never an error.

use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate_by_region, aggregate_by_year, top_products, DEFAULT_TOP_LIMIT};
use crate::envelope::ResultEnvelope;
use crate::filter::{apply_filter, FilterSelection};
use crate::kpi::compute_kpis;
use crate::model::Dataset;

/// Tunable parameters of one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Entry cap for the ranked product aggregation.
    pub top_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            top_limit: DEFAULT_TOP_LIMIT,
        }
    }
}

/// Runs one full query: filter, KPIs, and the three grouped aggregations.
pub fn run_query(
    dataset: &Dataset,
    selection: &FilterSelection,
    options: EngineOptions,
) -> ResultEnvelope {
    let filtered = apply_filter(dataset, selection);

    let kpis = compute_kpis(&filtered);
    let yearly_sales = aggregate_by_year(&filtered);
    let top = top_products(&filtered, options.top_limit);
    let region_sales = aggregate_by_region(&filtered);

    ResultEnvelope {
        total_sales: kpis.total_sales,
        total_profit: kpis.total_profit,
        total_orders: kpis.total_orders,
        yearly_sales,
        top_products: top,
        region_sales,
        filtered_rows: filtered,
    }
}
