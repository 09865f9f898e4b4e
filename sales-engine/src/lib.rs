//! FILENAME: sales-engine/src/lib.rs
//! Sales Aggregation Engine for transaction datasets.
//!
//! This crate turns a raw transaction dataset plus a filter selection into
//! the summary outputs a dashboard needs: scalar KPIs, a yearly trend, a
//! ranked top-N product list, a regional share breakdown, and the filtered
//! row set itself. Every operation is a pure function over an immutable
//! dataset; nothing here holds state between calls.
//!
//! Layers:
//! - `model`: The typed row and dataset (what the data IS)
//! - `filter`: The active year/region selection (what the query asks for)
//! - `kpi`: Scalar summary metrics over the filtered subset
//! - `aggregate`: The three grouped reductions (trend, top-N, share)
//! - `envelope`: The immutable bundle of one invocation's outputs
//! - `engine`: The invocation surface that wires the pipeline together

pub mod aggregate;
pub mod engine;
pub mod envelope;
pub mod filter;
pub mod kpi;
pub mod model;

pub use aggregate::{
    aggregate_by_region, aggregate_by_year, top_products, DEFAULT_TOP_LIMIT,
};
pub use engine::{run_query, EngineOptions};
pub use envelope::ResultEnvelope;
pub use filter::{apply_filter, FilterSelection};
pub use kpi::{compute_kpis, KpiSummary};
pub use model::{Dataset, TransactionRow, Year};
