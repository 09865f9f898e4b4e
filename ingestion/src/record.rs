//! FILENAME: ingestion/src/record.rs
//! Source row shape, column resolution, and per-row validation.
//!
//! Both readers funnel their rows through `validate_record`, so the
//! validation contract is identical regardless of source format:
//! - `order_date` must be present and parseable
//! - `sales` and `profit` must be present and numeric
//! - `year`, when the source carries it, must be numeric and agree with the
//!   date's year component; when absent it is derived from the date
//! - `order_id`, `region`, and `product_name` are opaque labels passed
//!   through untouched

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use sales_engine::{Dataset, TransactionRow};
use serde::Serialize;
use thiserror::Error;

use crate::error::IngestError;

/// Date formats accepted for the order date column, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

// ============================================================================
// COLUMN RESOLUTION
// ============================================================================

/// Resolved positions of the recognized columns in a source header row.
/// Matching is case-insensitive on the trimmed header text.
#[derive(Debug, Clone)]
pub(crate) struct ColumnMap {
    pub order_id: Option<usize>,
    pub order_date: usize,
    pub year: Option<usize>,
    pub region: Option<usize>,
    pub product_name: Option<usize>,
    pub sales: usize,
    pub profit: usize,
}

pub(crate) fn resolve_columns(headers: &[String]) -> Result<ColumnMap, IngestError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let require = |name: &'static str| {
        find(name).ok_or_else(|| {
            IngestError::InvalidFormat(format!("missing required column: {name}"))
        })
    };

    Ok(ColumnMap {
        order_id: find("Order ID"),
        order_date: require("Order Date")?,
        year: find("Year"),
        region: find("Region"),
        product_name: find("Product Name"),
        sales: require("Sales")?,
        profit: require("Profit")?,
    })
}

// ============================================================================
// RAW RECORD
// ============================================================================

/// One source row before validation, as field text.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    /// 1-based data row number, excluding the header row.
    pub row_number: usize,
    pub order_id: String,
    pub order_date: String,
    pub year: String,
    pub region: String,
    pub product_name: String,
    pub sales: String,
    pub profit: String,
}

/// Builds a `RawRecord` by looking up each resolved column in a source row.
pub(crate) fn raw_from_lookup(
    row_number: usize,
    columns: &ColumnMap,
    field: impl Fn(usize) -> String,
) -> RawRecord {
    let optional = |idx: Option<usize>| idx.map(&field).unwrap_or_default();
    RawRecord {
        row_number,
        order_id: optional(columns.order_id),
        order_date: field(columns.order_date),
        year: optional(columns.year),
        region: optional(columns.region),
        product_name: optional(columns.product_name),
        sales: field(columns.sales),
        profit: field(columns.profit),
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Why a source row was rejected.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum MalformedKind {
    #[error("missing order date")]
    MissingDate,

    #[error("unparseable order date: {0}")]
    UnparseableDate(String),

    #[error("missing numeric field: {0}")]
    MissingNumeric(&'static str),

    #[error("non-numeric {field}: {raw}")]
    NonNumeric { field: &'static str, raw: String },

    #[error("year column {column} disagrees with order date year {date_year}")]
    YearMismatch { column: i32, date_year: i32 },
}

/// Validates one raw row into a typed transaction row.
pub fn validate_record(raw: &RawRecord) -> Result<TransactionRow, MalformedKind> {
    let date_text = raw.order_date.trim();
    if date_text.is_empty() {
        return Err(MalformedKind::MissingDate);
    }
    let order_date = parse_date(date_text)
        .ok_or_else(|| MalformedKind::UnparseableDate(date_text.to_string()))?;

    let sales = parse_numeric("Sales", &raw.sales)?;
    let profit = parse_numeric("Profit", &raw.profit)?;

    let date_year = order_date.year();
    let year = match raw.year.trim() {
        "" => date_year,
        text => {
            let parsed = text.parse::<f64>().map_err(|_| MalformedKind::NonNumeric {
                field: "Year",
                raw: text.to_string(),
            })?;
            let column = parsed as i32;
            if column != date_year {
                return Err(MalformedKind::YearMismatch { column, date_year });
            }
            column
        }
    };

    Ok(TransactionRow {
        order_id: raw.order_id.trim().to_string(),
        order_date,
        year,
        region: raw.region.trim().to_string(),
        product_name: raw.product_name.trim().to_string(),
        sales,
        profit,
    })
}

fn parse_numeric(field: &'static str, raw: &str) -> Result<f64, MalformedKind> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(MalformedKind::MissingNumeric(field));
    }
    text.parse::<f64>().map_err(|_| MalformedKind::NonNumeric {
        field,
        raw: text.to_string(),
    })
}

pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    // ISO timestamps (e.g. from XLSX) carry a time part we don't need.
    let head = text.split('T').next().unwrap_or(text);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(head, fmt).ok())
}

// ============================================================================
// LOAD REPORT
// ============================================================================

/// The first rejected row of a load, kept as the report's example offender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub row_number: usize,
    /// The row's order id, when it had one.
    pub order_id: Option<String>,
    pub reason: MalformedKind,
}

/// Aggregate account of the rows a load rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RejectionSummary {
    pub rejected: usize,
    pub first: Option<RejectedRow>,
}

impl RejectionSummary {
    pub(crate) fn record(&mut self, row: RejectedRow) {
        if self.first.is_none() {
            self.first = Some(row);
        }
        self.rejected += 1;
    }

    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }
}

/// A successfully loaded dataset plus its rejection report.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub dataset: Dataset,
    pub rejections: RejectionSummary,
}

/// Shared tail of both loaders: log the outcome and refuse empty results.
pub(crate) fn finish_load(
    source: &str,
    rows: Vec<TransactionRow>,
    rejections: RejectionSummary,
) -> Result<LoadReport, IngestError> {
    if !rejections.is_clean() {
        if let Some(first) = &rejections.first {
            warn!(
                "{source} load rejected {} malformed row(s); first at data row {}: {}",
                rejections.rejected, first.row_number, first.reason
            );
        }
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    debug!("{source} load accepted {} row(s)", rows.len());
    Ok(LoadReport {
        dataset: Dataset::new(rows),
        rejections,
    })
}

pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
