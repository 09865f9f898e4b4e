//! FILENAME: ingestion/src/lib.rs
//! Sales Data Ingestion Module
//!
//! Loads raw transaction files (CSV or XLSX) into a validated `Dataset`.
//! Rows missing a required field or carrying a non-numeric value where a
//! number is required are rejected here, not coerced; downstream
//! aggregation then runs only over confirmed-valid rows. Rejections are
//! reported in aggregate (count plus first offender), never raised per-row.

mod csv_reader;
mod error;
mod record;
mod xlsx_reader;

pub use csv_reader::{load_csv, load_csv_from_reader};
pub use error::IngestError;
pub use record::{
    validate_record, LoadReport, MalformedKind, RawRecord, RejectedRow, RejectionSummary,
};
pub use xlsx_reader::{load_xlsx, load_xlsx_sheet};
