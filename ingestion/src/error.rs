//! FILENAME: ingestion/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX read error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// The source yielded zero valid rows. Surfaced to the caller rather
    /// than silently producing a zero-valued envelope downstream, since it
    /// usually indicates an upstream loading failure rather than business
    /// data.
    #[error("Dataset contains no rows")]
    EmptyDataset,
}
