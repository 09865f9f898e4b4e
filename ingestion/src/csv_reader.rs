//! FILENAME: ingestion/src/csv_reader.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::IngestError;
use crate::record::{
    finish_load, non_empty, raw_from_lookup, resolve_columns, validate_record, LoadReport,
    RejectedRow, RejectionSummary,
};

/// Loads a CSV file of sales transactions into a validated dataset.
pub fn load_csv(path: &Path) -> Result<LoadReport, IngestError> {
    let file = File::open(path)?;
    load_csv_from_reader(file)
}

/// Loads sales transactions from any CSV byte stream.
///
/// The first record is the header row; columns are resolved by name,
/// case-insensitively, so column order does not matter.
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<LoadReport, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let columns = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    let mut rejections = RejectionSummary::default();

    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        let raw = raw_from_lookup(i + 1, &columns, |idx| {
            record.get(idx).unwrap_or("").to_string()
        });

        match validate_record(&raw) {
            Ok(row) => rows.push(row),
            Err(reason) => rejections.record(RejectedRow {
                row_number: raw.row_number,
                order_id: non_empty(&raw.order_id),
                reason,
            }),
        }
    }

    finish_load("csv", rows, rejections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MalformedKind;

    const HEADER: &str = "Order ID,Order Date,Year,Region,Product Name,Sales,Profit";

    fn load(body: &str) -> Result<LoadReport, IngestError> {
        load_csv_from_reader(body.as_bytes())
    }

    #[test]
    fn test_load_valid_csv() {
        let report = load(&format!(
            "{HEADER}\n\
             ORD-1,2021-03-01,2021,East,Widget,100,10\n\
             ORD-1,2021-03-01,2021,East,Gadget,50,5\n\
             ORD-2,2022-07-09,2022,West,Widget,200,20\n"
        ))
        .unwrap();

        assert!(report.rejections.is_clean());
        assert_eq!(report.dataset.len(), 3);
        assert_eq!(report.dataset.distinct_years(), vec![2021, 2022]);
    }

    #[test]
    fn test_headers_matched_case_insensitively() {
        let report = load(
            "order id,ORDER DATE,year,region,product name,SALES,Profit\n\
             ORD-1,2021-01-01,2021,East,Widget,100,10\n",
        )
        .unwrap();
        assert_eq!(report.dataset.len(), 1);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let report = load(
            "Sales,Profit,Order Date,Order ID,Region,Product Name,Year\n\
             100,10,2021-01-01,ORD-1,East,Widget,2021\n",
        )
        .unwrap();

        let row = &report.dataset.rows()[0];
        assert_eq!(row.sales, 100.0);
        assert_eq!(row.order_id, "ORD-1");
    }

    #[test]
    fn test_malformed_rows_reported_in_aggregate() {
        let report = load(&format!(
            "{HEADER}\n\
             ORD-1,2021-03-01,2021,East,Widget,100,10\n\
             ORD-2,,2021,East,Widget,100,10\n\
             ORD-3,2021-05-01,2021,East,Widget,oops,10\n"
        ))
        .unwrap();

        assert_eq!(report.dataset.len(), 1);
        assert_eq!(report.rejections.rejected, 2);

        let first = report.rejections.first.unwrap();
        assert_eq!(first.row_number, 2);
        assert_eq!(first.order_id.as_deref(), Some("ORD-2"));
        assert_eq!(first.reason, MalformedKind::MissingDate);
    }

    #[test]
    fn test_year_column_optional() {
        let report = load(
            "Order ID,Order Date,Region,Product Name,Sales,Profit\n\
             ORD-1,2021-04-15,East,Widget,100,10\n",
        )
        .unwrap();
        assert_eq!(report.dataset.rows()[0].year, 2021);
    }

    #[test]
    fn test_missing_required_column_is_format_error() {
        let result = load(
            "Order ID,Order Date,Region,Product Name,Profit\n\
             ORD-1,2021-04-15,East,Widget,10\n",
        );
        assert!(matches!(result, Err(IngestError::InvalidFormat(_))));
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let result = load(&format!("{HEADER}\n"));
        assert!(matches!(result, Err(IngestError::EmptyDataset)));
    }

    #[test]
    fn test_all_rows_rejected_is_empty_dataset() {
        let result = load(&format!(
            "{HEADER}\n\
             ORD-1,,2021,East,Widget,100,10\n"
        ));
        assert!(matches!(result, Err(IngestError::EmptyDataset)));
    }
}
