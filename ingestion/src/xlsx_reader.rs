//! FILENAME: ingestion/src/xlsx_reader.rs

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{Days, NaiveDate};

use crate::error::IngestError;
use crate::record::{
    finish_load, non_empty, raw_from_lookup, resolve_columns, validate_record, LoadReport,
    RejectedRow, RejectionSummary,
};

/// Loads the first worksheet of an XLSX file into a validated dataset.
pub fn load_xlsx(path: &Path) -> Result<LoadReport, IngestError> {
    load_xlsx_sheet(path, None)
}

/// Loads a named worksheet, or the first one when `sheet` is `None`.
///
/// The first row is the header row; columns are resolved by name exactly as
/// in the CSV loader, so the two formats accept the same files.
pub fn load_xlsx_sheet(path: &Path, sheet: Option<&str>) -> Result<LoadReport, IngestError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    if sheet_names.is_empty() {
        return Err(IngestError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    }

    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound(name.to_string()))?,
        None => sheet_names[0].clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::InvalidFormat(e.to_string()))?;

    let mut source_rows = range.rows();
    let headers: Vec<String> = source_rows
        .next()
        .ok_or_else(|| IngestError::InvalidFormat("Sheet has no header row".to_string()))?
        .iter()
        .map(cell_to_text)
        .collect();
    let columns = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    let mut rejections = RejectionSummary::default();

    for (i, source_row) in source_rows.enumerate() {
        let raw = raw_from_lookup(i + 1, &columns, |idx| {
            source_row.get(idx).map(cell_to_text).unwrap_or_default()
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

    finish_load("xlsx", rows, rejections)
}

/// Renders one worksheet cell as field text for the shared validator.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("{e:?}"),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            match excel_serial_to_date(serial) {
                Some(date) => date.format("%Y-%m-%d").to_string(),
                None => serial.to_string(),
            }
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Converts an Excel serial date (days since 1899-12-30) to a calendar
/// date, dropping any fractional time-of-day part.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_days(Days::new(serial as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_serial_conversion() {
        // 44256 is 2021-03-01 in the 1900 date system.
        assert_eq!(
            excel_serial_to_date(44256.0).unwrap().to_string(),
            "2021-03-01"
        );
        // Fractional part is time-of-day and is dropped.
        assert_eq!(
            excel_serial_to_date(44256.75).unwrap().to_string(),
            "2021-03-01"
        );
    }

    #[test]
    fn test_negative_serial_rejected() {
        assert!(excel_serial_to_date(-1.0).is_none());
    }

    #[test]
    fn test_numeric_cells_render_as_plain_text() {
        assert_eq!(cell_to_text(&Data::Float(2021.0)), "2021");
        assert_eq!(cell_to_text(&Data::Float(100.5)), "100.5");
        assert_eq!(cell_to_text(&Data::Int(42)), "42");
        assert_eq!(cell_to_text(&Data::Empty), "");
    }

    #[test]
    fn test_iso_datetime_text_validates_as_date() {
        // DateTimeIso cells surface as ISO text; the shared date parser
        // strips the time part.
        assert_eq!(
            crate::record::parse_date("2021-03-01T00:00:00").unwrap().to_string(),
            "2021-03-01"
        );
    }
}
