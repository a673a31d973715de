pub mod csv;
pub mod xlsx;

use crate::domain::error::{AppError, Result};
use crate::domain::table::RawTable;
use std::path::Path;

pub use csv::{read_records, write_records, CsvTableReader};

/// Read a spreadsheet-like file into a raw table, dispatching on the
/// file extension. CSV input gets delimiter and encoding detection.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => CsvTableReader::read_file_auto_detect(path),
        "xlsx" | "xls" => xlsx::read_file(path),
        other => Err(AppError::ValidationError(format!(
            "Unsupported file extension: {:?}",
            other
        ))),
    }
}
