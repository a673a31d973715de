use crate::domain::error::{AppError, Result};
use crate::domain::table::RawTable;
use calamine::{open_workbook_auto, Data, DataType, Reader};
use std::path::Path;
use tracing::debug;

/// Read the first worksheet of an XLSX/XLS workbook into a raw table.
/// The first row is treated as the header row.
pub fn read_file(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::IoError(format!("Failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
        .map_err(|e| AppError::ParseError(format!("Failed to read worksheet range: {}", e)))?;

    let mut rows_iter = range.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_to_header).collect(),
        None => return Ok(RawTable::default()),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut cells: Vec<Option<String>> =
            row.iter().take(headers.len()).map(cell_to_value).collect();
        cells.resize(headers.len(), None);
        rows.push(cells);
    }

    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "Read workbook sheet"
    );

    Ok(RawTable::new(headers, rows))
}

fn cell_to_header(cell: &Data) -> String {
    cell.as_string().unwrap_or_else(|| format!("{}", cell))
}

fn cell_to_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        _ => Some(cell.as_string().unwrap_or_else(|| format!("{}", cell))),
    }
}
