// ============================================================
// RAW TABLE
// ============================================================
// Canonical tabular input: one header row plus row-major cells

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}([T ].*)?$").unwrap());

static SLASH_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}$").unwrap());

/// Coarse classification of a cell value, used when picking the
/// review-bearing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Boolean,
    Numeric,
    Date,
    Text,
}

impl CellKind {
    pub fn of(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return CellKind::Empty;
        }
        if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
            return CellKind::Boolean;
        }
        if Self::is_numeric(trimmed) {
            return CellKind::Numeric;
        }
        if ISO_DATE_RE.is_match(trimmed) || SLASH_DATE_RE.is_match(trimmed) {
            return CellKind::Date;
        }
        CellKind::Text
    }

    fn is_numeric(value: &str) -> bool {
        value.parse::<f64>().is_ok()
            || value.parse::<i64>().is_ok()
            || value.replace(',', "").parse::<f64>().is_ok()
    }
}

/// Tabular input as read from a spreadsheet-like source. `None` cells
/// are missing values; rows may be shorter than the header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.rows.is_empty()
    }

    /// Present, non-null cell value at (row, column).
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(column)
            .and_then(|cell| cell.as_deref())
    }

    /// Iterate the present values of one column, skipping missing cells.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).and_then(|cell| cell.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_kind_classification() {
        assert_eq!(CellKind::of(""), CellKind::Empty);
        assert_eq!(CellKind::of("   "), CellKind::Empty);
        assert_eq!(CellKind::of("true"), CellKind::Boolean);
        assert_eq!(CellKind::of("FALSE"), CellKind::Boolean);
        assert_eq!(CellKind::of("42"), CellKind::Numeric);
        assert_eq!(CellKind::of("-3.5"), CellKind::Numeric);
        assert_eq!(CellKind::of("1,200"), CellKind::Numeric);
        assert_eq!(CellKind::of("2024-01-15"), CellKind::Date);
        assert_eq!(CellKind::of("3/14/2024"), CellKind::Date);
        assert_eq!(CellKind::of("Great product!"), CellKind::Text);
    }

    #[test]
    fn test_cell_access_out_of_range() {
        let table = RawTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Some("x".to_string())]],
        );
        assert_eq!(table.cell(0, 0), Some("x"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
    }

    #[test]
    fn test_column_values_skips_missing() {
        let table = RawTable::new(
            vec!["a".to_string()],
            vec![
                vec![Some("x".to_string())],
                vec![None],
                vec![Some("y".to_string())],
            ],
        );
        let values: Vec<&str> = table.column_values(0).collect();
        assert_eq!(values, vec!["x", "y"]);
    }
}
