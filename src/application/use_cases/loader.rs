// ============================================================
// REVIEW LOADER
// ============================================================
// Normalize arbitrary tabular input into a record set

use crate::domain::record::ReviewRecord;
use crate::domain::table::{CellKind, RawTable};
use std::path::Path;
use tracing::{info, warn};

/// Likely review-bearing column names, checked case-insensitively and
/// in this order.
pub const TEXT_COLUMN_PRIORITY: [&str; 6] =
    ["review", "reviews", "feedback", "comment", "comments", "text"];

/// Placeholder stored for missing/null cells so row count is preserved.
pub const MISSING_VALUE: &str = "missing";

/// How many values per column the type-inference fallback samples.
const TYPE_SAMPLE_SIZE: usize = 20;

/// Pick the review-bearing column. Policy, first match wins:
/// a priority-name match, then the first text-typed column, then the
/// first column unconditionally. `None` only when there are no columns.
pub fn select_text_column(table: &RawTable) -> Option<usize> {
    if table.headers.is_empty() {
        return None;
    }

    for candidate in TEXT_COLUMN_PRIORITY {
        if let Some(index) = table
            .headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(candidate))
        {
            return Some(index);
        }
    }

    for column in 0..table.column_count() {
        if column_is_text(table, column) {
            return Some(column);
        }
    }

    Some(0)
}

/// A column is text-typed when it has at least one non-empty value and
/// every sampled non-empty value classifies as text.
fn column_is_text(table: &RawTable, column: usize) -> bool {
    let mut saw_text = false;
    for value in table.column_values(column).take(TYPE_SAMPLE_SIZE) {
        match CellKind::of(value) {
            CellKind::Text => saw_text = true,
            CellKind::Empty => {}
            _ => return false,
        }
    }
    saw_text
}

/// Turns raw tables into record sets. Structural failures are absorbed
/// into an empty record set; callers check cardinality.
pub struct ReviewLoader;

impl ReviewLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and normalize a spreadsheet-like file. Unreadable input
    /// yields an empty record set.
    pub fn load_path(&self, path: &Path) -> Vec<ReviewRecord> {
        match crate::infrastructure::tabular::read_table(path) {
            Ok(table) => self.load(&table),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read input table");
                Vec::new()
            }
        }
    }

    /// Normalize a raw table into a record set. Ids are assigned in
    /// input order starting at 1.
    pub fn load(&self, table: &RawTable) -> Vec<ReviewRecord> {
        if table.is_empty() {
            warn!("Input table is empty, producing empty record set");
            return Vec::new();
        }

        let column = match select_text_column(table) {
            Some(column) => column,
            None => {
                warn!("Input table has no columns, producing empty record set");
                return Vec::new();
            }
        };

        let records: Vec<ReviewRecord> = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let text = match row.get(column) {
                    Some(Some(value)) => value.clone(),
                    _ => MISSING_VALUE.to_string(),
                };
                ReviewRecord::new(index + 1, text)
            })
            .collect();

        info!(
            records = records.len(),
            column = %table.headers[column],
            "Loaded record set"
        );

        records
    }
}

impl Default for ReviewLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: Vec<Vec<Option<&str>>>) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.into_iter()
                .map(|row| row.into_iter().map(|c| c.map(|v| v.to_string())).collect())
                .collect(),
        )
    }

    #[test]
    fn test_priority_name_wins_over_position() {
        let input = table(
            &["score", "Review"],
            vec![vec![Some("5"), Some("Great product!")]],
        );
        assert_eq!(select_text_column(&input), Some(1));
    }

    #[test]
    fn test_priority_order_is_respected() {
        let input = table(
            &["text", "feedback"],
            vec![vec![Some("a"), Some("b")]],
        );
        // "feedback" outranks "text" in the priority list
        assert_eq!(select_text_column(&input), Some(1));
    }

    #[test]
    fn test_type_inference_fallback() {
        let input = table(
            &["score", "opinion"],
            vec![
                vec![Some("5"), Some("Loved it")],
                vec![Some("2"), Some("Hated it")],
            ],
        );
        assert_eq!(select_text_column(&input), Some(1));
    }

    #[test]
    fn test_first_column_unconditional_fallback() {
        let input = table(
            &["a", "b"],
            vec![vec![Some("1"), Some("2024-01-01")]],
        );
        assert_eq!(select_text_column(&input), Some(0));
    }

    #[test]
    fn test_no_columns() {
        let input = RawTable::default();
        assert_eq!(select_text_column(&input), None);
    }

    #[test]
    fn test_missing_cells_become_placeholder() {
        let input = table(
            &["review"],
            vec![vec![Some("Great!")], vec![None], vec![Some("")]],
        );
        let records = ReviewLoader::new().load(&input);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].original_text, "Great!");
        assert_eq!(records[1].original_text, MISSING_VALUE);
        assert_eq!(records[2].original_text, "");
        assert_eq!(
            records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_empty_table_yields_empty_record_set() {
        let records = ReviewLoader::new().load(&RawTable::default());
        assert!(records.is_empty());
    }

    #[test]
    fn test_unreadable_path_yields_empty_record_set() {
        let records = ReviewLoader::new().load_path(Path::new("/nonexistent/reviews.csv"));
        assert!(records.is_empty());
    }
}
