// ============================================================
// CSV TABLES
// ============================================================
// Read spreadsheet-style CSV into raw tables and write annotated
// record sets back out in the same shape

use crate::domain::error::{AppError, Result};
use crate::domain::record::{ReviewRecord, SentimentLabel};
use crate::domain::table::RawTable;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::path::Path;
use tracing::debug;

/// Column order used when persisting an annotated record set.
pub const RECORD_HEADERS: [&str; 7] = [
    "id",
    "original_text",
    "working_text",
    "language",
    "is_english",
    "sentiment_score",
    "sentiment_label",
];

/// CSV reader with delimiter and encoding detection.
pub struct CsvTableReader {
    delimiter: u8,
    trim: bool,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read a CSV file into a raw table, detecting encoding first.
    pub fn read_file(&self, path: &Path) -> Result<RawTable> {
        let content = read_with_encoding_detection(path)?;
        self.read_content(&content)
    }

    /// Parse CSV content from a string.
    pub fn read_content(&self, content: &str) -> Result<RawTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            let row: Vec<Option<String>> = (0..headers.len())
                .map(|i| record.get(i).map(|v| v.to_string()))
                .collect();
            rows.push(row);
        }

        Ok(RawTable::new(headers, rows))
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe),
    /// scored by per-line count consistency over a sample.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let sample_lines: Vec<_> = content.lines().take(10).collect();

            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Read a CSV file with automatic delimiter detection.
    pub fn read_file_auto_detect(path: &Path) -> Result<RawTable> {
        let sample = {
            use std::fs::File;
            use std::io::Read;

            let mut file = File::open(path)
                .map_err(|e| AppError::IoError(format!("Failed to open file: {}", e)))?;

            let mut buffer = vec![0u8; 4096];
            let read = file.read(&mut buffer).unwrap_or(0);
            String::from_utf8_lossy(&buffer[..read]).to_string()
        };

        let delimiter = Self::detect_delimiter(&sample);
        debug!(delimiter = %char::from(delimiter), "Detected CSV delimiter");

        Self::default().with_delimiter(delimiter).read_file(path)
    }
}

/// Decode file bytes as UTF-8, falling back to Windows-1252, then to
/// lossy UTF-8 as a last resort.
fn read_with_encoding_detection(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read file: {}", e)))?;

    if let Ok(content) = std::str::from_utf8(&bytes) {
        return Ok(content.to_string());
    }

    let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
    if !had_errors {
        return Ok(decoded.into_owned());
    }

    Ok(String::from_utf8_lossy(&bytes).to_string())
}

/// Write an annotated record set to CSV using the canonical column
/// schema, re-readable by `read_records`.
pub fn write_records(path: &Path, records: &[ReviewRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| AppError::IoError(format!("Failed to create file: {}", e)))?;

    writer
        .write_record(RECORD_HEADERS)
        .map_err(|e| AppError::IoError(format!("Failed to write headers: {}", e)))?;

    for record in records {
        writer
            .write_record(&[
                record.id.to_string(),
                record.original_text.clone(),
                record.working_text.clone(),
                record.language.clone(),
                record.is_english.to_string(),
                record.sentiment_score.to_string(),
                record
                    .sentiment_label
                    .map(|label| label.as_str().to_string())
                    .unwrap_or_default(),
            ])
            .map_err(|e| AppError::IoError(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::IoError(format!("Failed to flush file: {}", e)))?;

    Ok(())
}

/// Read an annotated record set previously written by `write_records`.
pub fn read_records(path: &Path) -> Result<Vec<ReviewRecord>> {
    let table = CsvTableReader::new().read_file(path)?;

    if table.headers != RECORD_HEADERS {
        return Err(AppError::ParseError(format!(
            "Unexpected record columns: {:?}",
            table.headers
        )));
    }

    let mut records = Vec::with_capacity(table.row_count());
    for (index, row) in table.rows.iter().enumerate() {
        let field = |column: usize| row.get(column).and_then(|c| c.as_deref()).unwrap_or("");

        let id = field(0).parse::<usize>().map_err(|e| {
            AppError::ParseError(format!("Bad id in row {}: {}", index + 1, e))
        })?;
        let sentiment_score = field(5).parse::<f64>().map_err(|e| {
            AppError::ParseError(format!("Bad score in row {}: {}", index + 1, e))
        })?;

        records.push(ReviewRecord {
            id,
            original_text: field(1).to_string(),
            working_text: field(2).to_string(),
            language: field(3).to_string(),
            is_english: field(4).eq_ignore_ascii_case("true"),
            sentiment_score,
            sentiment_label: SentimentLabel::parse(field(6)),
        });
    }

    Ok(records)
}
