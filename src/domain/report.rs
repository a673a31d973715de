// ============================================================
// AGGREGATE REPORT TYPES
// ============================================================
// Chart-ready summary structures derived from an annotated record set

use super::record::SentimentLabel;
use serde::{Deserialize, Serialize};

pub const POSITIVE_COLOR: &str = "#4CAF50";
pub const NEGATIVE_COLOR: &str = "#F44336";
pub const NEUTRAL_COLOR: &str = "#9E9E9E";
pub const ENGLISH_COLOR: &str = "#2196F3";
pub const NON_ENGLISH_COLOR: &str = "#FF9800";
pub const HISTOGRAM_COLOR: &str = "#673AB7";

/// Number of equal-width histogram bins over the observed score range.
pub const HISTOGRAM_BINS: usize = 20;

/// Human-readable category for the `is_english` flag.
pub fn language_category(is_english: bool) -> &'static str {
    if is_english {
        "English"
    } else {
        "Non-English"
    }
}

pub fn label_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => POSITIVE_COLOR,
        SentimentLabel::Negative => NEGATIVE_COLOR,
        SentimentLabel::Neutral => NEUTRAL_COLOR,
    }
}

/// Scalar summary counts over one batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalarCounts {
    pub total: usize,
    pub english: usize,
    pub non_english: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl ScalarCounts {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Batch summary ({} records):\n\
             - English: {} / Non-English: {}\n\
             - Positive: {}\n\
             - Negative: {}\n\
             - Neutral: {}",
            self.total, self.english, self.non_english, self.positive, self.negative, self.neutral
        )
    }
}

/// One slice of a categorical chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub value: usize,
    pub color: String,
}

/// A named categorical chart dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartTable {
    pub title: String,
    pub rows: Vec<ChartRow>,
}

/// One equal-width bucket of the score histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Sentiment score distribution over the observed range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreHistogram {
    pub title: String,
    pub color: String,
    pub bins: Vec<HistogramBin>,
}

/// One (language category, sentiment label) cell of the cross-tabulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosstabCell {
    pub language_category: String,
    pub sentiment_label: SentimentLabel,
    pub count: usize,
}

/// Language against sentiment cross-tabulation; only combinations that
/// occur at least once are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosstabTable {
    pub title: String,
    pub cells: Vec<CrosstabCell>,
}

/// Everything the aggregation stage produces for one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    pub counts: ScalarCounts,
    pub sentiment_distribution: ChartTable,
    pub language_distribution: ChartTable,
    pub score_histogram: ScoreHistogram,
    pub language_sentiment: CrosstabTable,
}
