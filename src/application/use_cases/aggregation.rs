// ============================================================
// AGGREGATION STAGE
// ============================================================
// Scalar counts and chart-ready tables from an annotated record set

use crate::domain::record::{ReviewRecord, SentimentLabel};
use crate::domain::report::{
    label_color, language_category, AggregateReport, ChartRow, ChartTable, CrosstabCell,
    CrosstabTable, HistogramBin, ScalarCounts, ScoreHistogram, ENGLISH_COLOR, HISTOGRAM_BINS,
    HISTOGRAM_COLOR, NON_ENGLISH_COLOR,
};
use std::collections::BTreeMap;
use tracing::info;

const LABELS: [SentimentLabel; 3] = [
    SentimentLabel::Positive,
    SentimentLabel::Negative,
    SentimentLabel::Neutral,
];

pub struct ReportAggregator;

impl ReportAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full report from current field values only. Records
    /// with an unset label are excluded from per-label counts rather
    /// than failing the batch.
    pub fn aggregate(&self, records: &[ReviewRecord]) -> AggregateReport {
        let counts = self.scalar_counts(records);
        info!("{}", counts.summary());

        AggregateReport {
            sentiment_distribution: self.sentiment_distribution(&counts),
            language_distribution: self.language_distribution(&counts),
            score_histogram: self.score_histogram(records),
            language_sentiment: self.language_sentiment(records),
            counts,
        }
    }

    fn scalar_counts(&self, records: &[ReviewRecord]) -> ScalarCounts {
        let mut counts = ScalarCounts {
            total: records.len(),
            ..Default::default()
        };

        for record in records {
            if record.is_english {
                counts.english += 1;
            } else {
                counts.non_english += 1;
            }
            match record.sentiment_label {
                Some(SentimentLabel::Positive) => counts.positive += 1,
                Some(SentimentLabel::Negative) => counts.negative += 1,
                Some(SentimentLabel::Neutral) => counts.neutral += 1,
                None => {}
            }
        }

        counts
    }

    fn sentiment_distribution(&self, counts: &ScalarCounts) -> ChartTable {
        let value = |label: SentimentLabel| match label {
            SentimentLabel::Positive => counts.positive,
            SentimentLabel::Negative => counts.negative,
            SentimentLabel::Neutral => counts.neutral,
        };

        ChartTable {
            title: "Sentiment Distribution".to_string(),
            rows: LABELS
                .iter()
                .map(|&label| ChartRow {
                    label: label.as_str().to_string(),
                    value: value(label),
                    color: label_color(label).to_string(),
                })
                .collect(),
        }
    }

    fn language_distribution(&self, counts: &ScalarCounts) -> ChartTable {
        ChartTable {
            title: "Language Distribution".to_string(),
            rows: vec![
                ChartRow {
                    label: language_category(true).to_string(),
                    value: counts.english,
                    color: ENGLISH_COLOR.to_string(),
                },
                ChartRow {
                    label: language_category(false).to_string(),
                    value: counts.non_english,
                    color: NON_ENGLISH_COLOR.to_string(),
                },
            ],
        }
    }

    /// Equal-width bins over the observed score range. A degenerate
    /// range (all scores equal) collapses to a single bin.
    fn score_histogram(&self, records: &[ReviewRecord]) -> ScoreHistogram {
        let title = "Sentiment Score Distribution".to_string();
        let color = HISTOGRAM_COLOR.to_string();

        if records.is_empty() {
            return ScoreHistogram {
                title,
                color,
                bins: Vec::new(),
            };
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in records {
            min = min.min(record.sentiment_score);
            max = max.max(record.sentiment_score);
        }

        if max == min {
            return ScoreHistogram {
                title,
                color,
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: records.len(),
                }],
            };
        }

        let width = (max - min) / HISTOGRAM_BINS as f64;
        let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
            .map(|i| HistogramBin {
                lower: min + width * i as f64,
                upper: min + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for record in records {
            let index = ((record.sentiment_score - min) / width) as usize;
            let index = index.min(HISTOGRAM_BINS - 1);
            bins[index].count += 1;
        }

        ScoreHistogram { title, color, bins }
    }

    /// Only combinations that occur at least once are emitted, in
    /// deterministic key order.
    fn language_sentiment(&self, records: &[ReviewRecord]) -> CrosstabTable {
        let mut cells: BTreeMap<(&'static str, SentimentLabel), usize> = BTreeMap::new();

        for record in records {
            if let Some(label) = record.sentiment_label {
                *cells
                    .entry((language_category(record.is_english), label))
                    .or_insert(0) += 1;
            }
        }

        CrosstabTable {
            title: "Sentiment by Language".to_string(),
            cells: cells
                .into_iter()
                .map(|((category, label), count)| CrosstabCell {
                    language_category: category.to_string(),
                    sentiment_label: label,
                    count,
                })
                .collect(),
        }
    }
}

impl Default for ReportAggregator {
    fn default() -> Self {
        Self::new()
    }
}
