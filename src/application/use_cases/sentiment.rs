// ============================================================
// SENTIMENT STAGE
// ============================================================
// Lexicon-based polarity scoring over the working text

use crate::domain::record::{ReviewRecord, SentimentLabel};
use once_cell::sync::Lazy;
use tracing::info;
use vader_sentiment::SentimentIntensityAnalyzer;

static ANALYZER: Lazy<SentimentIntensityAnalyzer<'static>> =
    Lazy::new(SentimentIntensityAnalyzer::new);

/// Force lexicon loading ahead of the first batch.
pub fn warm_up() {
    Lazy::force(&ANALYZER);
}

/// Compound polarity in [-1.0, 1.0] for one piece of text.
fn polarity(text: &str) -> f64 {
    ANALYZER
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
}

pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score every record's working text. Degenerate text scores
    /// exactly 0.0 and is labeled neutral; the label is always derived
    /// from the score, never set independently.
    pub fn run(&self, records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
        let records: Vec<ReviewRecord> = records
            .into_iter()
            .map(|mut record| {
                let score = if record.working_text.trim().is_empty() {
                    0.0
                } else {
                    polarity(&record.working_text)
                };
                record.sentiment_score = score;
                record.sentiment_label = Some(SentimentLabel::from_score(score));
                record
            })
            .collect();

        info!(scored = records.len(), "Sentiment scoring complete");
        records
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
