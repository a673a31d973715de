// ============================================================
// REVIEW RECORD TYPES
// ============================================================
// One review per input row, plus the annotations the pipeline adds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score above which a record is labeled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Score below which a record is labeled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Discrete sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Derive the label from a polarity score. Fixed policy: scores
    /// within [-0.1, 0.1] inclusive are neutral.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "positive" => Some(SentimentLabel::Positive),
            "negative" => Some(SentimentLabel::Negative),
            "neutral" => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single review and its derived annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Unique identifier, assigned in input order starting at 1.
    pub id: usize,

    /// Untouched source text, immutable after loading.
    pub original_text: String,

    /// Text the sentiment stage scores: original if English, translated
    /// otherwise.
    pub working_text: String,

    /// Detected language code (ISO-639-1 where available), empty until
    /// the detection stage runs.
    pub language: String,

    /// Derived exclusively from `language`.
    pub is_english: bool,

    /// Polarity score in [-1.0, 1.0], zero until scored.
    pub sentiment_score: f64,

    /// Discrete sentiment class, unset until scored.
    pub sentiment_label: Option<SentimentLabel>,
}

impl ReviewRecord {
    /// Create a fresh record straight out of the loader.
    pub fn new(id: usize, original_text: String) -> Self {
        let working_text = original_text.clone();
        Self {
            id,
            original_text,
            working_text,
            language: String::new(),
            is_english: false,
            sentiment_score: 0.0,
            sentiment_label: None,
        }
    }

    /// Whether the source text carries anything worth analyzing.
    pub fn has_content(&self) -> bool {
        !self.original_text.trim().is_empty()
    }
}
