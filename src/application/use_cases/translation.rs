// ============================================================
// TRANSLATION STAGE
// ============================================================
// English renderings for non-English records, sequential with a fixed
// inter-call delay

use crate::domain::error::{AppError, Result};
use crate::domain::record::ReviewRecord;
use crate::infrastructure::translation::TranslationBackend;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Translation stage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Maximum characters submitted per call; longer text is truncated
    pub max_chars: usize,
    /// Fixed delay after each backend call, in milliseconds
    pub inter_call_delay_ms: u64,
    /// Language every record is translated into
    pub target_language: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_chars: 5000,
            inter_call_delay_ms: 200,
            target_language: "en".to_string(),
        }
    }
}

impl TranslatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(AppError::ValidationError(
                "max_chars must be greater than zero".to_string(),
            ));
        }
        if self.target_language.trim().is_empty() {
            return Err(AppError::ValidationError(
                "target_language must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Truncate to a character cap, respecting UTF-8 boundaries.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

pub struct ReviewTranslator {
    backend: Arc<dyn TranslationBackend + Send + Sync>,
    config: TranslatorConfig,
}

impl ReviewTranslator {
    pub fn new(backend: Arc<dyn TranslationBackend + Send + Sync>) -> Self {
        Self {
            backend,
            config: TranslatorConfig::default(),
        }
    }

    pub fn with_config(
        backend: Arc<dyn TranslationBackend + Send + Sync>,
        config: TranslatorConfig,
    ) -> Self {
        Self { backend, config }
    }

    /// Rewrite `working_text` with an English rendering for every
    /// non-English record. English records get `working_text`
    /// reasserted to `original_text`. A failed call leaves that one
    /// record untranslated and never aborts the batch.
    pub async fn run(&self, records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
        let mut translated = 0usize;
        let mut failed = 0usize;
        let mut out = Vec::with_capacity(records.len());

        for mut record in records {
            if record.is_english {
                record.working_text = record.original_text.clone();
                out.push(record);
                continue;
            }

            if !record.has_content() {
                out.push(record);
                continue;
            }

            let submitted = truncate_chars(&record.original_text, self.config.max_chars);

            match self
                .backend
                .translate(&submitted, &record.language, &self.config.target_language)
                .await
            {
                Ok(rendering) => {
                    record.working_text = rendering;
                    translated += 1;
                }
                Err(err) => {
                    warn!(
                        id = record.id,
                        language = %record.language,
                        error = %err,
                        "Translation failed, keeping original text"
                    );
                    failed += 1;
                }
            }

            if self.config.inter_call_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.inter_call_delay_ms)).await;
            }

            out.push(record);
        }

        info!(translated, failed, "Translation stage complete");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingBackend {
        submitted: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(text: &'static str) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_on: Some(text),
            }
        }
    }

    #[async_trait]
    impl TranslationBackend for RecordingBackend {
        async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
            self.submitted.lock().unwrap().push(text.to_string());
            if self.fail_on.is_some_and(|marker| text.contains(marker)) {
                return Err(AppError::TranslationError("backend down".to_string()));
            }
            Ok(format!("[en] {}", text))
        }
    }

    fn test_config() -> TranslatorConfig {
        TranslatorConfig {
            inter_call_delay_ms: 0,
            ..Default::default()
        }
    }

    fn non_english(id: usize, text: &str) -> ReviewRecord {
        let mut record = ReviewRecord::new(id, text.to_string());
        record.language = "es".to_string();
        record.is_english = false;
        record
    }

    #[test]
    fn test_config_validation() {
        assert!(TranslatorConfig::default().validate().is_ok());
        let bad = TranslatorConfig {
            max_chars: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 4), "é".repeat(4));
        assert_eq!(truncate_chars("short", 5000), "short");
    }

    #[tokio::test]
    async fn test_translates_non_english_only() {
        let backend = Arc::new(RecordingBackend::new());
        let translator = ReviewTranslator::with_config(backend.clone(), test_config());

        let mut english = ReviewRecord::new(1, "Great product!".to_string());
        english.language = "en".to_string();
        english.is_english = true;

        let out = translator
            .run(vec![english, non_english(2, "muy malo")])
            .await;

        assert_eq!(out[0].working_text, "Great product!");
        assert_eq!(out[1].working_text, "[en] muy malo");
        assert_eq!(backend.submitted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_long_input_is_truncated_before_submission() {
        let backend = Arc::new(RecordingBackend::new());
        let translator = ReviewTranslator::with_config(backend.clone(), test_config());

        let long_text = "a".repeat(6000);
        translator.run(vec![non_english(1, &long_text)]).await;

        let submitted = backend.submitted.lock().unwrap();
        assert_eq!(submitted[0].chars().count(), 5000);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_record() {
        let backend = Arc::new(RecordingBackend::failing_on("malo"));
        let translator = ReviewTranslator::with_config(backend, test_config());

        let out = translator
            .run(vec![non_english(1, "muy bueno"), non_english(2, "muy malo")])
            .await;

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].working_text, "[en] muy bueno");
        assert_eq!(out[1].working_text, "muy malo");
    }

    #[tokio::test]
    async fn test_degenerate_text_is_not_submitted() {
        let backend = Arc::new(RecordingBackend::new());
        let translator = ReviewTranslator::with_config(backend.clone(), test_config());

        translator.run(vec![non_english(1, "   ")]).await;
        assert!(backend.submitted.lock().unwrap().is_empty());
    }
}
