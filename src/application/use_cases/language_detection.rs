// ============================================================
// LANGUAGE DETECTION STAGE
// ============================================================

use crate::domain::record::ReviewRecord;
use crate::infrastructure::langid::LanguageModel;
use std::sync::Arc;
use tracing::{debug, info};

/// Language assigned when text is degenerate or the model has no
/// confident guess. Deliberate bias: ambiguous input is treated as
/// already-English rather than unknown.
pub const DEFAULT_LANGUAGE: &str = "en";

pub struct LanguageDetector {
    model: Arc<dyn LanguageModel + Send + Sync>,
}

impl LanguageDetector {
    pub fn new(model: Arc<dyn LanguageModel + Send + Sync>) -> Self {
        Self { model }
    }

    /// Annotate every record with a language code and the derived
    /// English flag. Never drops or reorders records.
    pub fn run(&self, records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
        let mut english = 0usize;

        let records: Vec<ReviewRecord> = records
            .into_iter()
            .map(|mut record| {
                let language = if record.has_content() {
                    match self.model.detect(&record.original_text) {
                        Ok(code) => code,
                        Err(err) => {
                            debug!(
                                id = record.id,
                                error = %err,
                                "Detection fell back to default language"
                            );
                            DEFAULT_LANGUAGE.to_string()
                        }
                    }
                } else {
                    DEFAULT_LANGUAGE.to_string()
                };

                record.is_english = language == DEFAULT_LANGUAGE;
                record.language = language;
                if record.is_english {
                    english += 1;
                }
                record
            })
            .collect();

        info!(
            english,
            non_english = records.len() - english,
            "Language detection complete"
        );

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{AppError, Result};

    struct FixedModel(&'static str);

    impl LanguageModel for FixedModel {
        fn detect(&self, _text: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    impl LanguageModel for FailingModel {
        fn detect(&self, _text: &str) -> Result<String> {
            Err(AppError::DetectionError("no candidate".to_string()))
        }
    }

    fn records(texts: &[&str]) -> Vec<ReviewRecord> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| ReviewRecord::new(i + 1, text.to_string()))
            .collect()
    }

    #[test]
    fn test_sets_language_and_flag() {
        let detector = LanguageDetector::new(Arc::new(FixedModel("es")));
        let annotated = detector.run(records(&["muy malo"]));

        assert_eq!(annotated[0].language, "es");
        assert!(!annotated[0].is_english);
    }

    #[test]
    fn test_degenerate_text_defaults_to_english() {
        let detector = LanguageDetector::new(Arc::new(FixedModel("es")));
        let annotated = detector.run(records(&["", "   "]));

        for record in &annotated {
            assert_eq!(record.language, "en");
            assert!(record.is_english);
        }
    }

    #[test]
    fn test_model_failure_defaults_to_english() {
        let detector = LanguageDetector::new(Arc::new(FailingModel));
        let annotated = detector.run(records(&["ok"]));

        assert_eq!(annotated[0].language, "en");
        assert!(annotated[0].is_english);
    }

    #[test]
    fn test_cardinality_and_order_preserved() {
        let detector = LanguageDetector::new(Arc::new(FixedModel("fr")));
        let annotated = detector.run(records(&["a", "b", "c"]));

        assert_eq!(
            annotated.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
