// ============================================================
// REVIEW PIPELINE
// ============================================================
// Fixed stage order: load, detect, translate, score

use crate::application::use_cases::aggregation::ReportAggregator;
use crate::application::use_cases::language_detection::LanguageDetector;
use crate::application::use_cases::loader::ReviewLoader;
use crate::application::use_cases::sentiment::SentimentScorer;
use crate::application::use_cases::translation::{ReviewTranslator, TranslatorConfig};
use crate::domain::record::ReviewRecord;
use crate::domain::report::AggregateReport;
use crate::domain::table::RawTable;
use crate::infrastructure::langid::LanguageModel;
use crate::infrastructure::translation::TranslationBackend;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct ReviewPipeline {
    loader: ReviewLoader,
    detector: LanguageDetector,
    translator: ReviewTranslator,
    scorer: SentimentScorer,
    aggregator: ReportAggregator,
}

impl ReviewPipeline {
    pub fn new(
        model: Arc<dyn LanguageModel + Send + Sync>,
        backend: Arc<dyn TranslationBackend + Send + Sync>,
    ) -> Self {
        Self::with_translator_config(model, backend, TranslatorConfig::default())
    }

    pub fn with_translator_config(
        model: Arc<dyn LanguageModel + Send + Sync>,
        backend: Arc<dyn TranslationBackend + Send + Sync>,
        config: TranslatorConfig,
    ) -> Self {
        Self {
            loader: ReviewLoader::new(),
            detector: LanguageDetector::new(model),
            translator: ReviewTranslator::with_config(backend, config),
            scorer: SentimentScorer::new(),
            aggregator: ReportAggregator::new(),
        }
    }

    /// Run every enrichment stage over a raw table. Always yields one
    /// record per input row, fully annotated, in input order. Stage
    /// failures degrade individual records instead of aborting.
    pub async fn process(&self, table: &RawTable) -> Vec<ReviewRecord> {
        let records = self.loader.load(table);
        self.enrich(records).await
    }

    /// Same as `process`, reading the table from a file first.
    pub async fn process_file(&self, path: &Path) -> Vec<ReviewRecord> {
        let records = self.loader.load_path(path);
        self.enrich(records).await
    }

    async fn enrich(&self, records: Vec<ReviewRecord>) -> Vec<ReviewRecord> {
        if records.is_empty() {
            info!("No records to process");
            return records;
        }

        let records = self.detector.run(records);
        let records = self.translator.run(records).await;
        let records = self.scorer.run(records);

        info!(records = records.len(), "Pipeline complete");
        records
    }

    /// Derive counts and chart tables from an already-processed record
    /// set. Pure with respect to the records, callable any number of
    /// times.
    pub fn aggregate(&self, records: &[ReviewRecord]) -> AggregateReport {
        self.aggregator.aggregate(records)
    }
}
