pub mod use_cases;

pub use use_cases::aggregation::ReportAggregator;
pub use use_cases::language_detection::LanguageDetector;
pub use use_cases::loader::ReviewLoader;
pub use use_cases::pipeline::ReviewPipeline;
pub use use_cases::sentiment::SentimentScorer;
pub use use_cases::translation::{ReviewTranslator, TranslatorConfig};
