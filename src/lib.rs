pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::pipeline::ReviewPipeline;
pub use application::use_cases::translation::TranslatorConfig;
pub use domain::error::{AppError, Result};
pub use domain::record::{ReviewRecord, SentimentLabel};
pub use domain::report::AggregateReport;
pub use domain::table::RawTable;

use infrastructure::langid::WhatlangModel;
use infrastructure::translation::GoogleWebTranslator;
use std::sync::Arc;

/// Pipeline wired with the in-process language model and the web
/// translation backend. Call `infrastructure::bootstrap::init` once
/// before the first batch.
pub fn default_pipeline() -> ReviewPipeline {
    ReviewPipeline::new(
        Arc::new(WhatlangModel::new()),
        Arc::new(GoogleWebTranslator::new()),
    )
}
