pub mod google_web;

use crate::domain::error::Result;
use async_trait::async_trait;
pub use google_web::GoogleWebTranslator;

/// Black-box translation backend. Calls may fail with any transient
/// error; the pipeline absorbs failures per record.
#[async_trait]
pub trait TranslationBackend {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}
