use super::TranslationBackend;
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by the public Google web endpoint. No API key;
/// the endpoint enforces informal quotas, so callers must throttle.
pub struct GoogleWebTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleWebTranslator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the translator at a different endpoint, used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The endpoint answers with nested arrays: the first element is a
    /// list of segments whose first item is the translated chunk.
    fn extract_translation(json: &Value) -> Option<String> {
        let segments = json.get(0)?.as_array()?;
        let mut out = String::new();
        for segment in segments {
            if let Some(chunk) = segment.get(0).and_then(Value::as_str) {
                out.push_str(chunk);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

impl Default for GoogleWebTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationBackend for GoogleWebTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AppError::TranslationError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::TranslationError(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AppError::TranslationError(format!("Failed to parse JSON: {}", e)))?;

        Self::extract_translation(&json)
            .ok_or_else(|| AppError::TranslationError("Invalid response format".to_string()))
    }
}
