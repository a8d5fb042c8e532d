use std::sync::Arc;
use std::time::Duration;

use super::http_client::HttpClient;
use super::ollama::OllamaBackend;
use crate::config::LlmConfig;
use crate::domain::{DomainError, ModelBackend};

/// Factory for creating model backends
#[derive(Debug)]
pub struct ModelBackendFactory;

impl ModelBackendFactory {
    /// Create the configured model backend
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn ModelBackend>, DomainError> {
        if config.base_url.trim().is_empty() {
            return Err(DomainError::configuration("llm.base_url must not be empty"));
        }
        if config.timeout_secs == 0 {
            return Err(DomainError::configuration("llm.timeout_secs must be positive"));
        }

        let client = HttpClient::with_timeout("ollama", Duration::from_secs(config.timeout_secs))?;

        Ok(Arc::new(OllamaBackend::with_base_url(
            client,
            &config.base_url,
        )))
    }
}
