use async_trait::async_trait;
use std::fmt::Debug;

use super::{GenerateRequest, GenerateResponse};
use crate::domain::DomainError;

/// Trait for text generation backends (Ollama and compatible servers)
#[async_trait]
pub trait ModelBackend: Send + Sync + Debug {
    /// Generate a completion for the prompt. Not retried on failure.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, DomainError>;

    /// Get the backend name
    fn backend_name(&self) -> &'static str;
}
