use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::{InMemoryVectorIndex, RemoteVectorIndex};
use crate::config::{VectorIndexBackend, VectorIndexConfig};
use crate::domain::similarity_cache::QUESTION_METADATA_KEY;
use crate::domain::{DomainError, TextEmbedder, VectorIndex};
use crate::infrastructure::embedding::HashingEmbedder;
use crate::infrastructure::llm::HttpClient;

/// Factory for creating vector index backends
#[derive(Debug)]
pub struct VectorIndexFactory;

impl VectorIndexFactory {
    /// Create the configured vector index
    pub fn create(config: &VectorIndexConfig) -> Result<Arc<dyn VectorIndex>, DomainError> {
        match config.backend {
            VectorIndexBackend::InMemory => {
                let embedder = Arc::new(HashingEmbedder::new(config.dimensions));
                info!(dimensions = embedder.dimensions(), "Using in-memory vector index");

                Ok(Arc::new(
                    InMemoryVectorIndex::new(embedder).with_search_field(QUESTION_METADATA_KEY),
                ))
            }
            VectorIndexBackend::Remote => {
                if config.base_url.trim().is_empty() {
                    return Err(DomainError::configuration(
                        "vector_index.base_url is required for the remote backend",
                    ));
                }
                if config.timeout_secs == 0 {
                    return Err(DomainError::configuration(
                        "vector_index.timeout_secs must be positive",
                    ));
                }

                info!(
                    base_url = %config.base_url,
                    collection = %config.collection,
                    "Using remote vector index"
                );
                let client = HttpClient::with_timeout(
                    "vector_index",
                    Duration::from_secs(config.timeout_secs),
                )?;

                Ok(Arc::new(RemoteVectorIndex::new(
                    client,
                    &config.base_url,
                    &config.collection,
                )))
            }
        }
    }
}
