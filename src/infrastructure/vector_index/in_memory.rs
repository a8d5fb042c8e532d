//! In-memory vector index implementation

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::vector_index::{AddRequest, Metadata, QueryRequest, QueryResponse, VectorIndex};
use crate::domain::{cosine_distance, DomainError, TextEmbedder};

#[derive(Debug, Clone)]
struct IndexedDocument {
    document: String,
    embedding: Vec<f32>,
}

/// In-memory vector index using linear search and cosine distance
///
/// Suitable for development and single-process deployments. Entries live
/// for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryVectorIndex {
    embedder: Arc<dyn TextEmbedder>,
    entries: RwLock<HashMap<String, IndexedDocument>>,
    search_field: Option<String>,
}

impl InMemoryVectorIndex {
    /// Create an index that matches queries against document text
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            embedder,
            entries: RwLock::new(HashMap::new()),
            search_field: None,
        }
    }

    /// Match queries against a string metadata field instead of the document.
    ///
    /// Documents without that field fall back to their own text.
    pub fn with_search_field(mut self, field: impl Into<String>) -> Self {
        self.search_field = Some(field.into());
        self
    }

    /// Number of stored documents
    pub fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }

    fn searchable_text<'a>(&self, document: &'a str, metadata: &'a Metadata) -> &'a str {
        self.search_field
            .as_deref()
            .and_then(|field| metadata.get(field))
            .and_then(|value| value.as_str())
            .unwrap_or(document)
    }

    fn nearest(
        entries: &HashMap<String, IndexedDocument>,
        embedding: &[f32],
        limit: usize,
    ) -> (Vec<String>, Vec<f32>) {
        let mut scored: Vec<(&IndexedDocument, f32)> = entries
            .values()
            .map(|entry| (entry, cosine_distance(embedding, &entry.embedding)))
            .collect();

        // Sort by distance ascending
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(entry, distance)| (entry.document.clone(), distance))
            .unzip()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn add(&self, request: AddRequest) -> Result<(), DomainError> {
        request.validate()?;

        let indexed: Vec<(String, IndexedDocument)> = request
            .ids
            .into_iter()
            .zip(request.documents)
            .zip(request.metadatas)
            .map(|((id, document), metadata)| {
                let embedding = self.embedder.embed(self.searchable_text(&document, &metadata));
                (
                    id,
                    IndexedDocument {
                        document,
                        embedding,
                    },
                )
            })
            .collect();

        let mut entries = self.entries.write().map_err(|e| {
            DomainError::internal(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.extend(indexed);

        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire read lock: {}", e))
        })?;

        let (documents, distances): (Vec<Vec<String>>, Vec<Vec<f32>>) = request
            .query_texts
            .iter()
            .map(|text| Self::nearest(&entries, &self.embedder.embed(text), request.n_results))
            .unzip();

        Ok(QueryResponse {
            documents: Some(documents),
            distances: Some(distances),
        })
    }

    fn backend_name(&self) -> &'static str {
        "in_memory"
    }
}
