//! Vector index trait and wire types

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Per-document metadata attached on add
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Batch upsert of documents into the index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddRequest {
    pub documents: Vec<String>,
    pub metadatas: Vec<Metadata>,
    pub ids: Vec<String>,
}

impl AddRequest {
    /// Create a request holding a single document
    pub fn single(id: impl Into<String>, document: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            documents: vec![document.into()],
            metadatas: vec![metadata],
            ids: vec![id.into()],
        }
    }

    /// Ensure the three parallel arrays line up
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.documents.len() != self.ids.len() || self.metadatas.len() != self.ids.len() {
            return Err(DomainError::validation(format!(
                "Mismatched add batch: {} ids, {} documents, {} metadatas",
                self.ids.len(),
                self.documents.len(),
                self.metadatas.len()
            )));
        }

        Ok(())
    }
}

/// Nearest-neighbour query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query_texts: Vec<String>,
    pub n_results: usize,
}

impl QueryRequest {
    /// Query a single text for its `n_results` nearest documents
    pub fn single(text: impl Into<String>, n_results: usize) -> Self {
        Self {
            query_texts: vec![text.into()],
            n_results,
        }
    }
}

/// Query result: one inner list per query text, nearest first
///
/// Both arrays are optional because remote indexes omit them on
/// empty collections or when not asked to include them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub documents: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub distances: Option<Vec<Vec<f32>>>,
}

impl QueryResponse {
    /// Nearest document and its distance for the first query text.
    ///
    /// Returns `None` when either array is missing or empty.
    pub fn nearest(&self) -> Option<(&str, f32)> {
        let document = self.documents.as_ref()?.first()?.first()?;
        let distance = *self.distances.as_ref()?.first()?.first()?;

        Some((document.as_str(), distance))
    }
}

/// Trait for vector index backends
#[async_trait]
pub trait VectorIndex: Send + Sync + Debug {
    /// Upsert documents; an existing id is overwritten
    async fn add(&self, request: AddRequest) -> Result<(), DomainError>;

    /// Nearest-neighbour search
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, DomainError>;

    /// Backend name, used in logs and errors
    fn backend_name(&self) -> &'static str;
}
