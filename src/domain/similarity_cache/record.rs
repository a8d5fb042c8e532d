//! Similarity cache records

use serde::{Deserialize, Serialize};

use super::key::record_id;
use crate::domain::vector_index::{AddRequest, Metadata};

/// Metadata key under which the original question is stored
pub const QUESTION_METADATA_KEY: &str = "question";

/// A stored (question, answer) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    id: String,
    question: String,
    answer: String,
}

impl QueryRecord {
    /// Create a record; the id is derived from the question
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        let question = question.into();

        Self {
            id: record_id(&question),
            question,
            answer: answer.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Index upsert for this record: the answer is the document and the
    /// question travels as metadata
    pub fn to_add_request(&self) -> AddRequest {
        let mut metadata = Metadata::new();
        metadata.insert(
            QUESTION_METADATA_KEY.to_string(),
            serde_json::Value::String(self.question.clone()),
        );

        AddRequest::single(self.id.clone(), self.answer.clone(), metadata)
    }
}

/// Outcome of a successful similarity lookup
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    pub answer: String,
    pub distance: f32,
}

impl SimilarityResult {
    pub fn new(answer: impl Into<String>, distance: f32) -> Self {
        Self {
            answer: answer.into(),
            distance,
        }
    }
}

/// Counters for the similarity cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
}
