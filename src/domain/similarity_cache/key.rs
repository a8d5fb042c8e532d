//! Cache record identifiers

use sha2::{Digest, Sha256};

/// Deterministic record id for a question.
///
/// The raw question bytes are hashed as-is: no case folding or whitespace
/// collapsing, so "What is RAG?" and "what is rag?" get different ids.
pub fn record_id(question: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(question.as_bytes());
    hex::encode(hasher.finalize())
}
