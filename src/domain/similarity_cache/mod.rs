//! Similarity cache domain models
//!
//! Prior (question, answer) pairs keyed by semantic proximity rather than
//! exact key equality.

mod config;
mod key;
mod record;

pub use config::SimilarityCacheConfig;
pub use key::record_id;
pub use record::{QueryRecord, SimilarityCacheStats, SimilarityResult, QUESTION_METADATA_KEY};
