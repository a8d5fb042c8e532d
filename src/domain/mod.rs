//! Domain layer - Core business logic and entities

pub mod answer;
pub mod ask;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod similarity_cache;
pub mod usage;
pub mod vector_index;

pub use answer::{normalize, AnswerStrategy};
pub use ask::{AnswerSource, ModelResponse, CACHE_HIT_CONFIDENCE};
pub use embedding::{cosine_distance, cosine_similarity, TextEmbedder};
pub use error::DomainError;
pub use llm::{GenerateRequest, GenerateResponse, ModelBackend};
pub use prompt::PromptTemplate;
pub use similarity_cache::{
    record_id, QueryRecord, SimilarityCacheConfig, SimilarityCacheStats, SimilarityResult,
};
pub use usage::{estimate_tokens, round_latency, CostModel};
pub use vector_index::{AddRequest, Metadata, QueryRequest, QueryResponse, VectorIndex};
