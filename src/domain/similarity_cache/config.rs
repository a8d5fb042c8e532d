//! Similarity cache configuration

use serde::{Deserialize, Serialize};

/// Configuration for the similarity cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityCacheConfig {
    /// Whether lookups and stores are performed at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum distance for a hit; strictly below counts, lower is more similar
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
}

fn default_enabled() -> bool {
    true
}

fn default_similarity_threshold() -> f32 {
    0.15
}

impl Default for SimilarityCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl SimilarityCacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the distance threshold; negative and NaN values become zero
    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold.max(0.0);
        self
    }
}
