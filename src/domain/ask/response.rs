use serde::{Deserialize, Serialize};

/// Confidence reported for answers served from the similarity cache
pub const CACHE_HIT_CONFIDENCE: f64 = 0.95;

/// Where an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Cache,
    Model,
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cache => write!(f, "cache"),
            Self::Model => write!(f, "model"),
        }
    }
}

/// Result of a single answer request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Normalized answer text
    pub text: String,
    /// Seconds, rounded to milliseconds
    pub latency: f64,
    pub tokens_estimated: u32,
    pub estimated_cost: f64,
    pub source: AnswerSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl ModelResponse {
    /// Answer served from the similarity cache
    pub fn from_cache(text: impl Into<String>, latency: f64, tokens_estimated: u32) -> Self {
        Self {
            text: text.into(),
            latency,
            tokens_estimated,
            estimated_cost: 0.0,
            source: AnswerSource::Cache,
            confidence: Some(CACHE_HIT_CONFIDENCE),
        }
    }

    /// Answer produced by a fresh model call
    pub fn from_model(
        text: impl Into<String>,
        latency: f64,
        tokens_estimated: u32,
        estimated_cost: f64,
    ) -> Self {
        Self {
            text: text.into(),
            latency,
            tokens_estimated,
            estimated_cost,
            source: AnswerSource::Model,
            confidence: None,
        }
    }
}
