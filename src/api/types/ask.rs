use serde::{Deserialize, Serialize};

use crate::domain::{AnswerSource, ModelResponse};

/// POST /ask body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// POST /ask reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub source: AnswerSource,
    pub metrics: AskMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskMetrics {
    /// Seconds
    pub latency: f64,
    pub tokens: u32,
    pub estimated_cost: f64,
}

impl From<ModelResponse> for AskResponse {
    fn from(response: ModelResponse) -> Self {
        Self {
            answer: response.text,
            confidence: response.confidence,
            source: response.source,
            metrics: AskMetrics {
                latency: response.latency,
                tokens: response.tokens_estimated,
                estimated_cost: response.estimated_cost,
            },
        }
    }
}
