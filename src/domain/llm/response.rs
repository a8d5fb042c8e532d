use serde::{Deserialize, Serialize};

/// Raw generation result from the model backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text, not yet normalized
    pub response: String,
    /// Tokens generated, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u32>,
}

impl GenerateResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            eval_count: None,
        }
    }

    pub fn with_eval_count(mut self, eval_count: u32) -> Self {
        self.eval_count = Some(eval_count);
        self
    }
}
