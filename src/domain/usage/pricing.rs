//! Flat per-token pricing

use serde::{Deserialize, Serialize};

/// Flat price per 1K tokens; zero for local models
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    #[serde(default)]
    pub cost_per_1k_tokens: f64,
}

impl CostModel {
    pub fn new(cost_per_1k_tokens: f64) -> Self {
        Self {
            cost_per_1k_tokens: cost_per_1k_tokens.max(0.0),
        }
    }

    /// Pricing for a model served locally
    pub fn free() -> Self {
        Self::default()
    }

    /// Estimated cost in USD, rounded to micro-dollars
    pub fn estimate_cost(&self, tokens: u32) -> f64 {
        let cost = tokens as f64 / 1000.0 * self.cost_per_1k_tokens;
        (cost * 1_000_000.0).round() / 1_000_000.0
    }
}
