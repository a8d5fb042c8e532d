//! Token, cost and latency estimation

mod estimate;
mod pricing;

pub use estimate::{estimate_tokens, round_latency, WORDS_PER_TOKEN};
pub use pricing::CostModel;
