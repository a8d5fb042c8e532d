//! Answer request domain types

mod response;

pub use response::{AnswerSource, ModelResponse, CACHE_HIT_CONFIDENCE};
