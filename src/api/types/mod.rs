//! HTTP request and response types

pub mod ask;
pub mod error;
pub mod json;

pub use ask::{AskMetrics, AskRequest, AskResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
