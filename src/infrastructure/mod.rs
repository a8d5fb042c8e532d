//! Infrastructure layer - External service implementations

pub mod embedding;
pub mod llm;
pub mod logging;
pub mod services;
pub mod vector_index;
