//! Infrastructure services

mod ask_service;
mod similarity_cache_service;

pub use ask_service::{AskService, AskServiceTrait};
pub use similarity_cache_service::SimilarityCacheService;
