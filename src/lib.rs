//! QA Gateway
//!
//! Answers customer-support questions through a local model backend with:
//! - Normalization of fenced and JSON-wrapped model output
//! - A similarity cache over an in-memory or remote vector index
//! - Latency, token and cost estimates per answer

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{CostModel, PromptTemplate, SimilarityCacheConfig};
use infrastructure::{
    llm::ModelBackendFactory,
    services::{AskService, SimilarityCacheService},
    vector_index::VectorIndexFactory,
};
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend = ModelBackendFactory::create(&config.llm)?;
    let index = VectorIndexFactory::create(&config.vector_index)?;

    let cache_config = SimilarityCacheConfig::new()
        .with_enabled(config.cache.enabled)
        .with_similarity_threshold(config.cache.similarity_threshold);
    let cache = Arc::new(SimilarityCacheService::with_config(index, cache_config));

    let prompt = match config.llm.instructions {
        Some(ref instructions) => PromptTemplate::new(instructions.clone()),
        None => PromptTemplate::customer_support(),
    };

    let mut ask_service = AskService::new(backend, cache.clone(), &config.llm.model)
        .with_prompt(prompt)
        .with_cost_model(CostModel::new(config.llm.cost_per_1k_tokens));

    if let Some(ref options) = config.llm.options {
        ask_service = ask_service.with_options(options.clone());
    }

    info!(
        model = %config.llm.model,
        vector_index = ?config.vector_index.backend,
        cache_enabled = cache.is_enabled(),
        similarity_threshold = cache.config().similarity_threshold,
        "Application state initialized"
    );

    Ok(AppState::new(Arc::new(ask_service), cache))
}
