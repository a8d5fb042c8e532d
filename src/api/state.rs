//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{AskServiceTrait, SimilarityCacheService};

/// Shared handler state
#[derive(Clone, Debug)]
pub struct AppState {
    pub ask_service: Arc<dyn AskServiceTrait>,
    pub cache: Arc<SimilarityCacheService>,
}

impl AppState {
    pub fn new(ask_service: Arc<dyn AskServiceTrait>, cache: Arc<SimilarityCacheService>) -> Self {
        Self { ask_service, cache }
    }
}
