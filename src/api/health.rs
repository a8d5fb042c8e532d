//! Liveness endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::api::types::Json;
use crate::domain::SimilarityCacheStats;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Health response with build and cache details
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cache_enabled: bool,
    pub cache: SimilarityCacheStats,
}

/// GET /
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "ok".to_string(),
        }),
    )
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache_enabled: state.cache.is_enabled(),
        cache: state.cache.stats(),
    };

    (StatusCode::OK, Json(response))
}
