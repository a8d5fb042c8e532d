//! Question answering endpoint handler

use axum::extract::State;
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, AskRequest, AskResponse, Json};

/// POST /ask
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::bad_request("Question cannot be empty").with_param("question"));
    }

    let response = state
        .ask_service
        .ask(&request.question)
        .await
        .map_err(|e| {
            warn!(error = %e, "Ask request failed");
            ApiError::from(e)
        })?;

    info!(
        source = %response.source,
        latency = response.latency,
        tokens = response.tokens_estimated,
        "Ask request completed"
    );

    Ok(Json(AskResponse::from(response)))
}
