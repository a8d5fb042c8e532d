use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::ask;
use super::health;
use super::state::AppState;

/// Create the router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/ask", post(ask::ask))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::health::HealthResponse;
    use crate::api::types::{ApiErrorResponse, AskResponse};
    use crate::domain::llm::MockModelBackend;
    use crate::domain::AnswerSource;
    use crate::infrastructure::embedding::HashingEmbedder;
    use crate::infrastructure::services::{AskService, SimilarityCacheService};
    use crate::infrastructure::vector_index::InMemoryVectorIndex;

    fn router(backend: MockModelBackend) -> Router {
        let index = InMemoryVectorIndex::new(Arc::new(HashingEmbedder::default()))
            .with_search_field("question");
        let cache = Arc::new(SimilarityCacheService::new(Arc::new(index)));
        let service = AskService::new(Arc::new(backend), cache.clone(), "llama3");

        create_router(AppState::new(Arc::new(service), cache))
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ask_then_cached() {
        let app = router(MockModelBackend::new().with_response("{\"answer\": \"Paris\"}"));

        let response = app
            .clone()
            .oneshot(ask_request(r#"{"question":"Capital of France?"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let first: AskResponse = body_json(response).await;
        assert_eq!(first.answer, "Paris");
        assert_eq!(first.source, AnswerSource::Model);

        let response = app
            .clone()
            .oneshot(ask_request(r#"{"question":"Capital of France?"}"#))
            .await
            .unwrap();
        let second: AskResponse = body_json(response).await;
        assert_eq!(second.source, AnswerSource::Cache);
        assert_eq!(second.answer, "Paris");

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.cache.hits, 1);
        assert_eq!(health.cache.stores, 1);
    }

    #[tokio::test]
    async fn test_blank_question_is_bad_request() {
        let app = router(MockModelBackend::new().with_response("unused"));

        let response = app.oneshot(ask_request(r#"{"question":"  "}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiErrorResponse = body_json(response).await;
        assert_eq!(error.error.param.as_deref(), Some("question"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_unavailable() {
        let app = router(MockModelBackend::new().with_error("connection refused"));

        let response = app
            .oneshot(ask_request(r#"{"question":"Anyone there?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = router(MockModelBackend::new());

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
