use async_trait::async_trait;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, GenerateRequest, GenerateResponse, ModelBackend};

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Ollama `/api/generate` backend
#[derive(Debug)]
pub struct OllamaBackend<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> OllamaBackend<C> {
    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }

    fn build_request(&self, request: &GenerateRequest) -> Result<serde_json::Value, DomainError> {
        let mut body = serde_json::to_value(request).map_err(|e| {
            DomainError::internal(format!("Failed to serialize generate request: {}", e))
        })?;

        // Streaming is never requested; the reply must be a single JSON object
        body["stream"] = serde_json::Value::Bool(false);

        Ok(body)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<GenerateResponse, DomainError> {
        let Some(text) = json.get("response").and_then(|v| v.as_str()) else {
            return Err(DomainError::upstream_protocol(
                self.backend_name(),
                "Response body has no 'response' text field",
            )
            .with_payload(json));
        };

        let mut response = GenerateResponse::new(text);

        if let Some(eval_count) = json
            .get("eval_count")
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
        {
            response = response.with_eval_count(eval_count);
        }

        Ok(response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> ModelBackend for OllamaBackend<C> {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, DomainError> {
        let url = self.generate_url();
        let body = self.build_request(&request)?;
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn backend_name(&self) -> &'static str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;
    use serde_json::json;

    const URL: &str = "http://ollama.test/api/generate";

    #[tokio::test]
    async fn test_generate_success() {
        let client = MockHttpClient::new().with_response(
            URL,
            json!({"model": "llama3", "response": "Paris", "done": true, "eval_count": 7}),
        );
        let backend = OllamaBackend::with_base_url(client, "http://ollama.test/");

        let response = backend
            .generate(GenerateRequest::new("llama3", "Capital of France?"))
            .await
            .unwrap();

        assert_eq!(response.response, "Paris");
        assert_eq!(response.eval_count, Some(7));
    }

    #[tokio::test]
    async fn test_request_body_shape() {
        let client = MockHttpClient::new().with_response(URL, json!({"response": "ok"}));
        let backend = OllamaBackend::with_base_url(client, "http://ollama.test");

        let mut request = GenerateRequest::new("llama3", "Hi")
            .with_options(json!({"temperature": 0.1}));
        request.stream = true;
        backend.generate(request).await.unwrap();

        let requests = backend.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, URL);
        assert_eq!(
            requests[0].1,
            json!({"model": "llama3", "prompt": "Hi", "stream": false, "options": {"temperature": 0.1}})
        );
    }

    #[tokio::test]
    async fn test_missing_response_field_is_protocol_error() {
        let body = json!({"error": "model 'llama3' not found"});
        let client = MockHttpClient::new().with_response(URL, body.clone());
        let backend = OllamaBackend::with_base_url(client, "http://ollama.test");

        let error = backend
            .generate(GenerateRequest::new("llama3", "Hi"))
            .await
            .unwrap_err();

        match error {
            DomainError::UpstreamProtocol {
                provider, payload, ..
            } => {
                assert_eq!(provider, "ollama");
                assert_eq!(payload, Some(body));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = MockHttpClient::new().with_error(URL, "connection refused");
        let backend = OllamaBackend::with_base_url(client, "http://ollama.test");

        let error = backend
            .generate(GenerateRequest::new("llama3", "Hi"))
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::Transport { .. }));
        assert_eq!(backend.client.requests().len(), 1);
    }
}
