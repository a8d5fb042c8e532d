use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// POST a JSON body and decode a JSON reply.
    ///
    /// Connection failures, timeouts and non-2xx statuses are transport
    /// errors; a 2xx reply that is not JSON is an upstream protocol error.
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    target: String,
}

impl HttpClient {
    /// Client whose requests fail once `timeout` elapses; `target` names
    /// the remote in errors
    pub fn with_timeout(target: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            target: target.into(),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::transport(&self.target, format!("Request timed out: {}", error))
        } else {
            DomainError::transport(&self.target, format!("Request failed: {}", error))
        }
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::transport(
                &self.target,
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        serde_json::from_str(&text).map_err(|e| {
            DomainError::upstream_protocol(&self.target, format!("Response is not JSON: {}", e))
                .with_payload(serde_json::Value::String(text))
        })
    }
}
