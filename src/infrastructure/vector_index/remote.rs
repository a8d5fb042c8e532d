//! HTTP vector index client
//!
//! Speaks the collection JSON contract: upsert with
//! `documents`/`metadatas`/`ids`, query with `query_texts`/`n_results`
//! answered by `documents`/`distances`. The remote side owns embedding.

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::domain::vector_index::{AddRequest, QueryRequest, QueryResponse, VectorIndex};
use crate::domain::DomainError;
use crate::infrastructure::llm::HttpClientTrait;

/// Vector index reached over HTTP
#[derive(Debug)]
pub struct RemoteVectorIndex<C: HttpClientTrait> {
    client: C,
    base_url: String,
    collection: String,
}

impl<C: HttpClientTrait> RemoteVectorIndex<C> {
    pub fn new(client: C, base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            collection: collection.into(),
        }
    }

    fn collection_url(&self, operation: &str) -> String {
        format!(
            "{}/api/v1/collections/{}/{}",
            self.base_url, self.collection, operation
        )
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }
}

#[async_trait]
impl<C: HttpClientTrait> VectorIndex for RemoteVectorIndex<C> {
    async fn add(&self, request: AddRequest) -> Result<(), DomainError> {
        request.validate()?;

        let body = json!({
            "documents": request.documents,
            "metadatas": request.metadatas,
            "ids": request.ids,
        });

        self.client
            .post_json(&self.collection_url("upsert"), self.headers(), &body)
            .await?;

        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, DomainError> {
        let body = json!({
            "query_texts": request.query_texts,
            "n_results": request.n_results,
            "include": ["documents", "distances"],
        });

        let response = match self
            .client
            .post_json(&self.collection_url("query"), self.headers(), &body)
            .await
        {
            Ok(response) => response,
            // A body we cannot read is an empty result, not a failure
            Err(DomainError::UpstreamProtocol { message, .. }) => {
                warn!(
                    collection = %self.collection,
                    error = %message,
                    "Unreadable vector index query reply"
                );
                return Ok(QueryResponse::default());
            }
            Err(e) => return Err(e),
        };

        Ok(serde_json::from_value(response).unwrap_or_else(|e| {
            warn!(collection = %self.collection, error = %e, "Malformed vector index query result");
            QueryResponse::default()
        }))
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vector_index::Metadata;
    use crate::infrastructure::llm::MockHttpClient;

    const QUERY_URL: &str = "http://index.test/api/v1/collections/chat_memory/query";
    const UPSERT_URL: &str = "http://index.test/api/v1/collections/chat_memory/upsert";

    #[tokio::test]
    async fn test_query_parses_nearest() {
        let client = MockHttpClient::new().with_response(
            QUERY_URL,
            json!({"ids": [["x"]], "documents": [["Paris"]], "distances": [[0.05]]}),
        );
        let index = RemoteVectorIndex::new(client, "http://index.test/", "chat_memory");

        let response = index
            .query(QueryRequest::single("Capital of France?", 1))
            .await
            .unwrap();

        assert_eq!(response.nearest(), Some(("Paris", 0.05)));

        let requests = index.client.requests();
        assert_eq!(requests[0].1["query_texts"], json!(["Capital of France?"]));
        assert_eq!(requests[0].1["n_results"], json!(1));
    }

    #[tokio::test]
    async fn test_malformed_query_result_is_empty() {
        let client = MockHttpClient::new().with_response(
            QUERY_URL,
            json!({"documents": [[null]], "distances": "oops"}),
        );
        let index = RemoteVectorIndex::new(client, "http://index.test", "chat_memory");

        let response = index.query(QueryRequest::single("q", 1)).await.unwrap();

        assert_eq!(response, QueryResponse::default());
    }

    #[tokio::test]
    async fn test_non_json_query_reply_is_empty() {
        let client = MockHttpClient::new().with_protocol_error(QUERY_URL, json!(""));
        let index = RemoteVectorIndex::new(client, "http://index.test", "chat_memory");

        let response = index.query(QueryRequest::single("q", 1)).await.unwrap();

        assert_eq!(response, QueryResponse::default());
        assert!(response.nearest().is_none());
    }

    #[tokio::test]
    async fn test_add_posts_upsert() {
        let client = MockHttpClient::new().with_response(UPSERT_URL, json!(true));
        let index = RemoteVectorIndex::new(client, "http://index.test", "chat_memory");

        index
            .add(AddRequest::single("id-1", "answer", Metadata::new()))
            .await
            .unwrap();

        let requests = index.client.requests();
        assert_eq!(requests[0].0, UPSERT_URL);
        assert_eq!(
            requests[0].1,
            json!({"documents": ["answer"], "metadatas": [{}], "ids": ["id-1"]})
        );
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = MockHttpClient::new().with_error(QUERY_URL, "timed out");
        let index = RemoteVectorIndex::new(client, "http://index.test", "chat_memory");

        let error = index.query(QueryRequest::single("q", 1)).await.unwrap_err();

        assert!(matches!(error, DomainError::Transport { .. }));
    }
}
