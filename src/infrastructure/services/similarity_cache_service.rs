//! Similarity cache service
//!
//! Serves a previously stored answer when a new question lands close
//! enough to an old one in the vector index.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::domain::vector_index::{QueryRequest, VectorIndex};
use crate::domain::{
    normalize, DomainError, QueryRecord, SimilarityCacheConfig, SimilarityCacheStats,
    SimilarityResult,
};

/// Similarity cache over a vector index
#[derive(Debug)]
pub struct SimilarityCacheService {
    index: Arc<dyn VectorIndex>,
    config: SimilarityCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
    stores: AtomicU64,
}

impl SimilarityCacheService {
    /// Create a cache with the default threshold
    pub fn new(index: Arc<dyn VectorIndex>) -> Self {
        Self::with_config(index, SimilarityCacheConfig::default())
    }

    pub fn with_config(index: Arc<dyn VectorIndex>, config: SimilarityCacheConfig) -> Self {
        Self {
            index,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            stores: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &SimilarityCacheConfig {
        &self.config
    }

    /// Upsert the pair, keyed by a hash of the question.
    ///
    /// The answer is normalized before it reaches the index so the cache
    /// never holds fenced or JSON-wrapped text. Returns `None` when caching
    /// is disabled.
    pub async fn store(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<Option<QueryRecord>, DomainError> {
        if !self.config.enabled {
            return Ok(None);
        }

        let record = QueryRecord::new(question, normalize(answer));
        self.index.add(record.to_add_request()).await?;
        self.stores.fetch_add(1, Ordering::Relaxed);

        debug!(
            record_id = %record.id(),
            index = self.index.backend_name(),
            "Stored answer in similarity cache"
        );

        Ok(Some(record))
    }

    /// Nearest stored answer under the configured threshold
    pub async fn retrieve_similar(
        &self,
        question: &str,
    ) -> Result<Option<SimilarityResult>, DomainError> {
        self.retrieve_similar_with_threshold(question, self.config.similarity_threshold)
            .await
    }

    /// Nearest stored answer if its distance is strictly below `threshold`.
    ///
    /// An empty or malformed index result is a miss. Index transport
    /// failures propagate.
    pub async fn retrieve_similar_with_threshold(
        &self,
        question: &str,
        threshold: f32,
    ) -> Result<Option<SimilarityResult>, DomainError> {
        if !self.config.enabled {
            return Ok(None);
        }

        let response = self.index.query(QueryRequest::single(question, 1)).await?;

        match response.nearest() {
            Some((answer, distance)) if distance < threshold => {
                debug!(distance, threshold, "Similarity cache hit");
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(SimilarityResult::new(answer, distance)))
            }
            nearest => {
                debug!(
                    distance = nearest.map(|(_, d)| d),
                    threshold,
                    "Similarity cache miss"
                );
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    pub fn stats(&self) -> SimilarityCacheStats {
        SimilarityCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vector_index::{AddRequest, QueryResponse};
    use crate::infrastructure::embedding::HashingEmbedder;
    use crate::infrastructure::vector_index::InMemoryVectorIndex;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn in_memory_cache() -> SimilarityCacheService {
        let index = InMemoryVectorIndex::new(Arc::new(HashingEmbedder::default()))
            .with_search_field("question");
        SimilarityCacheService::new(Arc::new(index))
    }

    /// Index that answers every query with a fixed response
    #[derive(Debug, Default)]
    struct FixedIndex {
        response: QueryResponse,
        added: Mutex<Vec<AddRequest>>,
    }

    impl FixedIndex {
        fn with_distance(distance: f32) -> Self {
            Self {
                response: QueryResponse {
                    documents: Some(vec![vec!["stored answer".to_string()]]),
                    distances: Some(vec![vec![distance]]),
                },
                added: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VectorIndex for FixedIndex {
        async fn add(&self, request: AddRequest) -> Result<(), DomainError> {
            self.added.lock().unwrap().push(request);
            Ok(())
        }

        async fn query(&self, _request: QueryRequest) -> Result<QueryResponse, DomainError> {
            Ok(self.response.clone())
        }

        fn backend_name(&self) -> &'static str {
            "fixed"
        }
    }

    #[derive(Debug)]
    struct UnreachableIndex;

    #[async_trait]
    impl VectorIndex for UnreachableIndex {
        async fn add(&self, _request: AddRequest) -> Result<(), DomainError> {
            Err(DomainError::transport("index", "connection refused"))
        }

        async fn query(&self, _request: QueryRequest) -> Result<QueryResponse, DomainError> {
            Err(DomainError::transport("index", "connection refused"))
        }

        fn backend_name(&self) -> &'static str {
            "unreachable"
        }
    }

    #[tokio::test]
    async fn test_store_then_retrieve_identical_question() {
        let cache = in_memory_cache();
        cache
            .store("What is RAG?", "Retrieval Augmented Generation")
            .await
            .unwrap();

        let result = cache.retrieve_similar("What is RAG?").await.unwrap().unwrap();

        assert_eq!(result.answer, "Retrieval Augmented Generation");
        assert!(result.distance < 0.15);
    }

    #[tokio::test]
    async fn test_unrelated_question_misses() {
        let cache = in_memory_cache();
        cache
            .store("What is RAG?", "Retrieval Augmented Generation")
            .await
            .unwrap();

        let result = cache
            .retrieve_similar("How do I reset my password?")
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = in_memory_cache();
        assert!(cache.retrieve_similar("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_threshold_is_strict() {
        let cache = SimilarityCacheService::new(Arc::new(FixedIndex::with_distance(0.15)));
        assert!(cache
            .retrieve_similar_with_threshold("q", 0.15)
            .await
            .unwrap()
            .is_none());

        let cache = SimilarityCacheService::new(Arc::new(FixedIndex::with_distance(0.1499)));
        let hit = cache
            .retrieve_similar_with_threshold("q", 0.15)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hit.answer, "stored answer");
    }

    #[tokio::test]
    async fn test_malformed_index_result_is_miss() {
        let index = FixedIndex {
            response: QueryResponse {
                documents: Some(vec![vec!["stored answer".to_string()]]),
                distances: None,
            },
            ..FixedIndex::default()
        };
        let cache = SimilarityCacheService::new(Arc::new(index));

        assert!(cache.retrieve_similar("q").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_nan_distance_is_miss() {
        let cache = SimilarityCacheService::new(Arc::new(FixedIndex::with_distance(f32::NAN)));
        assert!(cache.retrieve_similar("q").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_normalizes_answer() {
        let index = Arc::new(FixedIndex::default());
        let cache = SimilarityCacheService::new(index.clone());

        let record = cache
            .store("Capital?", "```json\n{\"answer\": \"Paris\"}\n```")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.answer(), "Paris");
        let added = index.added.lock().unwrap();
        assert_eq!(added[0].documents, vec!["Paris".to_string()]);
    }

    #[tokio::test]
    async fn test_store_same_question_overwrites() {
        let cache = in_memory_cache();
        cache.store("What is RAG?", "old").await.unwrap();
        cache.store("What is RAG?", "new").await.unwrap();

        let result = cache.retrieve_similar("What is RAG?").await.unwrap().unwrap();
        assert_eq!(result.answer, "new");
        assert_eq!(cache.stats().stores, 2);
    }

    #[tokio::test]
    async fn test_disabled_cache_skips_index() {
        let index = Arc::new(FixedIndex::with_distance(0.0));
        let cache = SimilarityCacheService::with_config(
            index.clone(),
            SimilarityCacheConfig::new().with_enabled(false),
        );

        assert!(cache.store("q", "a").await.unwrap().is_none());
        assert!(cache.retrieve_similar("q").await.unwrap().is_none());
        assert!(index.added.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let cache = SimilarityCacheService::new(Arc::new(UnreachableIndex));

        assert!(matches!(
            cache.retrieve_similar("q").await,
            Err(DomainError::Transport { .. })
        ));
        assert!(matches!(
            cache.store("q", "a").await,
            Err(DomainError::Transport { .. })
        ));
    }
}
