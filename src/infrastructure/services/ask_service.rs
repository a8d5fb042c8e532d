//! Question answering service
//!
//! Sequences one answer request: similarity cache lookup, then on a miss
//! prompt rendering, the model call, normalization and a cache store.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use super::similarity_cache_service::SimilarityCacheService;
use crate::domain::{
    estimate_tokens, normalize, round_latency, CostModel, DomainError, GenerateRequest,
    ModelBackend, ModelResponse, PromptTemplate,
};

/// Answers questions through the cache and the model backend
#[derive(Debug)]
pub struct AskService {
    backend: Arc<dyn ModelBackend>,
    cache: Arc<SimilarityCacheService>,
    model: String,
    prompt: PromptTemplate,
    options: Option<serde_json::Value>,
    cost_model: CostModel,
}

impl AskService {
    pub fn new(
        backend: Arc<dyn ModelBackend>,
        cache: Arc<SimilarityCacheService>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            cache,
            model: model.into(),
            prompt: PromptTemplate::default(),
            options: None,
            cost_model: CostModel::free(),
        }
    }

    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    pub fn cache(&self) -> &SimilarityCacheService {
        &self.cache
    }

    /// Answer a question.
    ///
    /// Any collaborator failure aborts the request; nothing is retried.
    pub async fn ask(&self, question: &str) -> Result<ModelResponse, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::validation("Question cannot be empty"));
        }

        let request_id = Uuid::new_v4();
        let start = Instant::now();

        if let Some(hit) = self.cache.retrieve_similar(question).await? {
            let latency = round_latency(start.elapsed());
            let tokens = estimate_tokens(&hit.answer);

            info!(
                request_id = %request_id,
                distance = hit.distance,
                latency,
                "Answered from similarity cache"
            );

            return Ok(ModelResponse::from_cache(hit.answer, latency, tokens));
        }

        let mut request = GenerateRequest::new(&self.model, self.prompt.render(question));
        if let Some(ref options) = self.options {
            request = request.with_options(options.clone());
        }

        debug!(
            request_id = %request_id,
            model = %self.model,
            backend = self.backend.backend_name(),
            "Calling model backend"
        );

        let generated = self.backend.generate(request).await?;
        let latency = round_latency(start.elapsed());

        let answer = normalize(&generated.response);
        let tokens = estimate_tokens(&answer);
        let cost = self.cost_model.estimate_cost(tokens);

        self.cache.store(question, &answer).await?;

        info!(
            request_id = %request_id,
            model = %self.model,
            latency,
            tokens,
            eval_count = generated.eval_count,
            "Answered from model"
        );

        Ok(ModelResponse::from_model(answer, latency, tokens, cost))
    }
}

/// Trait for question answering operations
#[async_trait::async_trait]
pub trait AskServiceTrait: Send + Sync + std::fmt::Debug {
    async fn ask(&self, question: &str) -> Result<ModelResponse, DomainError>;
}

#[async_trait::async_trait]
impl AskServiceTrait for AskService {
    async fn ask(&self, question: &str) -> Result<ModelResponse, DomainError> {
        AskService::ask(self, question).await
    }
}
