//! Model backend implementations

mod factory;
mod http_client;
mod ollama;

pub use factory::ModelBackendFactory;
pub use http_client::{HttpClient, HttpClientTrait};
pub use ollama::{OllamaBackend, DEFAULT_OLLAMA_BASE_URL};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
