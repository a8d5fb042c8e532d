use serde::Deserialize;

use crate::domain::SimilarityCacheConfig;
use crate::infrastructure::llm::DEFAULT_OLLAMA_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub vector_index: VectorIndexConfig,
    #[serde(default)]
    pub cache: SimilarityCacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Model backend settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Upper bound on a single generate call
    pub timeout_secs: u64,
    /// Zero for local models
    pub cost_per_1k_tokens: f64,
    /// Sampling options forwarded to the backend
    pub options: Option<serde_json::Value>,
    /// Replaces the built-in support-assistant instructions
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VectorIndexBackend {
    #[default]
    InMemory,
    Remote,
}

/// Vector index settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VectorIndexConfig {
    pub backend: VectorIndexBackend,
    /// Only used by the remote backend
    pub base_url: String,
    pub collection: String,
    pub timeout_secs: u64,
    /// Embedding width of the in-memory backend
    pub dimensions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            model: "llama3".to_string(),
            timeout_secs: 120,
            cost_per_1k_tokens: 0.0,
            options: None,
            instructions: None,
        }
    }
}

impl Default for VectorIndexConfig {
    fn default() -> Self {
        Self {
            backend: VectorIndexBackend::default(),
            base_url: "http://localhost:8001".to_string(),
            collection: "chat_memory".to_string(),
            timeout_secs: 30,
            dimensions: 512,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
