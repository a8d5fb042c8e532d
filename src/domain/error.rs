use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An outbound collaborator could not be reached or timed out
    #[error("Transport error: {target} - {message}")]
    Transport { target: String, message: String },

    /// An upstream service answered 2xx with a body that breaks its contract
    #[error("Upstream protocol error: {provider} - {message}")]
    UpstreamProtocol {
        provider: String,
        message: String,
        payload: Option<serde_json::Value>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transport(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn upstream_protocol(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamProtocol {
            provider: provider.into(),
            message: message.into(),
            payload: None,
        }
    }

    /// Attach the offending upstream body to an upstream protocol error
    pub fn with_payload(self, body: serde_json::Value) -> Self {
        match self {
            Self::UpstreamProtocol {
                provider, message, ..
            } => Self::UpstreamProtocol {
                provider,
                message,
                payload: Some(body),
            },
            other => other,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
