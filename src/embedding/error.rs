use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Network-level failure or the provider reports the model is not loaded.
    /// Retryable from the caller's perspective.
    #[error("embedding provider unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// Provider returned a non-200, non-404 status. Carries the provider's
    /// status and body for diagnosis.
    #[error("embedding provider returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Provider returned 200 but the JSON did not have the expected shape.
    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
