//! Remote embedding provider client.
//!
//! Wire contract: `POST {provider_url}` with a bearer token and the JSON body
//! `{"inputs": "<text>"}`; a 200 response is a flat JSON array of floats (one
//! embedding). Some deployments wrap a single input in a one-row nested array,
//! which is unwrapped transparently.

/// Remote provider configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_PROVIDER_URL, DEFAULT_TIMEOUT_SECS, RemoteConfig};

use async_trait::async_trait;
use tracing::debug;

use crate::embedding::EmbeddingResolver;
use crate::embedding::error::EmbeddingError;

/// Embedding resolver backed by a remote inference provider.
///
/// Holds one long-lived HTTP client; the credential, endpoint, and timeout
/// are read-only after construction.
#[derive(Debug, Clone)]
pub struct RemoteEmbedder {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteEmbedder {
    /// Builds the embedder and its HTTP client from a config.
    pub fn new(config: RemoteConfig) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    async fn fetch_embedding(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        debug!(
            provider_url = %self.config.provider_url,
            text_len = text.len(),
            "Requesting embedding from provider"
        );

        let response = self
            .client
            .post(&self.config.provider_url)
            .bearer_auth(&self.config.api_token)
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await
            .map_err(|e| EmbeddingError::ServiceUnavailable {
                reason: e.to_string(),
            })?;

        let status = response.status();

        // 404 means the model is not resident on the provider side, a
        // retryable condition distinct from a generic upstream failure.
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EmbeddingError::ServiceUnavailable {
                reason: "provider reports embedding model not loaded (404)".to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        parse_embedding(&value)
    }
}

fn parse_embedding(value: &serde_json::Value) -> Result<Vec<f32>, EmbeddingError> {
    let row = match value {
        serde_json::Value::Array(items) if items.len() == 1 && items[0].is_array() => &items[0],
        other => other,
    };

    let items = row.as_array().ok_or_else(|| malformed("expected a JSON array of floats"))?;

    if items.is_empty() {
        return Err(malformed("embedding array is empty"));
    }

    items
        .iter()
        .map(|item| {
            item.as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| malformed("embedding array contains a non-numeric element"))
        })
        .collect()
}

fn malformed(reason: &str) -> EmbeddingError {
    EmbeddingError::MalformedResponse {
        reason: reason.to_string(),
    }
}

#[async_trait]
impl EmbeddingResolver for RemoteEmbedder {
    async fn resolve(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.fetch_embedding(text).await
    }
}
