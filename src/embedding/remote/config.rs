//! Remote embedding provider configuration.

use std::time::Duration;

/// Default provider endpoint (HuggingFace Inference API, MiniLM-L3-v2).
pub const DEFAULT_PROVIDER_URL: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L3-v2";

/// Default per-call timeout for provider requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`RemoteEmbedder`](super::RemoteEmbedder).
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Provider endpoint URL. The request is a POST to this URL.
    pub provider_url: String,

    /// Bearer token sent in the `Authorization` header.
    pub api_token: String,

    /// Per-call timeout. Exceeding it is a network-level failure.
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Creates a config with the default timeout.
    pub fn new(provider_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            provider_url: provider_url.into(),
            api_token: api_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
