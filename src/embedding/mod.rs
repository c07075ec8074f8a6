//! Embedding resolution: turning text into fixed-length vectors.
//!
//! Two interchangeable strategies implement [`EmbeddingResolver`]:
//! - [`local`] runs a sentence-embedding model in-process (candle BERT).
//! - [`remote`] delegates to an inference provider over HTTP.

/// Compute-device selection for local inference.
pub mod device;
mod error;
/// In-process MiniLM embedder.
pub mod local;
/// Remote inference-provider client.
pub mod remote;

pub use error::EmbeddingError;
pub use local::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
pub use remote::{DEFAULT_PROVIDER_URL, RemoteConfig, RemoteEmbedder};

use async_trait::async_trait;

/// Outcome of resolving one text pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PairResolution {
    /// One embedding per input text, in input order. The caller computes the
    /// similarity.
    Embeddings(Vec<f32>, Vec<f32>),
    /// The provider compared the pair itself; the comparator step is skipped
    /// and this raw score only needs clamping.
    Score(f32),
}

/// Capability: text in, vector out.
///
/// Implementations share no mutable state across calls, so a single resolver
/// instance serves all in-flight requests.
#[async_trait]
pub trait EmbeddingResolver: Send + Sync {
    /// Produces the embedding for a single text.
    async fn resolve(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Resolves both texts of a pair.
    ///
    /// The default issues both [`resolve`](Self::resolve) calls concurrently,
    /// waits for both, and propagates the first failure. A failed resolve is
    /// never replaced with a default vector.
    async fn resolve_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<PairResolution, EmbeddingError> {
        let (a, b) = tokio::try_join!(self.resolve(first), self.resolve(second))?;
        Ok(PairResolution::Embeddings(a, b))
    }
}
