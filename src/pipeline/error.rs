use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

/// Failures surfaced by [`SimilarityPipeline`](super::SimilarityPipeline).
///
/// Resolver and comparator error kinds pass through unchanged so the HTTP
/// layer can map each one to the right status code.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Client error: an input text was empty (or whitespace-only) after trim.
    #[error("{field} must be a non-empty string")]
    EmptyInput { field: &'static str },

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
