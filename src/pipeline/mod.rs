//! Per-request orchestration: validate, resolve embeddings, compare.
//!
//! Each request moves through validation, embedding resolution, and (unless
//! the resolver already produced a final score) cosine comparison. Any stage
//! failure short-circuits the rest and surfaces with its original error kind.
//! No retries, no caching; every entity lives and dies within one request.

pub mod error;


pub use error::PipelineError;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::embedding::{EmbeddingResolver, PairResolution};
use crate::scoring;

/// Computes a bounded similarity score for a text pair using the configured
/// resolver strategy.
pub struct SimilarityPipeline {
    resolver: Arc<dyn EmbeddingResolver>,
}

impl SimilarityPipeline {
    pub fn new(resolver: Arc<dyn EmbeddingResolver>) -> Self {
        Self { resolver }
    }

    /// Computes the similarity score for one text pair.
    ///
    /// Validation failures are reported before any resolver work happens.
    #[instrument(skip_all)]
    pub async fn compute(&self, text1: &str, text2: &str) -> Result<f32, PipelineError> {
        validate_text("text1", text1)?;
        validate_text("text2", text2)?;

        let resolution = self.resolver.resolve_pair(text1, text2).await?;

        let score = match resolution {
            PairResolution::Embeddings(a, b) => {
                debug!(dim_a = a.len(), dim_b = b.len(), "Comparing embeddings");
                scoring::cosine_similarity(&a, &b)?
            }
            PairResolution::Score(raw) => {
                debug!(raw, "Provider returned a precomputed score");
                scoring::clamp_score(raw)
            }
        };

        debug!(score, "Similarity computed");
        Ok(score)
    }
}

fn validate_text(field: &'static str, value: &str) -> Result<(), PipelineError> {
    if value.trim().is_empty() {
        return Err(PipelineError::EmptyInput { field });
    }
    Ok(())
}
