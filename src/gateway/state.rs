use std::sync::Arc;

use crate::pipeline::SimilarityPipeline;

/// Shared handler state: the similarity pipeline, read-only across requests.
#[derive(Clone)]
pub struct HandlerState {
    pub pipeline: Arc<SimilarityPipeline>,
}

impl HandlerState {
    pub fn new(pipeline: Arc<SimilarityPipeline>) -> Self {
        Self { pipeline }
    }
}
