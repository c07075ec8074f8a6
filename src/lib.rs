//! Semsim library crate (used by the server binary and integration tests).
//!
//! Computes a bounded semantic-similarity score for a pair of texts by
//! embedding each text and comparing the embeddings with cosine similarity.
//!
//! # Modules
//! - [`config`] - Environment-backed server configuration
//! - [`embedding`] - Embedding resolution: local candle model or remote provider
//! - [`scoring`] - Cosine similarity with canonical `[0.0, 1.0]` clamping
//! - [`pipeline`] - Per-request orchestration (validate, resolve, compare)
//! - [`gateway`] - Axum HTTP layer exposing `/similarity` and `/healthz`

pub mod config;
pub mod embedding;
pub mod gateway;
pub mod pipeline;
pub mod scoring;

pub use config::{Config, ConfigError, ResolverStrategy};
pub use embedding::{
    EmbeddingError, EmbeddingResolver, MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig,
    MiniLmEmbedder, PairResolution, RemoteConfig, RemoteEmbedder,
};
pub use pipeline::{PipelineError, SimilarityPipeline};
pub use scoring::{ScoringError, clamp_score, cosine_similarity};
