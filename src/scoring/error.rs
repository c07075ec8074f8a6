use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The two vectors differ in length. Indicates a resolver/provider
    /// contract violation; never silently truncated or zero-padded.
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
