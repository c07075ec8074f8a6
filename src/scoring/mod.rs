//! Cosine-similarity scoring for embedding pairs.
//!
//! Scores are clamped into the canonical `[0.0, 1.0]` range. Raw cosine
//! similarity can reach -1.0 for opposed vectors; the clamp is a product
//! decision carried over from every prior deployment of this service.

pub mod error;


pub use error::ScoringError;

/// Computes cosine similarity between two equal-length vectors, clamped
/// into `[0.0, 1.0]`.
///
/// Pure and symmetric in its arguments. A zero-magnitude (or empty) vector
/// makes the quotient undefined; the result is pinned to `0.0` rather than
/// propagating a division fault.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoringError> {
    if a.len() != b.len() {
        return Err(ScoringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(clamp_score(dot / (norm_a * norm_b)))
}

/// Clamps a raw similarity value into the canonical `[0.0, 1.0]` range.
#[inline]
pub fn clamp_score(raw: f32) -> f32 {
    raw.clamp(0.0, 1.0)
}
