use serde::{Deserialize, Serialize};

/// Request body for `POST /similarity`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimilarityRequest {
    pub text1: String,
    pub text2: String,
}

/// Response body for `POST /similarity`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimilarityResponse {
    pub similarity_score: f32,
}
