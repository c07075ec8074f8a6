use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{SimilarityRequest, SimilarityResponse};
use crate::gateway::state::HandlerState;
use crate::gateway::{SEMSIM_STATUS_HEADER, SEMSIM_STATUS_OK};

/// Handles `POST /similarity`: two texts in, one bounded score out.
#[instrument(skip(state, request))]
pub async fn similarity_handler(
    State(state): State<HandlerState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let request: SimilarityRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {}", e)))?;

    debug!(
        text1_len = request.text1.len(),
        text2_len = request.text2.len(),
        "Processing similarity request"
    );

    let score = state
        .pipeline
        .compute(&request.text1, &request.text2)
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SEMSIM_STATUS_HEADER,
        HeaderValue::from_static(SEMSIM_STATUS_OK),
    );

    Ok((
        headers,
        Json(SimilarityResponse {
            similarity_score: score,
        }),
    )
        .into_response())
}
