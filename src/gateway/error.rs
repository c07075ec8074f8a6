use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::gateway::SEMSIM_STATUS_HEADER;
use crate::pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, semsim_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::Pipeline(err) => classify_pipeline_error(err),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SEMSIM_STATUS_HEADER,
            HeaderValue::from_str(semsim_status).unwrap_or(HeaderValue::from_static("error")),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}

fn classify_pipeline_error(err: &PipelineError) -> (StatusCode, &'static str) {
    match err {
        PipelineError::EmptyInput { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
        PipelineError::Embedding(embedding_err) => match embedding_err {
            EmbeddingError::ServiceUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
            }
            EmbeddingError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
            EmbeddingError::MalformedResponse { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_response")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error"),
        },
        PipelineError::Scoring(_) => (StatusCode::INTERNAL_SERVER_ERROR, "dimension_mismatch"),
    }
}
