//! HTTP gateway (Axum) for the similarity endpoint.
//!
//! This module is primarily used by the `semsim` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

pub use error::{ErrorResponse, GatewayError};
pub use payload::{SimilarityRequest, SimilarityResponse};
pub use state::HandlerState;

use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::gateway::handler::similarity_handler;

/// Response header carrying the gateway's outcome classification.
pub const SEMSIM_STATUS_HEADER: &str = "x-semsim-status";
/// Header value for a successfully computed score.
pub const SEMSIM_STATUS_OK: &str = "ok";
/// Header value for the liveness probe.
pub const SEMSIM_STATUS_HEALTHY: &str = "healthy";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/similarity", post(similarity_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SEMSIM_STATUS_HEADER,
        HeaderValue::from_static(SEMSIM_STATUS_HEALTHY),
    );

    (StatusCode::OK, headers, Json(HealthResponse { status: "ok" })).into_response()
}
