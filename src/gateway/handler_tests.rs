//! Tests for the gateway: routing, status mapping, and payload handling.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::embedding::{EmbeddingError, EmbeddingResolver, MiniLmConfig, MiniLmEmbedder};
use crate::gateway::payload::SimilarityResponse;
use crate::gateway::state::HandlerState;
use crate::gateway::{SEMSIM_STATUS_HEADER, create_router_with_state};
use crate::pipeline::SimilarityPipeline;

fn stub_router() -> Router {
    let embedder = MiniLmEmbedder::load(MiniLmConfig::stub()).expect("stub embedder loads");
    let pipeline = Arc::new(SimilarityPipeline::new(Arc::new(embedder)));
    create_router_with_state(HandlerState::new(pipeline))
}

fn router_with_resolver(resolver: Arc<dyn EmbeddingResolver>) -> Router {
    let pipeline = Arc::new(SimilarityPipeline::new(resolver));
    create_router_with_state(HandlerState::new(pipeline))
}

fn similarity_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/similarity")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

struct ErrorResolver {
    build_error: fn() -> EmbeddingError,
}

#[async_trait]
impl EmbeddingResolver for ErrorResolver {
    async fn resolve(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err((self.build_error)())
    }
}

#[tokio::test]
async fn test_healthz() {
    let response = stub_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(SEMSIM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("healthy")
    );

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_identical_texts_score_one() {
    let request = similarity_request(serde_json::json!({
        "text1": "The cat sat on the mat.",
        "text2": "The cat sat on the mat."
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(SEMSIM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("ok")
    );

    let body = response_json(response).await;
    let parsed: SimilarityResponse = serde_json::from_value(body).unwrap();
    assert!((parsed.similarity_score - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn test_score_is_bounded() {
    let request = similarity_request(serde_json::json!({
        "text1": "completely unrelated words here",
        "text2": "a different sentence altogether"
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let score = body["similarity_score"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score), "score {score} out of range");
}

#[tokio::test]
async fn test_empty_text1_is_bad_request() {
    let request = similarity_request(serde_json::json!({
        "text1": "",
        "text2": "something"
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(SEMSIM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("invalid_request")
    );

    let body = response_json(response).await;
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().contains("text1"));
}

#[tokio::test]
async fn test_whitespace_text2_is_bad_request() {
    let request = similarity_request(serde_json::json!({
        "text1": "something",
        "text2": "   \n\t  "
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let request = similarity_request(serde_json::json!({
        "text1": "only one text"
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("invalid request"));
}

#[tokio::test]
async fn test_service_unavailable_maps_to_503() {
    let router = router_with_resolver(Arc::new(ErrorResolver {
        build_error: || EmbeddingError::ServiceUnavailable {
            reason: "provider reports embedding model not loaded (404)".to_string(),
        },
    }));

    let request = similarity_request(serde_json::json!({
        "text1": "a",
        "text2": "b"
    }));

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response
            .headers()
            .get(SEMSIM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("service_unavailable")
    );

    let body = response_json(response).await;
    assert_eq!(body["code"], 503);
}

#[tokio::test]
async fn test_upstream_error_maps_to_502() {
    let router = router_with_resolver(Arc::new(ErrorResolver {
        build_error: || EmbeddingError::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        },
    }));

    let request = similarity_request(serde_json::json!({
        "text1": "a",
        "text2": "b"
    }));

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("429"), "message was: {message}");
    assert!(message.contains("rate limited"), "message was: {message}");
}

#[tokio::test]
async fn test_malformed_response_maps_to_500() {
    let router = router_with_resolver(Arc::new(ErrorResolver {
        build_error: || EmbeddingError::MalformedResponse {
            reason: "expected a JSON array of floats".to_string(),
        },
    }));

    let request = similarity_request(serde_json::json!({
        "text1": "a",
        "text2": "b"
    }));

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get(SEMSIM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("malformed_response")
    );
}

#[tokio::test]
async fn test_dimension_mismatch_maps_to_500() {
    struct MismatchedResolver;

    #[async_trait]
    impl EmbeddingResolver for MismatchedResolver {
        async fn resolve(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            // Simulates a provider contract violation across the pair.
            let dim = if text.len() % 2 == 0 { 384 } else { 256 };
            Ok(vec![0.1; dim])
        }
    }

    let router = router_with_resolver(Arc::new(MismatchedResolver));

    let request = similarity_request(serde_json::json!({
        "text1": "ab",
        "text2": "abc"
    }));

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response
            .headers()
            .get(SEMSIM_STATUS_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("dimension_mismatch")
    );

    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("384"), "message was: {message}");
    assert!(message.contains("256"), "message was: {message}");
}
