use super::*;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::embedding::{EmbeddingResolver, PairResolution};

/// Spawns a mock provider on an ephemeral port and returns its base URL.
async fn spawn_provider(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral bind should succeed");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn embedder_for(url: String) -> RemoteEmbedder {
    let config = RemoteConfig::new(url, "hf_test_token").with_timeout(Duration::from_secs(2));
    RemoteEmbedder::new(config).expect("client should build")
}

#[test]
fn test_config_is_preserved() {
    let embedder = embedder_for("http://localhost:9/".to_string());
    assert_eq!(embedder.config().provider_url, "http://localhost:9/");
    assert_eq!(embedder.config().api_token, "hf_test_token");
    assert_eq!(embedder.config().timeout, Duration::from_secs(2));
}

#[tokio::test]
async fn test_resolve_flat_array() {
    let router = Router::new().route(
        "/",
        post(|| async { Json(serde_json::json!([0.1, 0.2, 0.3])) }),
    );
    let url = spawn_provider(router).await;

    let embedding = embedder_for(url).resolve("hello").await.unwrap();
    assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn test_resolve_unwraps_single_row() {
    let router = Router::new().route(
        "/",
        post(|| async { Json(serde_json::json!([[1.0, 0.0, -1.0]])) }),
    );
    let url = spawn_provider(router).await;

    let embedding = embedder_for(url).resolve("hello").await.unwrap();
    assert_eq!(embedding, vec![1.0, 0.0, -1.0]);
}

#[tokio::test]
async fn test_resolve_forwards_bearer_token_and_inputs() {
    let router = Router::new().route(
        "/",
        post(
            |headers: axum::http::HeaderMap, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(
                    headers.get("authorization").and_then(|v| v.to_str().ok()),
                    Some("Bearer hf_test_token")
                );
                assert_eq!(body["inputs"], serde_json::json!("hello"));
                Json(serde_json::json!([0.5, 0.5]))
            },
        ),
    );
    let url = spawn_provider(router).await;

    let embedding = embedder_for(url).resolve("hello").await.unwrap();
    assert_eq!(embedding.len(), 2);
}

#[tokio::test]
async fn test_404_is_service_unavailable() {
    let router = Router::new().route(
        "/",
        post(|| async { (StatusCode::NOT_FOUND, "model not loaded") }),
    );
    let url = spawn_provider(router).await;

    let err = embedder_for(url).resolve("hello").await.unwrap_err();
    assert!(
        matches!(err, EmbeddingError::ServiceUnavailable { .. }),
        "expected ServiceUnavailable, got {err:?}"
    );
}

#[tokio::test]
async fn test_non_200_is_upstream_with_status_and_body() {
    let router = Router::new().route(
        "/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "provider exploded") }),
    );
    let url = spawn_provider(router).await;

    let err = embedder_for(url).resolve("hello").await.unwrap_err();
    match err {
        EmbeddingError::Upstream { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "provider exploded");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let router = Router::new().route(
        "/",
        post(|| async { Json(serde_json::json!({"error": "surprise object"})) }),
    );
    let url = spawn_provider(router).await;

    let err = embedder_for(url).resolve("hello").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_non_numeric_element_is_malformed() {
    let router = Router::new().route(
        "/",
        post(|| async { Json(serde_json::json!([0.1, "oops", 0.3])) }),
    );
    let url = spawn_provider(router).await;

    let err = embedder_for(url).resolve("hello").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_service_unavailable() {
    // Bind to learn a free port, then drop the listener before connecting.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = embedder_for(url).resolve("hello").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::ServiceUnavailable { .. }));
}

#[tokio::test]
async fn test_resolve_pair_joins_both_embeddings() {
    let router = Router::new().route(
        "/",
        post(|Json(body): Json<serde_json::Value>| async move {
            let embedding = match body["inputs"].as_str() {
                Some("left") => serde_json::json!([1.0, 0.0]),
                _ => serde_json::json!([0.0, 1.0]),
            };
            Json(embedding)
        }),
    );
    let url = spawn_provider(router).await;

    let resolution = embedder_for(url).resolve_pair("left", "right").await.unwrap();
    match resolution {
        PairResolution::Embeddings(a, b) => {
            assert_eq!(a, vec![1.0, 0.0]);
            assert_eq!(b, vec![0.0, 1.0]);
        }
        PairResolution::Score(_) => panic!("remote embedder returns embeddings"),
    }
}

#[tokio::test]
async fn test_resolve_pair_propagates_failure() {
    let router = Router::new().route(
        "/",
        post(|Json(body): Json<serde_json::Value>| async move {
            if body["inputs"].as_str() == Some("bad") {
                (StatusCode::BAD_GATEWAY, Json(serde_json::json!("nope"))).into_response()
            } else {
                Json(serde_json::json!([0.0, 1.0])).into_response()
            }
        }),
    );
    let url = spawn_provider(router).await;

    let err = embedder_for(url)
        .resolve_pair("good", "bad")
        .await
        .unwrap_err();
    assert!(matches!(err, EmbeddingError::Upstream { status: 502, .. }));
}
