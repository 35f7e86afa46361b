//! REST endpoint tests
//!
//! Exercise the non-streaming surface (service metadata and liveness)
//! against the assembled router. No upstream calls are involved.

use axum::body::Body;
use axum::http::Request;
use serde_json::Value;
use tower::util::ServiceExt;

use voicebridge_gateway::core::{LlmConfig, TtsConfig};
use voicebridge_gateway::{AppState, ServerConfig, routes};

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: Some("*".to_string()),
        request_timeout_seconds: 5,
        llm: LlmConfig {
            base_url: "http://localhost:9".to_string(),
            api_key: "test_key".to_string(),
            model: "gpt-4o-mini".to_string(),
            system_prompt: "test".to_string(),
            max_tokens: 150,
            temperature: 0.7,
        },
        tts: TtsConfig {
            base_url: "http://localhost:9".to_string(),
            api_key: "test_key".to_string(),
            model: "tts-1".to_string(),
            voice: "alloy".to_string(),
            response_format: "mp3".to_string(),
        },
    }
}

fn test_app() -> axum::Router {
    let state = AppState::new(test_config()).expect("failed to build state");
    routes::create_app(state)
}

async fn get_json(app: axum::Router, uri: &str) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_service_info() {
    let (status, json) = get_json(test_app(), "/").await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["service"], "Voicebridge Gateway");
    assert_eq!(json["status"], "running");
    assert_eq!(json["ws"], "/ws");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(test_app(), "/health").await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}
