//! Static service metadata and liveness handlers

use axum::Json;
use serde_json::{Value, json};

/// Service metadata for the root endpoint
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "service": "Voicebridge Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "ws": "/ws",
    }))
}

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
