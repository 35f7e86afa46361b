//! Route assembly
//!
//! Each route group lives in its own module; `create_app` merges them and
//! applies the app-wide CORS policy from configuration.

pub mod api;
pub mod ws;

use std::sync::Arc;

use axum::Router;
use http::Method;
use http::header::CONTENT_TYPE;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::state::AppState;

/// Build the complete application router
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.cors_allowed_origins.as_deref());

    api::create_api_router()
        .merge(ws::create_ws_router())
        .with_state(state)
        .layer(cors)
}

/// Configure CORS from the allowed-origins setting
///
/// `"*"` allows any origin (without credentials); a comma-separated list
/// allows exactly those origins; unset means same-origin only.
fn cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    match allowed_origins {
        Some("*") => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE])
            .allow_credentials(false),
        Some(origins) => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(methods)
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => {
            // Same-origin only; browsers block cross-origin requests
            info!("CORS not configured, defaulting to same-origin only");
            CorsLayer::new()
                .allow_methods(methods)
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(false)
        }
    }
}
