//! REST route configuration
//!
//! Non-streaming endpoints: static service metadata at `/` and a liveness
//! probe at `/health`. Neither touches the upstream services.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::api;
use crate::state::AppState;
use std::sync::Arc;

/// Create the REST router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api::service_info))
        .route("/health", get(api::health_check))
        .layer(TraceLayer::new_for_http())
}
