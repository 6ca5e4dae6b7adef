//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: store, task queue (public)
//! - `/api/v1/*`   - Versioned REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api::routes::api_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
