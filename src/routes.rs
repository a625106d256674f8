//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`          - Create a short id for a long URL
//! - `GET  /health`           - Health check: database + Redis
//! - `GET  /health/liveness`  - Process-alive probe
//! - `GET  /health/readiness` - Ready-for-traffic probe
//! - `GET  /{short_id}`       - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, liveness_handler, readiness_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static routes take priority over the `/{short_id}` capture, so the health
/// endpoints are never shadowed by a short id lookup.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/health/liveness", get(liveness_handler))
        .route("/health/readiness", get(readiness_handler))
        .route("/{short_id}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
