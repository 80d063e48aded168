//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`   - Short link redirect
//! - `GET  /health`   - Health check
//! - `/api/v1/*`      - REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become JSON 500 responses
//! - **Timeout** - Requests exceeding the deadline are aborted with 408
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes, tracing and panic recovery.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api::routes::api_routes())
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] plus a per-request deadline
/// and trailing-slash normalization.
///
/// Dropping a timed-out handler future cancels its in-flight storage call.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = router(state).layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        request_timeout,
    ));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
