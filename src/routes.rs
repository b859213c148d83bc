//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`              - Create a short link
//! - `GET  /shorturls/{shortcode}`  - Link statistics
//! - `GET  /{shortcode}`            - Redirect
//! - `/api/*`                       - Health check and registration
//! - anything else                  - `404 Route not found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{not_found_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
///
/// Trailing-slash handling has to wrap the whole router, so it is applied in
/// [`app_router`] only.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{shortcode}", get(stats_handler))
        .route("/{shortcode}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
