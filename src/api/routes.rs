//! API route configuration.

use crate::api::handlers::{health_handler, register_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /health`   - Liveness check
/// - `POST /register` - User registration
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/register", post(register_handler))
}
