//! Fallback for unmatched routes.

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
};

use crate::error::ErrorBody;
use crate::infrastructure::remote_log::{Level, Package, report};
use crate::state::AppState;

/// Returns `404 {"success": false, "message": "Route not found"}`.
pub async fn not_found_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<ErrorBody>) {
    tracing::warn!(%method, path = uri.path(), "Route not found");
    report(
        &state.log_sink,
        Level::Warn,
        Package::Route,
        format!("404 - Route not found: {} {}", method, uri.path()),
    );

    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            success: false,
            message: "Route not found".to_string(),
        }),
    )
}
