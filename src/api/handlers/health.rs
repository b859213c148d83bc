//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use super::log_failure;
use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::infrastructure::remote_log::Package;
use crate::state::AppState;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Server is running",
///   "timestamp": "2025-01-01T12:00:00.000Z",
///   "version": "0.1.0",
///   "links": 12
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    tracing::debug!("Health check requested");

    let links = state
        .link_service
        .link_count()
        .await
        .inspect_err(|e| log_failure(&state, Package::Controller, "Health check failed", e))?;

    Ok(Json(HealthResponse {
        success: true,
        message: "Server is running".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links,
    }))
}
