//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use super::log_failure;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, report};
use crate::state::AppState;

/// Returns statistics for a short link, including expired ones.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com",
///   "shortcode": "abc123",
///   "created": "2025-01-01T12:00:00.000Z",
///   "expiry": "2025-01-01T12:30:00.000Z",
///   "clicks": 4
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state
        .link_service
        .stats(&shortcode)
        .await
        .inspect_err(|e| {
            log_failure(&state, Package::Controller, "Statistics lookup failed", e)
        })?;

    info!(shortcode = %shortcode, clicks = link.click_count, "Statistics retrieved");
    report(
        &state.log_sink,
        Level::Info,
        Package::Service,
        format!("Statistics retrieved for: {shortcode}"),
    );

    Ok(Json(StatsResponse::from(link)))
}
