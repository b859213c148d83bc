//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use super::log_failure;
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, report};
use crate::state::AppState;

/// Redirects a shortcode to its target URL and counts the click.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` carries the target URL
/// - **404 Not Found**: unknown shortcode
/// - **410 Gone**: the link has expired; the click is not counted
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Response, AppError> {
    let link = state
        .link_service
        .resolve(&shortcode)
        .await
        .inspect_err(|e| log_failure(&state, Package::Route, "Redirect failed", e))?;

    let location = HeaderValue::try_from(link.target_url.as_str())
        .map_err(|e| {
            AppError::internal(format!("unusable target for '{}': {e}", link.shortcode))
        })
        .inspect_err(|e| log_failure(&state, Package::Route, "Redirect failed", e))?;

    info!(
        shortcode = %link.shortcode,
        target = %link.target_url,
        clicks = link.click_count,
        "Redirecting"
    );
    report(
        &state.log_sink,
        Level::Info,
        Package::Service,
        format!(
            "Redirecting {} to {} (clicks: {})",
            link.shortcode, link.target_url, link.click_count
        ),
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
