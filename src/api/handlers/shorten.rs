//! Handler for link creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;

use super::log_failure;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, report};
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "validity": 30, "shortcode": "abc123" }
/// ```
///
/// `validity` (minutes) and `shortcode` are optional.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortLink": "http://localhost:3000/abc123", "expiry": "2025-01-01T12:30:00.000Z" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, the validity is not a
/// positive number of minutes, or the shortcode is taken.
/// Returns 500 if no free shortcode could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    report(
        &state.log_sink,
        Level::Info,
        Package::Controller,
        "Short URL creation request received",
    );

    let result = match payload {
        Ok(Json(request)) => {
            state
                .link_service
                .create(
                    request.url.unwrap_or_default(),
                    request.validity,
                    request.shortcode,
                )
                .await
        }
        Err(rejection) => Err(AppError::from(rejection)),
    };

    let link = result
        .inspect_err(|e| log_failure(&state, Package::Controller, "URL creation failed", e))?;

    info!(shortcode = %link.shortcode, url = %link.target_url, "Short URL created");
    report(
        &state.log_sink,
        Level::Info,
        Package::Service,
        format!("Short URL created: {} -> {}", link.shortcode, link.target_url),
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_link: state.link_service.short_url(&link.shortcode),
            expiry: link.expires_at,
        }),
    ))
}
