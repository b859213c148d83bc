//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `url` is optional at the type level so a missing field produces a
/// validation error from the service rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,

    /// Lifetime in minutes; the configured default applies when omitted.
    pub validity: Option<i64>,

    /// Caller-chosen code; generated when omitted.
    pub shortcode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortLink")]
    pub short_link: String,

    #[serde(serialize_with = "super::timestamp::serialize")]
    pub expiry: DateTime<Utc>,
}
