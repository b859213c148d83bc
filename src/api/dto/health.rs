//! DTOs for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,

    #[serde(serialize_with = "super::timestamp::serialize")]
    pub timestamp: DateTime<Utc>,

    pub version: String,

    /// Number of stored links, expired ones included.
    pub links: usize,
}
