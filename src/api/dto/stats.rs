//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Statistics for a single short link. Returned for expired links too.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub shortcode: String,

    #[serde(serialize_with = "super::timestamp::serialize")]
    pub created: DateTime<Utc>,

    #[serde(serialize_with = "super::timestamp::serialize")]
    pub expiry: DateTime<Utc>,

    pub clicks: u64,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            url: link.target_url,
            shortcode: link.shortcode,
            created: link.created_at,
            expiry: link.expires_at,
            clicks: link.click_count,
        }
    }
}
