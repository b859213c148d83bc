//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its expiry window and click counter.
///
/// Values of this type are snapshots: the authoritative record lives in the
/// [`crate::domain::repositories::LinkStore`], and `click_count` reflects the
/// counter at the moment the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub shortcode: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
}

impl Link {
    /// Creates a fresh link with a zero click counter.
    pub fn new(
        shortcode: String,
        target_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            shortcode,
            target_url,
            created_at,
            expires_at,
            click_count: 0,
        }
    }

    /// Returns true once `now` is strictly past the expiry time.
    ///
    /// A link is still valid at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
