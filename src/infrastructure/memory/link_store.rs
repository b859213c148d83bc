//! In-memory implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Stored form of a link. Everything except the counter is immutable.
#[derive(Debug)]
struct Record {
    target_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    clicks: AtomicU64,
}

impl Record {
    fn from_link(link: Link) -> Self {
        Self {
            target_url: link.target_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            clicks: AtomicU64::new(link.click_count),
        }
    }

    fn snapshot(&self, shortcode: &str) -> Link {
        Link {
            shortcode: shortcode.to_string(),
            target_url: self.target_url.clone(),
            created_at: self.created_at,
            expires_at: self.expires_at,
            click_count: self.clicks.load(Ordering::Acquire),
        }
    }
}

/// Link table backed by a sharded concurrent map.
///
/// Inserts lock only the shard owning the key, and click increments need
/// just a shard read lock plus an atomic add, so traffic on unrelated
/// shortcodes is never serialized.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    links: DashMap<String, Record>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn insert_if_absent(&self, link: Link) -> Result<bool, AppError> {
        match self.links.entry(link.shortcode.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(Record::from_link(link));
                Ok(true)
            }
        }
    }

    async fn get(&self, shortcode: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .get(shortcode)
            .map(|record| record.snapshot(shortcode)))
    }

    async fn exists(&self, shortcode: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(shortcode))
    }

    async fn increment_clicks(&self, shortcode: &str) -> Result<bool, AppError> {
        match self.links.get(shortcode) {
            Some(record) => {
                record.clicks.fetch_add(1, Ordering::AcqRel);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.len())
    }
}
