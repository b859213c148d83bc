//! Storage trait for short links.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Authoritative table of shortcode → link.
///
/// Implementations own uniqueness of shortcodes and the atomicity of click
/// counter updates. Callers must never emulate [`LinkStore::insert_if_absent`]
/// with a separate `exists` check followed by a write.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkStore`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts `link` only if its shortcode is not stored yet.
    ///
    /// Returns `Ok(false)` when the shortcode is already taken; the existing
    /// record is left untouched. Two concurrent callers racing for the same
    /// shortcode never both get `Ok(true)`.
    async fn insert_if_absent(&self, link: Link) -> Result<bool, AppError>;

    /// Returns a snapshot of the record, or `None` if absent.
    async fn get(&self, shortcode: &str) -> Result<Option<Link>, AppError>;

    async fn exists(&self, shortcode: &str) -> Result<bool, AppError>;

    /// Adds one click to the record.
    ///
    /// Returns `Ok(false)` if the shortcode is unknown. Concurrent increments
    /// are never lost.
    async fn increment_clicks(&self, shortcode: &str) -> Result<bool, AppError>;

    /// Number of stored links, expired ones included.
    async fn count(&self) -> Result<usize, AppError>;
}
