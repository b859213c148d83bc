//! In-memory storage backends.
//!
//! State lives for the lifetime of the process; nothing is persisted.
//!
//! - [`InMemoryLinkStore`] - Link table with per-shard locking
//! - [`InMemoryUserStore`] - Registered users

pub mod link_store;
pub mod user_store;

pub use link_store::InMemoryLinkStore;
pub use user_store::InMemoryUserStore;
