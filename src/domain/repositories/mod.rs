//! Storage trait definitions for the domain layer.
//!
//! These traits abstract data access. Concrete implementations live in
//! `crate::infrastructure::memory`; mock implementations are generated via
//! `mockall` for unit tests.
//!
//! - [`LinkStore`] - Short link table with atomic insert and click counting
//! - [`UserStore`] - Registered users

pub mod link_store;
pub mod user_store;

pub use link_store::LinkStore;
pub use user_store::UserStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use user_store::MockUserStore;
