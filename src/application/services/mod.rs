//! Business logic services for the application layer.

pub mod link_service;
pub mod user_service;

pub use link_service::{LinkService, LinkSettings};
pub use user_service::UserService;
