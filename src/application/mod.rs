//! Application layer services implementing business logic.
//!
//! Services consume the storage traits from [`crate::domain::repositories`]
//! and expose a typed API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, redirection and statistics
//! - [`services::user_service::UserService`] - User registration

pub mod services;
