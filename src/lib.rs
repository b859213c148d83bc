//! # Shortlinks
//!
//! An HTTP URL shortening service with per-link expiry and click counting,
//! built with Axum and an in-memory store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the clock, and store traits
//! - **Application Layer** ([`application`]) - Link lifecycle and registration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and remote log forwarding
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated shortcodes with collision retry
//! - Per-link validity in minutes (30 by default)
//! - Atomic click counting on redirect
//! - Structured event forwarding to a remote log collector
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! export REMOTE_LOG_TOKEN="..."   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings, UserService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Link, NewUser, User};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::{InMemoryLinkStore, InMemoryUserStore};
    pub use crate::infrastructure::remote_log::{Level, LogEvent, LogSink, Package, Stack};
    pub use crate::state::AppState;
}
