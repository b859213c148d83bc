//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`clock`] - Injected time source
//!
//! The domain layer has no dependency on HTTP or on concrete storage.

pub mod clock;
pub mod entities;
pub mod repositories;
