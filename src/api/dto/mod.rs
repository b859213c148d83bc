//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request bodies that carry
//! required fields are checked with `validator`.

pub mod health;
pub mod register;
pub mod shorten;
pub mod stats;
pub mod timestamp;
