//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with expiry and click counter
//! - [`User`] - A registered user
//!
//! Creation inputs use separate structs (`NewUser`) so stored records can
//! carry derived fields such as the password digest.

pub mod link;
pub mod user;

pub use link::Link;
pub use user::{NewUser, User};
