//! Storage trait for registered users.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists(&self, username: &str) -> Result<bool, AppError>;

    /// Stores a new user keyed by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already registered.
    async fn create(&self, user: User) -> Result<User, AppError>;
}
