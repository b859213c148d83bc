//! Registered user entity.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// A registered user.
///
/// Only a SHA-256 digest of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Converts the registration input into a stored user record.
    pub fn into_user(self, created_at: DateTime<Utc>) -> User {
        User {
            password_hash: hash_password(&self.password),
            username: self.username,
            email: self.email,
            created_at,
        }
    }
}

/// Hex-encoded SHA-256 of the password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
