//! In-memory implementation of the user store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::User;
use crate::domain::repositories::UserStore;
use crate::error::AppError;

/// Users keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.users.contains_key(username))
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("User already exists")),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }
}
