//! User registration service.

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserStore;
use crate::error::AppError;

pub struct UserService<U: UserStore> {
    store: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<U: UserStore> UserService<U> {
    pub fn new(store: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is blank.
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub async fn register(&self, new_user: NewUser) -> Result<User, AppError> {
        if [&new_user.username, &new_user.email, &new_user.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AppError::validation(
                "Username, email and password are required",
            ));
        }

        if self.store.exists(&new_user.username).await? {
            return Err(AppError::conflict("User already exists"));
        }

        // `create` re-checks atomically.
        self.store
            .create(new_user.into_user(self.clock.now()))
            .await
    }
}
