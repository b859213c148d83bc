//! DTOs for user registration.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Username, email and password are required"),
        length(min = 1, message = "Username, email and password are required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Username, email and password are required"),
        length(min = 1, message = "Username, email and password are required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Username, email and password are required"),
        length(min = 1, message = "Username, email and password are required")
    )]
    pub password: Option<String>,
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
