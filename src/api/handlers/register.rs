//! Handler for user registration.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;
use validator::Validate;

use super::log_failure;
use crate::api::dto::register::{MessageResponse, RegisterRequest};
use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use crate::infrastructure::remote_log::{Level, Package, report};
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "secret" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is missing or the username is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = register(&state, payload)
        .await
        .inspect_err(|e| log_failure(&state, Package::Controller, "Registration failed", e))?;

    info!(username = %user.username, "User registered");
    report(
        &state.log_sink,
        Level::Info,
        Package::Controller,
        format!("User {} registered successfully", user.username),
    );

    Ok(Json(MessageResponse::ok("Registration successful")))
}

async fn register(
    state: &AppState,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<User, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    state
        .user_service
        .register(NewUser {
            username: request.username.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        })
        .await
}
