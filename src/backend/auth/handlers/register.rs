/**
 * Register Handler
 *
 * Implements `POST /register`.
 *
 * # Registration Process
 *
 * 1. Reject empty username or password
 * 2. Hash password using bcrypt
 * 3. Insert the user; the unique index on `username` rejects duplicates
 * 4. Return the public view of the new user (no hash)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{CredentialsRequest, UserResponse};
use crate::backend::auth::users::{create_user, is_unique_violation, PasswordHasher};
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - empty username/password, or username already taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "hunter22"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": "123e4567-e89b-12d3-a456-426614174000", "username": "alice"}
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    request: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, BackendError> {
    let Json(request) = request?;
    let username = request.username.trim();
    tracing::info!(%username, "Register request");

    if username.is_empty() {
        return Err(BackendError::validation("Username is required"));
    }
    if request.password.is_empty() {
        return Err(BackendError::validation("Password is required"));
    }

    let password_hash = hasher.hash(&request.password)?;

    let user = create_user(&pool, username, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!(%username, "Username already taken");
                BackendError::validation("Username already taken")
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");
    Ok(Json(UserResponse::from(user)))
}
