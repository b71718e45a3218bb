/**
 * Login Handler
 *
 * Implements `POST /login`.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Sign a session token for `{username, id}`
 * 4. Hand it back in an HTTP-only `token` cookie
 *
 * Failed logins never touch the cookie jar, so a client can't end up holding
 * a token for a rejected attempt.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{CredentialsRequest, UserResponse};
use crate::backend::auth::sessions::{SessionKeys, TOKEN_COOKIE};
use crate::backend::auth::users::{get_user_by_username, PasswordHasher};
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - "User not found" or "Wrong credentials"
/// * `500 Internal Server Error` - database, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "hunter22"}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: token=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...; HttpOnly; Path=/
///
/// {"id": "123e4567-e89b-12d3-a456-426614174000", "username": "alice"}
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(keys): State<SessionKeys>,
    State(hasher): State<PasswordHasher>,
    jar: CookieJar,
    request: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<UserResponse>), BackendError> {
    let Json(request) = request?;
    let username = request.username.trim();
    tracing::info!(%username, "Login request");

    let user = get_user_by_username(&pool, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(%username, "Login for unknown user");
            BackendError::validation("User not found")
        })?;

    if !hasher.verify(&request.password, &user.password_hash)? {
        tracing::warn!(user_id = %user.id, "Wrong password");
        return Err(BackendError::validation("Wrong credentials"));
    }

    let token = keys.create_token(user.id, &user.username)?;
    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .path("/");

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");
    Ok((jar.add(cookie), Json(UserResponse::from(user))))
}
