//! `GET /profile` handler

use axum::Json;

use crate::backend::auth::sessions::Claims;
use crate::backend::middleware::AuthUser;

/// Return the decoded session claims
///
/// The `AuthUser` extractor has already rejected missing, forged and expired
/// tokens with a 401.
pub async fn profile(AuthUser(claims): AuthUser) -> Json<Claims> {
    tracing::debug!(user_id = %claims.id, "Profile request");
    Json(claims)
}
