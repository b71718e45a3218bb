/**
 * Session Extraction
 *
 * `AuthUser` is an Axum extractor that reads the `token` cookie, verifies it
 * with the configured session keys and yields the decoded claims. Handlers
 * that take an `AuthUser` argument are therefore only reached with a valid
 * session; everything else gets a 401 before the handler body runs.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::{Claims, SessionKeys, TOKEN_COOKIE};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated caller, decoded from the session cookie
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

/// Verify the session cookie in a cookie jar
///
/// An empty cookie value counts as absent; that is what a cleared cookie
/// looks like.
pub fn authenticate(jar: &CookieJar, keys: &SessionKeys) -> Result<Claims, BackendError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            tracing::debug!("No session cookie");
            BackendError::unauthorized("No token provided")
        })?;

    keys.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Invalid session token");
        BackendError::unauthorized("Invalid token")
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claims = authenticate(&jar, &state.session_keys)?;
        Ok(AuthUser(claims))
    }
}
