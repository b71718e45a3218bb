//! `POST /logout` handler

use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::backend::auth::sessions::TOKEN_COOKIE;

/// Clear the session cookie
///
/// Tokens are not tracked server-side, so this only tells the client to drop
/// its copy. The removal cookie is always sent, whether or not the request
/// carried a session.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<&'static str>) {
    tracing::info!("Logout");
    let mut cookie = Cookie::build((TOKEN_COOKIE, "")).path("/").build();
    cookie.make_removal();
    (jar.add(cookie), Json("ok"))
}
