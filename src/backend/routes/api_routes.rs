/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Accounts
 * - `POST /register` - User registration
 * - `POST /login` - User login, sets the `token` cookie
 * - `GET /profile` - Decoded session claims (requires session)
 * - `POST /logout` - Clear the `token` cookie
 *
 * ## Posts
 * - `POST /post` - Create a post (requires session, multipart)
 * - `PUT /post` - Update own post (requires session, multipart)
 * - `GET /post` - 20 most recent posts
 * - `GET /post/{id}` - Single post
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, profile, register};
use crate::backend::posts::{create_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Configure account routes
///
/// `/profile` is guarded by the `AuthUser` extractor in its handler; the
/// other three are public.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/logout", post(logout))
}

/// Configure post routes
///
/// `max_upload_bytes` caps the request body for `/post`, which carries the
/// cover image for create and update.
pub fn configure_post_routes(
    router: Router<AppState>,
    max_upload_bytes: usize,
) -> Router<AppState> {
    router
        .route(
            "/post",
            post(create_post)
                .put(update_post)
                .get(list_posts)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/post/{id}", get(get_post))
}
