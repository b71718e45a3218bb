/**
 * Create Post Handler
 *
 * Implements `POST /post`.
 *
 * # Process
 *
 * 1. Require a valid session (`AuthUser`)
 * 2. Parse the multipart form
 * 3. Upload the cover image, if a non-empty file was sent
 * 4. Insert the post with the caller as author
 *
 * The upload happens before the insert. If it fails, nothing is written.
 */

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::{self, NewPost, Post};
use crate::backend::posts::handlers::cover::upload_cover;
use crate::backend::posts::handlers::types::PostForm;
use crate::backend::server::state::MediaService;

/// Create post handler
///
/// Missing text fields are stored as empty strings.
///
/// # Errors
///
/// * `400 Bad Request` - body is not valid multipart
/// * `401 Unauthorized` - no valid session
/// * `500 Internal Server Error` - upload or database failure
/// * `503 Service Unavailable` - file sent but no uploader configured
pub async fn create_post(
    State(pool): State<SqlitePool>,
    State(media): State<MediaService>,
    AuthUser(claims): AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Post>, BackendError> {
    let form = PostForm::from_multipart(multipart?).await?;
    tracing::info!(
        user_id = %claims.id,
        has_file = form.file.is_some(),
        "Create post request"
    );

    let cover = upload_cover(&media, form.file).await?;

    let post = db::create_post(
        &pool,
        NewPost {
            title: form.title.unwrap_or_default(),
            summary: form.summary.unwrap_or_default(),
            content: form.content.unwrap_or_default(),
            cover,
            author: claims.id,
        },
    )
    .await?;

    tracing::info!(post_id = %post.id, user_id = %claims.id, "Post created");
    Ok(Json(post))
}
