/**
 * Update Post Handler
 *
 * Implements `PUT /post`.
 *
 * # Process
 *
 * 1. Require a valid session (`AuthUser`)
 * 2. Parse the multipart form; `id` names the target post
 * 3. Load the post and check the caller is its author
 * 4. Upload a new cover image, if a non-empty file was sent
 * 5. Overwrite the fields that were sent; the stored cover is kept when no
 *    new file arrives
 *
 * Ownership is checked before any upload.
 */

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::{self, Post, PostUpdate};
use crate::backend::posts::handlers::cover::upload_cover;
use crate::backend::posts::handlers::types::PostForm;
use crate::backend::server::state::MediaService;

/// Update post handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not valid multipart, or no `id` field
/// * `401 Unauthorized` - no valid session
/// * `403 Forbidden` - caller is not the author
/// * `404 Not Found` - `id` is not a valid id or names no post
/// * `500 Internal Server Error` - upload or database failure
/// * `503 Service Unavailable` - file sent but no uploader configured
pub async fn update_post(
    State(pool): State<SqlitePool>,
    State(media): State<MediaService>,
    AuthUser(claims): AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Post>, BackendError> {
    let form = PostForm::from_multipart(multipart?).await?;

    let raw_id = form
        .id
        .as_deref()
        .ok_or_else(|| BackendError::validation("Post id is required"))?;
    let post_id = Uuid::parse_str(raw_id.trim())
        .map_err(|_| BackendError::not_found("Post not found"))?;

    tracing::info!(%post_id, user_id = %claims.id, "Update post request");

    let existing = db::get_post_by_id(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    if existing.author != claims.id {
        tracing::warn!(
            %post_id,
            user_id = %claims.id,
            author_id = %existing.author,
            "Update rejected for non-author"
        );
        return Err(BackendError::forbidden("You are not the author"));
    }

    let cover = upload_cover(&media, form.file).await?;

    let post = db::update_post(
        &pool,
        post_id,
        PostUpdate {
            title: form.title,
            summary: form.summary,
            content: form.content,
            cover,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => BackendError::not_found("Post not found"),
        other => BackendError::from(other),
    })?;

    tracing::info!(%post_id, "Post updated");
    Ok(Json(post))
}
