//! Cover image upload shared by the create and update handlers

use bytes::Bytes;

use crate::backend::error::BackendError;
use crate::backend::server::state::MediaService;

/// Upload a cover image if one was sent
///
/// Returns `Ok(None)` when there is no file. A file with no uploader
/// configured is a 503; provider failures surface as upload errors (500).
pub async fn upload_cover(
    media: &MediaService,
    file: Option<Bytes>,
) -> Result<Option<String>, BackendError> {
    let Some(data) = file else {
        return Ok(None);
    };

    let uploader = media.as_ref().ok_or_else(|| {
        tracing::warn!("Cover image sent but no media uploader is configured");
        BackendError::service_unavailable("Media uploads are not configured")
    })?;

    let url = uploader.upload(data).await?;
    Ok(Some(url))
}
