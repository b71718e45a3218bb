/**
 * Post Form Parsing
 *
 * `POST /post` and `PUT /post` take `multipart/form-data` with the text
 * fields `id`, `title`, `summary`, `content` and an optional `file` part.
 * Unknown fields are skipped. A `file` part with no bytes counts as no file,
 * which is what browsers send for an untouched file input.
 */

use axum::extract::Multipart;
use bytes::Bytes;

use crate::backend::error::BackendError;

/// Multipart field carrying the cover image
pub const FILE_FIELD: &str = "file";

/// Parsed post form
#[derive(Debug, Default, Clone)]
pub struct PostForm {
    /// Target post (update only)
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    /// Cover image bytes, never empty
    pub file: Option<Bytes>,
}

impl PostForm {
    /// Drain a multipart body into a form
    ///
    /// # Errors
    ///
    /// * `400 Bad Request` - malformed multipart body or non-UTF-8 text field
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, BackendError> {
        let mut form = PostForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                FILE_FIELD => {
                    let data = field.bytes().await?;
                    if data.is_empty() {
                        tracing::debug!("Ignoring empty file part");
                    } else {
                        form.file = Some(data);
                    }
                }
                "id" => form.id = Some(field.text().await?),
                "title" => form.title = Some(field.text().await?),
                "summary" => form.summary = Some(field.text().await?),
                "content" => form.content = Some(field.text().await?),
                other => {
                    tracing::debug!(field = %other, "Skipping unknown form field");
                }
            }
        }

        Ok(form)
    }
}
