//! Fake media uploaders

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use inkpress::backend::media::{MediaUploader, UploadError};

/// Accepts every upload and remembers what it was sent
#[derive(Default)]
pub struct RecordingUploader {
    calls: AtomicUsize,
    received: Mutex<Vec<Bytes>>,
}

impl RecordingUploader {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Bytes> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for RecordingUploader {
    async fn upload(&self, data: Bytes) -> Result<String, UploadError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.received.lock().unwrap().push(data);
        Ok(format!("https://cdn.test/covers/{}.png", n))
    }
}

/// Rejects every upload like a provider would
pub struct FailingUploader;

#[async_trait]
impl MediaUploader for FailingUploader {
    async fn upload(&self, _data: Bytes) -> Result<String, UploadError> {
        Err(UploadError::Provider {
            status: 400,
            message: "Invalid image file".to_string(),
        })
    }
}
