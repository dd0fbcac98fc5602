use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;
use chrono::Utc;
use image::ImageReader;
use tracing::warn;
use crate::entities::{new_entity_id, PhotoRecord};
use crate::error::FotovaultError;

/// A raw file-like input as handed over by a picker or drag-drop source.
#[derive(Debug, Clone)]
pub struct PendingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Object-URL-like registry for in-memory file content. Each handle must be
/// revoked exactly once; a second revoke of the same URL is a no-op.
#[derive(Debug, Default)]
pub struct PreviewStore {
    handles: HashMap<String, Vec<u8>>,
}

impl PreviewStore {
    pub fn create_url(&mut self, bytes: &[u8]) -> String {
        let url = format!("blob:fotovault/{}", new_entity_id());
        self.handles.insert(url.clone(), bytes.to_vec());
        url
    }

    pub fn resolve(&self, url: &str) -> Option<&[u8]> {
        self.handles.get(url).map(|x| x.as_slice())
    }

    /// Returns whether the handle was still live.
    pub fn revoke(&mut self, url: &str) -> bool {
        self.handles.remove(url).is_some()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// The set of files queued for upload, with one preview handle per file.
/// Non-image inputs are dropped silently on add.
#[derive(Debug, Default)]
pub struct PendingBatch {
    files: Vec<PendingFile>,
    previews: Vec<String>,
    preview_store: PreviewStore,
}

impl PendingBatch {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns whether the file was accepted into the batch.
    pub fn add(&mut self, file: PendingFile) -> bool {
        if !file.is_image() {
            return false;
        }
        let url = self.preview_store.create_url(&file.bytes);
        self.files.push(file);
        self.previews.push(url);
        true
    }

    /// Removes one queued file and revokes its preview handle.
    pub fn remove(&mut self, index: usize) -> Option<PendingFile> {
        if index >= self.files.len() {
            return None;
        }
        let url = self.previews.remove(index);
        self.preview_store.revoke(&url);
        Some(self.files.remove(index))
    }

    /// Cleanup path: revokes every outstanding preview handle.
    pub fn clear(&mut self) {
        for url in self.previews.drain(..) {
            self.preview_store.revoke(&url);
        }
        self.files.clear();
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    pub fn preview_store(&self) -> &PreviewStore {
        &self.preview_store
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Turns a batch of pending files into photo records, strictly one file at a
/// time in submission order, with a simulated per-file network delay.
pub struct Uploader {
    latency: Duration,
}

impl Default for Uploader {
    fn default() -> Self {
        Self { latency: Duration::from_millis(200) }
    }
}

impl Uploader {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Produces one record per decodable image file, in submission order.
    /// After each processed file, `on_progress` receives
    /// `round(completed / total * 100)`; the last value is exactly 100.
    ///
    /// A file that cannot be decoded is skipped and the rest of the batch
    /// continues. There is no cancellation: a started batch runs to the end.
    pub async fn upload<F>(
        &self,
        files: &[PendingFile],
        previews: &mut PreviewStore,
        mut on_progress: F,
    ) -> Vec<PhotoRecord>
    where
        F: FnMut(u8),
    {
        let files: Vec<&PendingFile> = files.iter().filter(|x| x.is_image()).collect();
        let total = files.len();
        let mut uploaded = Vec::with_capacity(total);
        for (i, file) in files.iter().enumerate() {
            match probe_dimensions(&file.bytes) {
                Ok((width, height)) => {
                    let url = previews.create_url(&file.bytes);
                    uploaded.push(PhotoRecord {
                        id: new_entity_id(),
                        url,
                        name: file.name.clone(),
                        width,
                        height,
                        upload_date: Utc::now(),
                    });
                }
                Err(e) => {
                    warn!("Skipping undecodable file {}: {}", file.name, e);
                }
            }
            on_progress((((i + 1) as f64 / total as f64) * 100.0).round() as u8);
            tokio::time::sleep(self.latency).await;
        }
        uploaded
    }
}

/// Decodes just the header of the encoded bytes to get pixel dimensions.
fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), FotovaultError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FotovaultError::DecodeFailure(image::ImageError::IoError(e)))?;
    reader.into_dimensions().map_err(FotovaultError::DecodeFailure)
}
