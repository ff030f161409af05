//! Image upload handling.
//!
//! `MediaStorage` validates image payloads and keeps them in the local upload directory,
//! which the router serves under `/uploads`. `ImageHost` forwards images to a remote
//! ImgBB-compatible host instead. Both apply the same MIME and size checks.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::body::Bytes;
use rand::Rng;
use serde::Deserialize;
use url::Url;

use crate::server::error::media::MediaError;

/// Upload ceiling in bytes. Payloads of exactly this size are accepted.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// URL path prefix under which local blobs are served.
pub const UPLOADS_PATH: &str = "/uploads/";

/// An image payload received from a client.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Multipart field name the file arrived under.
    pub field: String,
    /// Original file name as sent by the client.
    pub file_name: Option<String>,
    /// Declared MIME type.
    pub content_type: String,
    pub data: Bytes,
}

impl Upload {
    /// Checks the declared type and payload size.
    ///
    /// # Returns
    /// - `Ok(())` - Payload is an image within the size ceiling
    /// - `Err(MediaError::UnsupportedMediaType)` - Type is not `image/*`
    /// - `Err(MediaError::PayloadTooLarge)` - Payload exceeds 5 MiB
    pub fn validate(&self) -> Result<(), MediaError> {
        if !self.content_type.to_ascii_lowercase().starts_with("image/") {
            return Err(MediaError::UnsupportedMediaType(self.content_type.clone()));
        }

        if self.data.len() > MAX_UPLOAD_BYTES {
            return Err(MediaError::PayloadTooLarge {
                size: Some(self.data.len()),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        Ok(())
    }

    /// File extension including the leading dot, or an empty string.
    ///
    /// Taken from the original file name when it has a plain alphanumeric extension,
    /// otherwise derived from the MIME subtype.
    fn extension(&self) -> String {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| ext.to_ascii_lowercase());

        let ext = from_name.or_else(|| {
            let subtype = self.content_type.split('/').nth(1)?.to_ascii_lowercase();
            let ext = match subtype.as_str() {
                "jpeg" | "pjpeg" => "jpg".to_string(),
                "svg+xml" => "svg".to_string(),
                "x-icon" | "vnd.microsoft.icon" => "ico".to_string(),
                other => other.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
            };
            (!ext.is_empty()).then_some(ext)
        });

        ext.map(|ext| format!(".{}", ext)).unwrap_or_default()
    }

    /// Generates the stored name `<field>-<unix-millis>-<random><.ext>`.
    fn generate_filename(&self) -> String {
        let field: String = self
            .field
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        let field = if field.is_empty() { "file".to_string() } else { field };

        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = rand::rng().random_range(0..1_000_000_000u32);

        format!("{}-{}-{}{}", field, millis, suffix, self.extension())
    }
}

/// Result of storing a blob locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Public URL of the blob.
    pub url: String,
    /// Generated file name inside the upload directory.
    pub filename: String,
}

/// Local blob storage rooted at the upload directory.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    dir: Arc<PathBuf>,
}

impl MediaStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir: Arc::new(dir) }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validates and writes an upload to the upload directory.
    ///
    /// # Arguments
    /// - `upload` - Image payload
    /// - `base_url` - Public base URL, without trailing slash
    ///
    /// # Returns
    /// - `Ok(StoredMedia)` - Blob written; URL is `<base_url>/uploads/<filename>`
    /// - `Err(MediaError)` - Validation failed or the file could not be written
    pub async fn store(&self, upload: &Upload, base_url: &str) -> Result<StoredMedia, MediaError> {
        upload.validate()?;

        let filename = upload.generate_filename();
        tokio::fs::write(self.dir.join(&filename), &upload.data).await?;

        tracing::debug!("Stored upload {} ({} bytes)", filename, upload.data.len());

        Ok(StoredMedia {
            url: format!(
                "{}{}{}",
                base_url.trim_end_matches('/'),
                UPLOADS_PATH,
                filename
            ),
            filename,
        })
    }

    /// Removes the local blob a stored URL points to.
    ///
    /// Accepts absolute URLs and root-relative paths. URLs whose path is not under
    /// `/uploads/` belong to a remote host and are ignored. Failures are logged and
    /// swallowed.
    ///
    /// # Returns
    /// - `true` - A local blob was removed
    /// - `false` - Nothing was removed
    pub async fn remove_by_url(&self, url: &str) -> bool {
        let Some(filename) = local_filename(url) else {
            return false;
        };

        match tokio::fs::remove_file(self.dir.join(&filename)).await {
            Ok(()) => {
                tracing::debug!("Removed upload {}", filename);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to remove upload {}: {}", filename, e);
                false
            }
        }
    }
}

/// Extracts a safe local file name from a stored URL.
fn local_filename(url: &str) -> Option<String> {
    let url = url.trim();
    let parsed = if url.starts_with('/') {
        Url::parse("http://localhost").ok()?.join(url).ok()?
    } else {
        Url::parse(url).ok()?
    };

    if !parsed.path().starts_with(UPLOADS_PATH) {
        return None;
    }

    let filename = parsed.path_segments()?.next_back()?.to_string();

    let safe = !filename.is_empty()
        && !filename.starts_with('.')
        && filename
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if !safe {
        tracing::warn!("Refusing to remove upload with unsafe name '{}'", filename);
        return None;
    }

    Some(filename)
}

#[derive(Deserialize)]
struct ImageHostReply {
    data: ImageHostData,
}

#[derive(Deserialize)]
struct ImageHostData {
    url: String,
}

/// Client for a remote ImgBB-compatible image host.
#[derive(Debug, Clone)]
pub struct ImageHost {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
}

impl ImageHost {
    pub fn new(http_client: reqwest::Client, url: String, api_key: String) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }

    /// Uploads an image and returns the URL the host assigned to it.
    ///
    /// Sends a multipart POST with `key` and `image` fields and reads `data.url` from
    /// the JSON reply.
    ///
    /// # Returns
    /// - `Ok(String)` - Remote image URL
    /// - `Err(MediaError::UnsupportedMediaType | PayloadTooLarge)` - Validation failed
    /// - `Err(MediaError::RemoteHost)` - Request failed, non-success status, or bad reply
    pub async fn upload(&self, upload: &Upload) -> Result<String, MediaError> {
        upload.validate()?;

        let part = reqwest::multipart::Part::bytes(upload.data.to_vec())
            .file_name(upload.generate_filename())
            .mime_str(&upload.content_type)
            .map_err(|e| MediaError::UnsupportedMediaType(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("key", self.api_key.clone())
            .part("image", part);

        let response = self
            .http_client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::RemoteHost(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::RemoteHost(format!(
                "image host replied with status {}",
                status
            )));
        }

        let reply: ImageHostReply = response
            .json()
            .await
            .map_err(|e| MediaError::RemoteHost(format!("unreadable reply: {}", e)))?;

        Ok(reply.data.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, size: usize) -> Upload {
        Upload {
            field: "file".to_string(),
            file_name: Some("picture.PNG".to_string()),
            content_type: content_type.to_string(),
            data: Bytes::from(vec![0u8; size]),
        }
    }

    #[tokio::test]
    async fn rejects_non_image_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path().to_path_buf());

        let result = storage
            .store(&upload("application/pdf", 128), "http://localhost:4000")
            .await;

        assert!(matches!(result, Err(MediaError::UnsupportedMediaType(t)) if t == "application/pdf"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn rejects_payload_above_limit() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path().to_path_buf());

        let result = storage
            .store(&upload("image/png", 6 * 1024 * 1024), "http://localhost:4000")
            .await;

        assert!(matches!(
            result,
            Err(MediaError::PayloadTooLarge { size: Some(size), limit }) if size == 6 * 1024 * 1024 && limit == MAX_UPLOAD_BYTES
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn accepts_payload_at_and_below_limit() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path().to_path_buf());

        for size in [4 * 1024 * 1024, MAX_UPLOAD_BYTES] {
            let stored = storage
                .store(&upload("image/png", size), "http://localhost:4000/")
                .await
                .unwrap();

            assert!(stored.url.starts_with("http://localhost:4000/uploads/file-"));
            assert!(stored.url.ends_with(&stored.filename));
            assert!(stored.filename.ends_with(".png"));
            let written = std::fs::metadata(dir.path().join(&stored.filename)).unwrap();
            assert_eq!(written.len() as usize, size);
        }
    }

    #[test]
    fn derives_extension_from_mime_without_file_name() {
        let mut jpeg = upload("image/jpeg", 1);
        jpeg.file_name = None;
        assert_eq!(jpeg.extension(), ".jpg");

        let mut svg = upload("image/svg+xml", 1);
        svg.file_name = Some("no-extension".to_string());
        assert_eq!(svg.extension(), ".svg");
    }

    #[tokio::test]
    async fn removes_local_blob_by_absolute_and_relative_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path().to_path_buf());

        let first = storage
            .store(&upload("image/png", 16), "http://example.org")
            .await
            .unwrap();
        let second = storage
            .store(&upload("image/png", 16), "http://example.org")
            .await
            .unwrap();

        assert!(storage.remove_by_url(&first.url).await);
        assert!(storage
            .remove_by_url(&format!("/uploads/{}", second.filename))
            .await);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn leaves_storage_untouched_for_remote_or_missing_blobs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path().to_path_buf());
        let kept = storage
            .store(&upload("image/png", 16), "http://example.org")
            .await
            .unwrap();

        assert!(!storage.remove_by_url("https://i.ibb.co/abc/photo.png").await);
        assert!(!storage.remove_by_url("http://example.org/uploads/missing.png").await);
        assert!(!storage.remove_by_url("/uploads/..%2Fsecret").await);
        assert!(!storage.remove_by_url("not a url").await);
        assert!(dir.path().join(&kept.filename).exists());
    }
}
