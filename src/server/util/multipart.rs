use std::collections::HashMap;

use axum::extract::{multipart::MultipartError, Multipart};
use axum::http::StatusCode;

use crate::server::{
    error::media::MediaError,
    service::media::{Upload, MAX_UPLOAD_BYTES},
};

/// Fully read multipart body: file parts plus plain text fields.
#[derive(Debug, Default)]
pub struct MultipartForm {
    files: Vec<Upload>,
    fields: HashMap<String, String>,
}

impl MultipartForm {
    /// Reads every part of the body.
    ///
    /// Parts carrying a file name are collected as uploads, all others as text fields.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - Body read completely
    /// - `Err(MediaError::PayloadTooLarge)` - Body exceeded the request size limit
    /// - `Err(MediaError::InvalidMultipart)` - Malformed body
    pub async fn read(mut multipart: Multipart) -> Result<Self, MediaError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field.bytes().await.map_err(map_multipart_error)?;

                    form.files.push(Upload {
                        field: name,
                        file_name: Some(file_name),
                        content_type,
                        data,
                    });
                }
                None => {
                    let value = field.text().await.map_err(map_multipart_error)?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Takes the first file uploaded under any of the given field names.
    pub fn take_file(&mut self, names: &[&str]) -> Option<Upload> {
        let position = self
            .files
            .iter()
            .position(|file| names.contains(&file.field.as_str()))?;

        Some(self.files.remove(position))
    }

    /// Returns a text field, ignoring blank values.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

fn map_multipart_error(err: MultipartError) -> MediaError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MediaError::PayloadTooLarge {
            size: None,
            limit: MAX_UPLOAD_BYTES,
        }
    } else {
        MediaError::InvalidMultipart(err.body_text())
    }
}
