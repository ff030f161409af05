use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum MediaError {
    /// The multipart body carried no file under any accepted field name.
    #[error("No file uploaded")]
    NoFile,

    /// Declared content type is not `image/*`.
    #[error("Only image files are allowed, got '{0}'")]
    UnsupportedMediaType(String),

    /// Payload exceeds the upload ceiling.
    #[error("File too large. Maximum size is {}MB", .limit / (1024 * 1024))]
    PayloadTooLarge {
        /// Size of the rejected payload in bytes, when known
        size: Option<usize>,
        /// Upload ceiling in bytes
        limit: usize,
    },

    /// Multipart body could not be parsed.
    #[error("Invalid multipart payload: {0}")]
    InvalidMultipart(String),

    /// Remote image host refused the upload or replied with an unreadable body.
    #[error("Image host upload failed: {0}")]
    RemoteHost(String),

    /// Reading or writing the local blob failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts media errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing file, wrong type, oversize payload, malformed multipart
/// - 502 Bad Gateway - Image host failure
/// - 500 Internal Server Error - File system failure
impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        match self {
            Self::NoFile
            | Self::UnsupportedMediaType(_)
            | Self::PayloadTooLarge { .. }
            | Self::InvalidMultipart(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::RemoteHost(ref msg) => {
                tracing::error!("Image host error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Image host upload failed".to_string(),
                    }),
                )
                    .into_response()
            }
            err @ Self::Io(_) => InternalServerError(err).into_response(),
        }
    }
}
