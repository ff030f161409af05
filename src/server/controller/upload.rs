use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadForm, UploadResultDto},
    },
    server::{
        error::{media::MediaError, AppError},
        state::AppState,
        util::{multipart::MultipartForm, request::BaseUrl},
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field names accepted for the uploaded file.
const UPLOAD_FIELDS: &[&str] = &["file", "photo"];

/// Upload an image to local storage.
///
/// Accepts the image under the `file` or `photo` multipart field and returns the public
/// URL it is served from.
///
/// # Returns
/// - `200 OK` - Image stored
/// - `400 Bad Request` - No file, not an image, or larger than 5 MB
/// - `500 Internal Server Error` - File system error
#[utoipa::path(
    post,
    path = "/upload",
    tag = UPLOAD_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully uploaded image", body = UploadResultDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart).await?;

    let upload = form.take_file(UPLOAD_FIELDS).ok_or(MediaError::NoFile)?;

    let stored = state.media.store(&upload, &base_url).await?;

    Ok(Json(UploadResultDto {
        success: true,
        image_url: stored.url,
        filename: stored.filename,
    }))
}
