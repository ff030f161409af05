use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        gallery::{CreateVideoDto, PhotoDto, PhotoUploadForm, VideoDto},
    },
    server::{
        error::AppError,
        model::gallery::{CreatePhotoParams, CreateVideoParams, PhotoStorage},
        service::gallery::{PhotoService, VideoService},
        state::AppState,
        util::{
            multipart::MultipartForm,
            parse::parse_id,
            request::{BaseUrl, JsonBody},
        },
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// Multipart field names accepted for the photo file.
const PHOTO_FIELDS: &[&str] = &["image", "photo", "file"];

/// Add a photo to the gallery.
///
/// Reads the image and its metadata from a multipart body. The image is kept in local
/// storage, or sent to the remote image host when the `storage` field is `remote`.
///
/// # Returns
/// - `201 Created` - Stored photo
/// - `400 Bad Request` - Missing or rejected image, bad date, or remote storage unavailable
/// - `502 Bad Gateway` - Remote image host failed
/// - `500 Internal Server Error` - Database or file system error
#[utoipa::path(
    post,
    path = "/photos",
    tag = GALLERY_TAG,
    request_body(content = PhotoUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully added photo", body = ApiResponse<PhotoDto>),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 502, description = "Image host upload failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_photo(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = MultipartForm::read(multipart).await?;

    let storage = match form.text("storage") {
        Some(value) if value.eq_ignore_ascii_case("remote") => PhotoStorage::Remote,
        _ => PhotoStorage::Local,
    };

    let params = CreatePhotoParams {
        image: form.take_file(PHOTO_FIELDS),
        title: form.text("title").map(str::to_string),
        description: form.text("description").map(str::to_string),
        date: form.text("date").map(str::to_string),
        storage,
        base_url,
    };

    let service = PhotoService::new(&state.db);

    let photo = service
        .create(params, &state.media, state.image_host.as_ref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Photo added successfully",
            photo.into_dto(),
        )),
    ))
}

/// Get all photos, newest date first.
#[utoipa::path(
    get,
    path = "/photos",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved photos", body = Vec<PhotoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_photos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PhotoService::new(&state.db);

    let photos = service.get_all().await?;

    Ok(Json(
        photos.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Delete a photo and its locally stored image.
#[utoipa::path(
    delete,
    path = "/photos/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Photo ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted photo"),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Photo")?;

    let service = PhotoService::new(&state.db);

    service.delete(id, &state.media).await?;

    Ok(Json(ApiResponse::message("Photo deleted successfully")))
}

/// Add a video link to the gallery.
///
/// # Returns
/// - `201 Created` - Stored video
/// - `400 Bad Request` - Missing title or URL, or bad date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/videos",
    tag = GALLERY_TAG,
    request_body = CreateVideoDto,
    responses(
        (status = 201, description = "Successfully added video", body = ApiResponse<VideoDto>),
        (status = 400, description = "Invalid video data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_video(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateVideoDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VideoService::new(&state.db);

    let video = service.create(CreateVideoParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Video added successfully",
            video.into_dto(),
        )),
    ))
}

/// Get all videos, newest date first.
#[utoipa::path(
    get,
    path = "/videos",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved videos", body = Vec<VideoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_videos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = VideoService::new(&state.db);

    let videos = service.get_all().await?;

    Ok(Json(
        videos.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Delete a video.
#[utoipa::path(
    delete,
    path = "/videos/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted video"),
        (status = 404, description = "Video not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Video")?;

    let service = VideoService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(ApiResponse::message("Video deleted successfully")))
}
