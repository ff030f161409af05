use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, model::comment::CreateCommentParams, service::comment::CommentService,
        state::AppState, util::request::JsonBody,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Post a comment.
///
/// # Returns
/// - `201 Created` - Stored comment
/// - `400 Bad Request` - Message is missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/comment",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comment = service
        .create(CreateCommentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Get all comments, oldest first.
#[utoipa::path(
    get,
    path = "/comment",
    tag = COMMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments = service.get_all().await?;

    Ok(Json(
        comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>(),
    ))
}
