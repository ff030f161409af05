use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{MemberDto, MemberInputDto},
    },
    server::{
        error::AppError, model::member::MemberParams, service::member::MemberService,
        state::AppState, util::{parse::parse_id, request::JsonBody},
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Create a member.
///
/// # Returns
/// - `201 Created` - Stored member
/// - `400 Bad Request` - Name is missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/member",
    tag = MEMBER_TAG,
    request_body = MemberInputDto,
    responses(
        (status = 201, description = "Successfully created member", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MemberInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let member = service.create(MemberParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Get all members.
#[utoipa::path(
    get,
    path = "/member",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let members = service.get_all().await?;

    Ok(Json(
        members.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a member by id.
#[utoipa::path(
    get,
    path = "/member/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Member")?;

    let service = MemberService::new(&state.db);

    let member = service.get_by_id(id).await?;

    Ok(Json(member.into_dto()))
}

/// Replace all fields of an existing member.
///
/// Never creates a member; an unknown id is a 404.
///
/// # Returns
/// - `200 OK` - Updated member
/// - `400 Bad Request` - Name is missing
/// - `404 Not Found` - No member with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/member/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = MemberInputDto,
    responses(
        (status = 200, description = "Successfully updated member", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<MemberInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Member")?;

    let service = MemberService::new(&state.db);

    let member = service.update(id, MemberParams::from_dto(payload)).await?;

    Ok(Json(member.into_dto()))
}

/// Delete a member and its locally stored photo.
///
/// # Returns
/// - `204 No Content` - Member deleted
/// - `404 Not Found` - No member with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/member/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted member"),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Member")?;

    let service = MemberService::new(&state.db);

    service.delete(id, &state.media).await?;

    Ok(StatusCode::NO_CONTENT)
}
