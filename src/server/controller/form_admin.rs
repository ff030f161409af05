use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        form::{CreateFormDto, FormDto, ResponseDto, UpdateFormDto},
    },
    server::{
        error::AppError,
        model::form::{CreateFormParams, UpdateFormParams},
        service::form::admin::FormAdminService,
        state::AppState,
        util::{parse::parse_id, request::JsonBody},
    },
};

/// Tag for grouping form administration endpoints in OpenAPI documentation
pub static FORM_ADMIN_TAG: &str = "form-admin";

/// Create a new form.
///
/// Creates an active form with the provided title, optional description and ordered
/// list of questions.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Form title, description and questions
///
/// # Returns
/// - `201 Created` - Successfully created form
/// - `400 Bad Request` - Missing title, blank question text or unknown question type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/forms",
    tag = FORM_ADMIN_TAG,
    request_body = CreateFormDto,
    responses(
        (status = 201, description = "Successfully created form", body = FormDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_form(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FormAdminService::new(&state.db);

    let form = service.create(CreateFormParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(form.into_dto())))
}

/// Get all forms.
///
/// Returns every form, active or not, newest first.
///
/// # Returns
/// - `200 OK` - List of forms
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/forms",
    tag = FORM_ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved forms", body = Vec<FormDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FormAdminService::new(&state.db);

    let forms = service.get_all().await?;

    Ok(Json(
        forms.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a form by id, including inactive forms.
///
/// # Returns
/// - `200 OK` - The form
/// - `404 Not Found` - No form with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/forms/{id}",
    tag = FORM_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved form", body = FormDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Form")?;

    let service = FormAdminService::new(&state.db);

    let form = service.get_by_id(id).await?;

    Ok(Json(form.into_dto()))
}

/// Update a form.
///
/// Merges the provided fields into the form. A provided `questions` list replaces the
/// stored one: entries with the id of an existing question update it, entries without
/// are added, and questions left out are removed.
///
/// # Returns
/// - `200 OK` - Updated form
/// - `400 Bad Request` - A provided field is invalid
/// - `404 Not Found` - No form with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/forms/{id}",
    tag = FORM_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    request_body = UpdateFormDto,
    responses(
        (status = 200, description = "Successfully updated form", body = FormDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Form")?;

    let service = FormAdminService::new(&state.db);

    let form = service
        .update(UpdateFormParams::from_dto(id, payload))
        .await?;

    Ok(Json(form.into_dto()))
}

/// Delete a form together with all of its responses.
///
/// # Returns
/// - `200 OK` - Form deleted
/// - `404 Not Found` - No form with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/forms/{id}",
    tag = FORM_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted form", body = MessageDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Form")?;

    let service = FormAdminService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Form deleted successfully".to_string(),
    }))
}

/// Get the responses submitted to a form, newest first.
///
/// Unknown form ids yield an empty list.
///
/// # Returns
/// - `200 OK` - List of responses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/forms/{id}/responses",
    tag = FORM_ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved responses", body = Vec<ResponseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form_responses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // A malformed id cannot match any response.
    let Ok(id) = parse_id(&id, "Form") else {
        return Ok(Json(Vec::<ResponseDto>::new()));
    };

    let service = FormAdminService::new(&state.db);

    let responses = service.get_responses(id).await?;

    Ok(Json(
        responses
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
    ))
}
