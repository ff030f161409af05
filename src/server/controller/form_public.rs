use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        form::{FormDto, SubmitResponseDto, SubmitResponseResultDto},
    },
    server::{
        error::AppError,
        model::form::SubmitResponseParams,
        service::form::public::FormPublicService,
        state::AppState,
        util::{
            parse::parse_id,
            request::{ClientAddr, JsonBody},
        },
    },
};

/// Tag for grouping public form endpoints in OpenAPI documentation
pub static FORM_PUBLIC_TAG: &str = "form-public";

/// Get an active form for display.
///
/// # Returns
/// - `200 OK` - The form
/// - `404 Not Found` - No form with this id, or the form is inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/forms/{id}",
    tag = FORM_PUBLIC_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved form", body = FormDto),
        (status = 404, description = "Form not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Form")?;

    let service = FormPublicService::new(&state.db);

    let form = service.get_active(id).await?;

    Ok(Json(form.into_dto()))
}

/// Submit answers to an active form.
///
/// Answers are checked against the form's questions before anything is stored. The
/// caller's address is recorded with the response.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `client` - Caller address from `X-Forwarded-For` or the socket peer
/// - `id` - Form ID
/// - `payload` - Answers keyed by question id
///
/// # Returns
/// - `201 Created` - Response stored
/// - `400 Bad Request` - Answers do not fit the form
/// - `404 Not Found` - No form with this id, or the form is inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/public/forms/{id}/submit",
    tag = FORM_PUBLIC_TAG,
    params(
        ("id" = i32, Path, description = "Form ID")
    ),
    request_body = SubmitResponseDto,
    responses(
        (status = 201, description = "Response submitted", body = SubmitResponseResultDto),
        (status = 400, description = "Invalid answers", body = ErrorDto),
        (status = 404, description = "Form not found or inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_form_response(
    State(state): State<AppState>,
    ClientAddr(ip_address): ClientAddr,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<SubmitResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Form")?;

    let service = FormPublicService::new(&state.db);

    let response_id = service
        .submit(SubmitResponseParams::from_dto(id, payload, ip_address))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponseResultDto {
            message: "Response submitted successfully".to_string(),
            id: response_id,
        }),
    ))
}
