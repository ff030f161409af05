use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        news::{CreateNewsDto, NewsDto, UpdateNewsDto},
    },
    server::{
        error::AppError,
        model::news::{CreateNewsParams, UpdateNewsParams},
        service::news::NewsService,
        state::AppState,
        util::{parse::parse_id, request::JsonBody},
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

#[derive(Deserialize)]
pub struct NewsListParams {
    /// Omit article bodies when true.
    #[serde(default)]
    pub summary: bool,
}

/// Publish a news article.
///
/// The article is dated now, starts with zero views and status "published".
///
/// # Returns
/// - `201 Created` - Stored article
/// - `400 Bad Request` - Title or content is missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "Successfully created news", body = ApiResponse<NewsDto>),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NewsService::new(&state.db);

    let news = service.create(CreateNewsParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "News created successfully",
            news.into_dto(),
        )),
    ))
}

/// Get all news articles, newest first.
///
/// With `summary=true` the article bodies are left out.
#[utoipa::path(
    get,
    path = "/news",
    tag = NEWS_TAG,
    params(
        ("summary" = Option<bool>, Query, description = "Omit article content (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved news", body = ApiResponse<Vec<NewsDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_list(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = NewsService::new(&state.db);

    let news = service.get_all().await?;

    let news: Vec<NewsDto> = if params.summary {
        news.into_iter().map(|n| n.into_summary_dto()).collect()
    } else {
        news.into_iter().map(|n| n.into_dto()).collect()
    };

    Ok(Json(ApiResponse::data(news)))
}

/// Get a news article by id.
#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved news", body = ApiResponse<NewsDto>),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "News")?;

    let service = NewsService::new(&state.db);

    let news = service.get_by_id(id).await?;

    Ok(Json(ApiResponse::data(news.into_dto())))
}

/// Update a news article.
///
/// Merges the provided fields; absent fields keep their stored value.
///
/// # Returns
/// - `200 OK` - Updated article
/// - `400 Bad Request` - Provided title or content is blank
/// - `404 Not Found` - No article with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "Successfully updated news", body = ApiResponse<NewsDto>),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "News")?;

    let service = NewsService::new(&state.db);

    let news = service
        .update(UpdateNewsParams::from_dto(id, payload))
        .await?;

    Ok(Json(ApiResponse::with_message(
        "News updated successfully",
        news.into_dto(),
    )))
}

/// Delete a news article and its locally stored image.
///
/// # Returns
/// - `200 OK` - Article deleted
/// - `404 Not Found` - No article with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted news"),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "News")?;

    let service = NewsService::new(&state.db);

    service.delete(id, &state.media).await?;

    Ok(Json(ApiResponse::message("News deleted successfully")))
}
