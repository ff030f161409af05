use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        comment::{CommentDto, CreateCommentDto},
        form::{
            AnswerDto, AnswerValue, CreateFormDto, FormDto, QuestionDto, QuestionInputDto,
            QuestionType, ResponseDto, SubmitResponseDto, SubmitResponseResultDto, UpdateFormDto,
        },
        gallery::{CreateVideoDto, PhotoDto, PhotoUploadForm, VideoDto},
        member::{MemberDto, MemberInputDto},
        news::{CreateNewsDto, NewsDto, UpdateNewsDto},
        upload::{UploadForm, UploadResultDto},
    },
    server::{
        controller::{
            comment, form_admin, form_public, gallery, health, member, news, upload,
        },
        service::media::MAX_UPLOAD_BYTES,
        state::AppState,
    },
};

/// Request body ceiling for multipart routes: the image limit plus room for the
/// multipart framing and text fields, so an image just at the limit still parses.
const MULTIPART_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "CUSAP API", description = "Student association platform backend"),
    paths(
        health::index,
        upload::upload_image,
        member::create_member,
        member::get_members,
        member::get_member,
        member::update_member,
        member::delete_member,
        comment::create_comment,
        comment::get_comments,
        news::create_news,
        news::get_news_list,
        news::get_news,
        news::update_news,
        news::delete_news,
        gallery::create_photo,
        gallery::get_photos,
        gallery::delete_photo,
        gallery::create_video,
        gallery::get_videos,
        gallery::delete_video,
        form_admin::create_form,
        form_admin::get_forms,
        form_admin::get_form,
        form_admin::update_form,
        form_admin::delete_form,
        form_admin::get_form_responses,
        form_public::get_public_form,
        form_public::submit_form_response,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UploadForm,
        UploadResultDto,
        MemberDto,
        MemberInputDto,
        CommentDto,
        CreateCommentDto,
        NewsDto,
        CreateNewsDto,
        UpdateNewsDto,
        PhotoDto,
        PhotoUploadForm,
        VideoDto,
        CreateVideoDto,
        QuestionType,
        QuestionDto,
        QuestionInputDto,
        FormDto,
        CreateFormDto,
        UpdateFormDto,
        AnswerValue,
        AnswerDto,
        SubmitResponseDto,
        SubmitResponseResultDto,
        ResponseDto,
    )),
    tags(
        (name = "upload", description = "Image uploads"),
        (name = "member", description = "Association members"),
        (name = "comment", description = "Visitor comments"),
        (name = "news", description = "News articles"),
        (name = "gallery", description = "Photo and video gallery"),
        (name = "form-admin", description = "Form builder administration"),
        (name = "form-public", description = "Public form display and submission"),
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let uploads = ServeDir::new(state.media.dir());

    Router::new()
        .route("/", get(health::index))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route(
            "/upload",
            post(upload::upload_image).layer(DefaultBodyLimit::max(MULTIPART_BODY_LIMIT)),
        )
        .route("/member", post(member::create_member).get(member::get_members))
        .route(
            "/member/{id}",
            get(member::get_member)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .route(
            "/comment",
            post(comment::create_comment).get(comment::get_comments),
        )
        .route("/news", post(news::create_news).get(news::get_news_list))
        .route(
            "/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route(
            "/photos",
            post(gallery::create_photo)
                .layer(DefaultBodyLimit::max(MULTIPART_BODY_LIMIT))
                .get(gallery::get_photos),
        )
        .route("/photos/{id}", delete(gallery::delete_photo))
        .route(
            "/videos",
            post(gallery::create_video).get(gallery::get_videos),
        )
        .route("/videos/{id}", delete(gallery::delete_video))
        .route(
            "/api/admin/forms",
            post(form_admin::create_form).get(form_admin::get_forms),
        )
        .route(
            "/api/admin/forms/{id}",
            get(form_admin::get_form)
                .put(form_admin::update_form)
                .delete(form_admin::delete_form),
        )
        .route(
            "/api/admin/forms/{id}/responses",
            get(form_admin::get_form_responses),
        )
        .route(
            "/api/public/forms/{id}",
            get(form_public::get_public_form),
        )
        .route(
            "/api/public/forms/{id}/submit",
            post(form_public::submit_form_response),
        )
        .nest_service("/uploads", uploads)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
