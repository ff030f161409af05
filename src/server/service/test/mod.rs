use crate::{
    model::form::{AnswerValue, QuestionType},
    server::{
        error::{media::MediaError, AppError},
        model::{
            form::{Answer, CreateFormParams, QuestionParams, SubmitResponseParams, UpdateFormParams},
            gallery::{CreatePhotoParams, CreateVideoParams, PhotoStorage},
            member::MemberParams,
            news::{CreateNewsParams, UpdateNewsParams},
        },
        service::{
            form::{admin::FormAdminService, public::FormPublicService},
            gallery::{PhotoService, VideoService},
            media::{MediaStorage, Upload},
            member::MemberService,
            news::NewsService,
        },
    },
};
use axum::body::Bytes;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};


fn question(text: &str, question_type: &str) -> QuestionParams {
    QuestionParams {
        question_text: text.to_string(),
        question_type: question_type.to_string(),
        ..Default::default()
    }
}

fn image(field: &str) -> Upload {
    Upload {
        field: field.to_string(),
        file_name: Some("picture.png".to_string()),
        content_type: "image/png".to_string(),
        data: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    }
}

fn files_in(storage: &MediaStorage) -> usize {
    std::fs::read_dir(storage.dir()).unwrap().count()
}
