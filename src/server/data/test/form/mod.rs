use crate::{
    model::form::QuestionType,
    server::{
        data::form::FormRepository,
        model::form::{FormChanges, FormDraft, NewQuestion},
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

fn question(text: &str, question_type: QuestionType, order: i32) -> NewQuestion {
    NewQuestion {
        id: None,
        question_text: text.to_string(),
        question_type,
        options: Vec::new(),
        required: false,
        order,
    }
}
