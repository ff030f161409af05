use crate::{
    model::form::AnswerValue,
    server::{data::response::ResponseRepository, model::form::Answer},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_form_id;
