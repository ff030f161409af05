//! Form builder domain models and parameters.
//!
//! A form owns an ordered list of questions and is either active (publicly visible and
//! accepting submissions) or inactive. Responses are stored separately and carry one
//! answer per question. Question options and answer values are persisted as JSON text
//! and decoded at the repository boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::form::{
    AnswerDto, AnswerValue, CreateFormDto, FormDto, QuestionDto, QuestionInputDto, QuestionType,
    ResponseDto, SubmitResponseDto, UpdateFormDto,
};

/// A single question of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub form_id: i32,
    pub question_text: String,
    pub question_type: QuestionType,
    /// Allowed choices; only meaningful for radio, checkbox and dropdown questions.
    pub options: Vec<String>,
    pub required: bool,
    pub order: i32,
}

impl Question {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Question)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored question type or options column could not be decoded
    pub fn from_entity(entity: entity::form_question::Model) -> Result<Self, DbErr> {
        let question_type = entity
            .question_type
            .parse::<QuestionType>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse question_type: {}", e)))?;
        let options = serde_json::from_str::<Vec<String>>(&entity.options)
            .map_err(|e| DbErr::Custom(format!("Failed to parse question options: {}", e)))?;

        Ok(Self {
            id: entity.id,
            form_id: entity.form_id,
            question_text: entity.question_text,
            question_type,
            options,
            required: entity.required,
            order: entity.order,
        })
    }

    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            question_text: self.question_text,
            question_type: self.question_type,
            options: self.options,
            required: self.required,
            order: self.order,
        }
    }
}

/// A form with its questions sorted by `order`, ties broken by question id.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// Converts a form entity and its question entities to a domain model.
    ///
    /// # Arguments
    /// - `entity` - Form row
    /// - `questions` - Question rows of the form, in any order
    ///
    /// # Returns
    /// - `Ok(Form)` - Domain model with questions sorted
    /// - `Err(DbErr::Custom)` - A question could not be decoded
    pub fn from_entity(
        entity: entity::form::Model,
        questions: Vec<entity::form_question::Model>,
    ) -> Result<Self, DbErr> {
        let mut questions = questions
            .into_iter()
            .map(Question::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        questions.sort_by_key(|q| (q.order, q.id));

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            questions,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> FormDto {
        FormDto {
            id: self.id,
            title: self.title,
            description: self.description,
            questions: self.questions.into_iter().map(Question::into_dto).collect(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One answer within a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub question_id: i32,
    pub value: AnswerValue,
}

impl Answer {
    /// Converts an answer entity, decoding the JSON value column.
    ///
    /// # Returns
    /// - `Ok(Answer)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored value is not a valid answer
    pub fn from_entity(entity: entity::response_answer::Model) -> Result<Self, DbErr> {
        let value = serde_json::from_str::<AnswerValue>(&entity.value)
            .map_err(|e| DbErr::Custom(format!("Failed to parse answer value: {}", e)))?;

        Ok(Self {
            question_id: entity.question_id,
            value,
        })
    }

    pub fn from_dto(dto: AnswerDto) -> Self {
        Self {
            question_id: dto.question_id,
            value: dto.answer,
        }
    }

    pub fn into_dto(self) -> AnswerDto {
        AnswerDto {
            question_id: self.question_id,
            answer: self.value,
        }
    }
}

/// A submitted set of answers.
#[derive(Debug, Clone, PartialEq)]
pub struct FormResponse {
    pub id: i32,
    pub form_id: i32,
    pub answers: Vec<Answer>,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
}

impl FormResponse {
    /// Converts a response entity and its answer entities to a domain model.
    ///
    /// Answers keep the order they were stored in.
    pub fn from_entity(
        entity: entity::form_response::Model,
        answers: Vec<entity::response_answer::Model>,
    ) -> Result<Self, DbErr> {
        let answers = answers
            .into_iter()
            .map(Answer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            form_id: entity.form_id,
            answers,
            submitted_at: entity.submitted_at,
            ip_address: entity.ip_address,
        })
    }

    pub fn into_dto(self) -> ResponseDto {
        ResponseDto {
            id: self.id,
            form_id: self.form_id,
            answers: self.answers.into_iter().map(Answer::into_dto).collect(),
            submitted_at: self.submitted_at,
            ip_address: self.ip_address,
        }
    }
}

/// Question as received from a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct QuestionParams {
    pub id: Option<i32>,
    /// Empty when the client omitted it.
    pub question_text: String,
    /// Raw type name, empty when the client omitted it.
    pub question_type: String,
    pub options: Vec<String>,
    pub required: bool,
    pub order: Option<i32>,
}

impl QuestionParams {
    pub fn from_dto(dto: QuestionInputDto) -> Self {
        Self {
            id: dto.id,
            question_text: dto.question_text.unwrap_or_default(),
            question_type: dto.question_type.unwrap_or_default(),
            options: dto.options,
            required: dto.required,
            order: dto.order,
        }
    }
}

/// Parameters for creating a form.
#[derive(Debug, Clone, Default)]
pub struct CreateFormParams {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<QuestionParams>,
}

impl CreateFormParams {
    pub fn from_dto(dto: CreateFormDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description,
            questions: dto.questions.into_iter().map(QuestionParams::from_dto).collect(),
        }
    }
}

/// Parameters for a partial form update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateFormParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<QuestionParams>>,
    pub is_active: Option<bool>,
}

impl UpdateFormParams {
    pub fn from_dto(id: i32, dto: UpdateFormDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            questions: dto
                .questions
                .map(|questions| questions.into_iter().map(QuestionParams::from_dto).collect()),
            is_active: dto.is_active,
        }
    }
}

/// Validated question ready to be written.
///
/// `id` names an existing question of the form to update in place; `None` inserts.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub id: Option<i32>,
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
    pub order: i32,
}

/// Validated form contents for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<NewQuestion>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replacement question list, when provided.
    pub questions: Option<Vec<NewQuestion>>,
    pub is_active: Option<bool>,
}

/// Parameters for a public submission.
#[derive(Debug, Clone)]
pub struct SubmitResponseParams {
    pub form_id: i32,
    pub answers: Vec<Answer>,
    pub ip_address: Option<String>,
}

impl SubmitResponseParams {
    pub fn from_dto(form_id: i32, dto: SubmitResponseDto, ip_address: Option<String>) -> Self {
        Self {
            form_id,
            answers: dto.answers.into_iter().map(Answer::from_dto).collect(),
            ip_address,
        }
    }
}
