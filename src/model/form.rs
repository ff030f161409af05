use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input kind of a form question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Textarea,
    Radio,
    Checkbox,
    Dropdown,
    Email,
    Number,
    Date,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
        }
    }

    /// Whether answers are drawn from the question's option list.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox | Self::Dropdown)
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "radio" => Ok(Self::Radio),
            "checkbox" => Ok(Self::Checkbox),
            "dropdown" => Ok(Self::Dropdown),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            other => Err(format!("Unknown question type '{}'", other)),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i32,
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<QuestionDto>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question as submitted by the admin UI.
///
/// Fields are optional on the wire so that missing values surface as validation errors
/// with a readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInputDto {
    /// Existing question id, only meaningful on update.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    /// Defaults to the question's position in the list.
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionInputDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionInputDto>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Value of a single answer: a number, a string, a list of strings, or `null` for a
/// skipped question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Text(String),
    Choices(Vec<String>),
    #[default]
    Empty,
}

/// Whole numbers are written without a fraction so `30` reads back as `30`, not `30.0`.
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDto {
    pub question_id: i32,
    /// Missing or `null` when the question was skipped.
    #[serde(default)]
    pub answer: AnswerValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseDto {
    #[serde(default)]
    pub answers: Vec<AnswerDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseResultDto {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto {
    pub id: i32,
    pub form_id: i32,
    pub answers: Vec<AnswerDto>,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
}
