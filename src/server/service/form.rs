//! Form builder services.
//!
//! The admin service owns the form lifecycle (create, edit, activate, delete) and reads
//! responses. The public service only sees active forms and accepts submissions. Both
//! share the form and response repositories.

pub mod admin;
pub mod answer;
pub mod public;

use crate::{
    model::form::QuestionType,
    server::{
        error::AppError,
        model::form::{NewQuestion, QuestionParams},
        util::parse::require_text,
    },
};

/// Validates client questions into questions ready to be written.
///
/// Question text must be non-blank and the type one of the known question types.
/// A missing `order` defaults to the question's position in the list. Options are
/// trimmed and blank options dropped.
pub(super) fn validate_questions(
    questions: Vec<QuestionParams>,
) -> Result<Vec<NewQuestion>, AppError> {
    questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            let position = index + 1;

            let question_text = require_text(
                &question.question_text,
                &format!("Question {} text", position),
            )?;

            let question_type = question.question_type.trim();
            if question_type.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Question {} type is required",
                    position
                )));
            }
            let question_type = question_type
                .parse::<QuestionType>()
                .map_err(|e| AppError::BadRequest(format!("Question {}: {}", position, e)))?;

            let options = if question_type.has_options() {
                question
                    .options
                    .into_iter()
                    .map(|option| option.trim().to_string())
                    .filter(|option| !option.is_empty())
                    .collect()
            } else {
                Vec::new()
            };

            Ok(NewQuestion {
                id: question.id,
                question_text,
                question_type,
                options,
                required: question.required,
                order: question.order.unwrap_or(index as i32),
            })
        })
        .collect()
}
