//! Validation of submitted answers against a form's questions.

use std::collections::{HashMap, HashSet};

use crate::{
    model::form::{AnswerValue, QuestionType},
    server::{
        error::AppError,
        model::form::{Answer, Question},
        util::date::is_valid_date,
    },
};

/// Checks a submission against the questions of its form.
///
/// - every answer must reference a question of the form, at most once
/// - required questions need a non-empty answer
/// - the value shape must fit the question type
/// - choice answers must be among the question's options when it defines any
///
/// # Returns
/// - `Ok(())` - Submission is acceptable
/// - `Err(AppError::BadRequest)` - First violation found
pub fn validate_answers(questions: &[Question], answers: &[Answer]) -> Result<(), AppError> {
    let by_id: HashMap<i32, &Question> = questions.iter().map(|q| (q.id, q)).collect();
    let mut answered = HashSet::new();

    for answer in answers {
        let question = by_id.get(&answer.question_id).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Question {} does not belong to this form",
                answer.question_id
            ))
        })?;

        if !answered.insert(answer.question_id) {
            return Err(AppError::BadRequest(format!(
                "Question {} was answered more than once",
                answer.question_id
            )));
        }

        if !is_empty(&answer.value) {
            validate_value(question, &answer.value)?;
        }
    }

    for question in questions.iter().filter(|q| q.required) {
        let present = answers
            .iter()
            .any(|a| a.question_id == question.id && !is_empty(&a.value));

        if !present {
            return Err(AppError::BadRequest(format!(
                "'{}' is required",
                question.question_text
            )));
        }
    }

    Ok(())
}

fn is_empty(value: &AnswerValue) -> bool {
    match value {
        AnswerValue::Text(text) => text.trim().is_empty(),
        AnswerValue::Choices(choices) => choices.is_empty(),
        AnswerValue::Number(_) => false,
        AnswerValue::Empty => true,
    }
}

fn validate_value(question: &Question, value: &AnswerValue) -> Result<(), AppError> {
    let invalid = |expected: &str| {
        AppError::BadRequest(format!(
            "'{}' expects {}",
            question.question_text, expected
        ))
    };

    match (question.question_type, value) {
        (QuestionType::Checkbox, AnswerValue::Choices(choices)) => {
            for choice in choices {
                check_option(question, choice)?;
            }
            Ok(())
        }
        (QuestionType::Checkbox, _) => Err(invalid("a list of choices")),

        (QuestionType::Number, AnswerValue::Number(number)) if number.is_finite() => Ok(()),
        (QuestionType::Number, AnswerValue::Text(text))
            if text.trim().parse::<f64>().is_ok_and(f64::is_finite) =>
        {
            Ok(())
        }
        (QuestionType::Number, _) => Err(invalid("a number")),

        (question_type, AnswerValue::Text(text)) => match question_type {
            QuestionType::Email if !is_valid_email(text.trim()) => {
                Err(invalid("a valid email address"))
            }
            QuestionType::Date if !is_valid_date(text) => {
                Err(invalid("a date (YYYY-MM-DD)"))
            }
            QuestionType::Radio | QuestionType::Dropdown => check_option(question, text),
            _ => Ok(()),
        },
        (_, _) => Err(invalid("a text value")),
    }
}

fn check_option(question: &Question, choice: &str) -> Result<(), AppError> {
    if question.options.is_empty() || question.options.iter().any(|o| o == choice) {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "'{}' is not an option of '{}'",
        choice, question.question_text
    )))
}

/// Single `@`, non-empty local part, and a domain containing an inner `.`.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, question_type: QuestionType, options: &[&str], required: bool) -> Question {
        Question {
            id,
            form_id: 1,
            question_text: format!("Question {}", id),
            question_type,
            options: options.iter().map(|o| o.to_string()).collect(),
            required,
            order: id,
        }
    }

    fn answer(question_id: i32, value: AnswerValue) -> Answer {
        Answer { question_id, value }
    }

    fn text(value: &str) -> AnswerValue {
        AnswerValue::Text(value.to_string())
    }

    fn survey() -> Vec<Question> {
        vec![
            question(1, QuestionType::Text, &[], true),
            question(2, QuestionType::Checkbox, &["Sports", "Music", "Art"], false),
            question(3, QuestionType::Number, &[], false),
            question(4, QuestionType::Email, &[], false),
            question(5, QuestionType::Date, &[], false),
            question(6, QuestionType::Radio, &["Yes", "No"], false),
        ]
    }

    #[test]
    fn accepts_well_formed_submission() {
        let answers = vec![
            answer(1, text("Alice")),
            answer(
                2,
                AnswerValue::Choices(vec!["Sports".to_string(), "Art".to_string()]),
            ),
            answer(3, AnswerValue::Number(21.0)),
            answer(4, text("alice@example.org")),
            answer(5, text("2025-05-01")),
            answer(6, text("Yes")),
        ];

        assert!(validate_answers(&survey(), &answers).is_ok());
    }

    #[test]
    fn accepts_numeric_text_for_number_question() {
        let answers = vec![answer(1, text("Bob")), answer(3, text(" 42.5 "))];

        assert!(validate_answers(&survey(), &answers).is_ok());
    }

    #[test]
    fn rejects_text_for_checkbox_question() {
        let answers = vec![answer(1, text("Alice")), answer(2, text("Sports"))];

        assert!(matches!(
            validate_answers(&survey(), &answers),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_unknown_question_id() {
        let answers = vec![answer(1, text("Alice")), answer(99, text("?"))];

        assert!(matches!(
            validate_answers(&survey(), &answers),
            Err(AppError::BadRequest(msg)) if msg.contains("99")
        ));
    }

    #[test]
    fn rejects_missing_or_empty_required_answer() {
        assert!(matches!(
            validate_answers(&survey(), &[]),
            Err(AppError::BadRequest(msg)) if msg == "'Question 1' is required"
        ));
        assert!(matches!(
            validate_answers(&survey(), &[answer(1, text("  "))]),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_duplicate_answers() {
        let answers = vec![answer(1, text("Alice")), answer(1, text("Again"))];

        assert!(matches!(
            validate_answers(&survey(), &answers),
            Err(AppError::BadRequest(msg)) if msg.contains("more than once")
        ));
    }

    #[test]
    fn rejects_choices_outside_options() {
        let checkbox = vec![
            answer(1, text("Alice")),
            answer(2, AnswerValue::Choices(vec!["Cooking".to_string()])),
        ];
        let radio = vec![answer(1, text("Alice")), answer(6, text("Maybe"))];

        assert!(validate_answers(&survey(), &checkbox).is_err());
        assert!(validate_answers(&survey(), &radio).is_err());
    }

    #[test]
    fn rejects_malformed_email_date_and_number() {
        for (id, value) in [
            (4, text("alice.example.org")),
            (4, text("alice@localhost")),
            (4, text("@example.org")),
            (5, text("01/05/2025")),
            (3, text("twenty")),
            (3, AnswerValue::Choices(vec!["1".to_string()])),
        ] {
            let answers = vec![answer(1, text("Alice")), answer(id, value.clone())];
            assert!(
                validate_answers(&survey(), &answers).is_err(),
                "expected rejection of {:?} for question {}",
                value,
                id
            );
        }
    }

    #[test]
    fn skips_shape_checks_for_empty_optional_answers() {
        let answers = vec![
            answer(1, text("Alice")),
            answer(4, text("")),
            answer(2, AnswerValue::Choices(Vec::new())),
            answer(5, AnswerValue::Empty),
        ];

        assert!(validate_answers(&survey(), &answers).is_ok());
    }

    #[test]
    fn treats_null_answer_as_missing_for_required_question() {
        assert!(matches!(
            validate_answers(&survey(), &[answer(1, AnswerValue::Empty)]),
            Err(AppError::BadRequest(msg)) if msg == "'Question 1' is required"
        ));
    }
}
