use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{form::FormRepository, response::ResponseRepository},
    error::AppError,
    model::form::{CreateFormParams, Form, FormChanges, FormDraft, FormResponse, UpdateFormParams},
    service::form::validate_questions,
    util::parse::require_text,
};

pub struct FormAdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormAdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active form with its questions.
    ///
    /// # Returns
    /// - `Ok(Form)` - Stored form with generated ids
    /// - `Err(AppError::BadRequest)` - Blank title, blank question text or unknown question type
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateFormParams) -> Result<Form, AppError> {
        let draft = FormDraft {
            title: require_text(&params.title, "Title")?,
            description: params.description,
            questions: validate_questions(params.questions)?,
        };

        let repo = FormRepository::new(self.db);

        let form = repo.create(draft, Utc::now()).await?;

        tracing::info!("Created form {} with {} questions", form.id, form.questions.len());

        Ok(form)
    }

    /// Gets all forms, newest first. Includes inactive forms.
    pub async fn get_all(&self) -> Result<Vec<Form>, AppError> {
        let repo = FormRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a form by id regardless of its active flag.
    pub async fn get_by_id(&self, id: i32) -> Result<Form, AppError> {
        let repo = FormRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Form not found".to_string()))
    }

    /// Merges the provided fields into a form.
    ///
    /// Provided fields are validated with the same rules as creation.
    ///
    /// # Returns
    /// - `Ok(Form)` - Updated form
    /// - `Err(AppError::NotFound)` - No form with this id
    /// - `Err(AppError::BadRequest)` - A provided field is invalid
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateFormParams) -> Result<Form, AppError> {
        let changes = FormChanges {
            title: params
                .title
                .map(|title| require_text(&title, "Title"))
                .transpose()?,
            description: params.description,
            questions: params.questions.map(validate_questions).transpose()?,
            is_active: params.is_active,
        };

        let repo = FormRepository::new(self.db);

        repo.update(params.id, changes, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Form not found".to_string()))
    }

    /// Deletes a form with its questions, responses and answers.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FormRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Form not found".to_string()));
        }

        tracing::info!("Deleted form {}", id);

        Ok(())
    }

    /// Gets the responses of a form, newest first.
    ///
    /// Unknown form ids yield an empty list.
    pub async fn get_responses(&self, form_id: i32) -> Result<Vec<FormResponse>, AppError> {
        let repo = ResponseRepository::new(self.db);

        Ok(repo.get_by_form_id(form_id).await?)
    }
}
