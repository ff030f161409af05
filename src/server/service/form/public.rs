use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{form::FormRepository, response::ResponseRepository},
    error::AppError,
    model::form::{Form, SubmitResponseParams},
    service::form::answer::validate_answers,
};

pub struct FormPublicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormPublicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a form only if it is active.
    ///
    /// # Returns
    /// - `Ok(Form)` - Active form
    /// - `Err(AppError::NotFound)` - Form is missing or inactive
    pub async fn get_active(&self, id: i32) -> Result<Form, AppError> {
        let repo = FormRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .filter(|form| form.is_active)
            .ok_or_else(|| AppError::NotFound("Form not found or inactive".to_string()))
    }

    /// Validates and stores a submission against an active form.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the stored response
    /// - `Err(AppError::NotFound)` - Form is missing or inactive; nothing is stored
    /// - `Err(AppError::BadRequest)` - Answers do not fit the form; nothing is stored
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit(&self, params: SubmitResponseParams) -> Result<i32, AppError> {
        let form = self.get_active(params.form_id).await?;

        validate_answers(&form.questions, &params.answers)?;

        let repo = ResponseRepository::new(self.db);

        let id = repo
            .create(form.id, params.answers, params.ip_address, Utc::now())
            .await?;

        tracing::debug!("Stored response {} for form {}", id, form.id);

        Ok(id)
    }
}
