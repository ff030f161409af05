//! Form response factory for creating submitted responses with answers.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test responses against a form.
///
/// Answer values are stored as raw JSON text, exactly as the repository persists them.
pub struct FormResponseFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    submitted_at: DateTime<Utc>,
    ip_address: Option<String>,
    answers: Vec<(i32, serde_json::Value)>,
}

impl<'a> FormResponseFactory<'a> {
    /// Creates a new FormResponseFactory with no answers, submitted now from `127.0.0.1`.
    pub fn new(db: &'a DatabaseConnection, form_id: i32) -> Self {
        Self {
            db,
            form_id,
            submitted_at: Utc::now(),
            ip_address: Some("127.0.0.1".to_string()),
            answers: Vec::new(),
        }
    }

    pub fn submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }

    pub fn ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }

    pub fn answer(mut self, question_id: i32, value: serde_json::Value) -> Self {
        self.answers.push((question_id, value));
        self
    }

    /// Builds and inserts the response and its answers.
    ///
    /// # Returns
    /// - `Ok(entity::form_response::Model)` - Created response entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::form_response::Model, DbErr> {
        let response = entity::form_response::ActiveModel {
            id: ActiveValue::NotSet,
            form_id: ActiveValue::Set(self.form_id),
            submitted_at: ActiveValue::Set(self.submitted_at),
            ip_address: ActiveValue::Set(self.ip_address),
        }
        .insert(self.db)
        .await?;

        for (question_id, value) in self.answers {
            entity::response_answer::ActiveModel {
                id: ActiveValue::NotSet,
                response_id: ActiveValue::Set(response.id),
                question_id: ActiveValue::Set(question_id),
                value: ActiveValue::Set(value.to_string()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(response)
    }
}

/// Creates a response without answers for the form.
pub async fn create_response(
    db: &DatabaseConnection,
    form_id: i32,
) -> Result<entity::form_response::Model, DbErr> {
    FormResponseFactory::new(db, form_id).build().await
}
