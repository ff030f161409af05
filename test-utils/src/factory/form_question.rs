//! Form question factory for creating test question entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test questions attached to a form.
///
/// # Example
///
/// ```rust,ignore
/// let question = FormQuestionFactory::new(&db, form.id)
///     .question_type("radio")
///     .options(["Yes", "No"])
///     .build()
///     .await?;
/// ```
pub struct FormQuestionFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    question_text: String,
    question_type: String,
    options: Vec<String>,
    required: bool,
    order: i32,
}

impl<'a> FormQuestionFactory<'a> {
    /// Creates a new FormQuestionFactory with default values.
    ///
    /// Defaults:
    /// - question_text: `"Question {id}"`
    /// - question_type: `"text"`
    /// - options: empty
    /// - required: `false`
    /// - order: `0`
    pub fn new(db: &'a DatabaseConnection, form_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            form_id,
            question_text: format!("Question {}", id),
            question_type: "text".to_string(),
            options: Vec::new(),
            required: false,
            order: 0,
        }
    }

    pub fn question_text(mut self, question_text: impl Into<String>) -> Self {
        self.question_text = question_text.into();
        self
    }

    pub fn question_type(mut self, question_type: impl Into<String>) -> Self {
        self.question_type = question_type.into();
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::form_question::Model)` - Created question entity
    /// - `Err(DbErr)` - Database error during insert or option serialization
    pub async fn build(self) -> Result<entity::form_question::Model, DbErr> {
        let options = serde_json::to_string(&self.options)
            .map_err(|e| DbErr::Custom(format!("Failed to encode options: {}", e)))?;

        entity::form_question::ActiveModel {
            id: ActiveValue::NotSet,
            form_id: ActiveValue::Set(self.form_id),
            question_text: ActiveValue::Set(self.question_text),
            question_type: ActiveValue::Set(self.question_type),
            options: ActiveValue::Set(options),
            required: ActiveValue::Set(self.required),
            order: ActiveValue::Set(self.order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an optional `text` question with default values for the form.
pub async fn create_question(
    db: &DatabaseConnection,
    form_id: i32,
) -> Result<entity::form_question::Model, DbErr> {
    FormQuestionFactory::new(db, form_id).build().await
}
