//! Form factory for creating test form entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test forms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let form = FormFactory::new(&db)
///     .title("Membership Survey")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct FormFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> FormFactory<'a> {
    /// Creates a new FormFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Form {id}"` where id is auto-incremented
    /// - description: `None`
    /// - is_active: `true`
    /// - created_at / updated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            title: format!("Form {}", id),
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets both timestamps, keeping `updated_at == created_at`.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Builds and inserts the form entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::form::Model)` - Created form entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::form::Model, DbErr> {
        entity::form::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active form with default values.
///
/// Shorthand for `FormFactory::new(db).build().await`.
pub async fn create_form(db: &DatabaseConnection) -> Result<entity::form::Model, DbErr> {
    FormFactory::new(db).build().await
}
