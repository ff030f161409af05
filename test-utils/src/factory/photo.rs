//! Photo factory for creating gallery photo entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test gallery photos.
pub struct PhotoFactory<'a> {
    db: &'a DatabaseConnection,
    title: Option<String>,
    url: String,
    date: DateTime<Utc>,
}

impl<'a> PhotoFactory<'a> {
    /// Creates a new PhotoFactory pointing at a remote URL, dated now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: Some(format!("Photo {}", id)),
            url: format!("https://images.example.com/photo-{}.jpg", id),
            date: Utc::now(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the photo entity into the database.
    pub async fn build(self) -> Result<entity::photo::Model, DbErr> {
        entity::photo::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            url: ActiveValue::Set(self.url),
            date: ActiveValue::Set(self.date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a photo with default values.
pub async fn create_photo(db: &DatabaseConnection) -> Result<entity::photo::Model, DbErr> {
    PhotoFactory::new(db).build().await
}
