//! Video factory for creating gallery video entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test gallery videos.
pub struct VideoFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    youtube_url: String,
    date: DateTime<Utc>,
}

impl<'a> VideoFactory<'a> {
    /// Creates a new VideoFactory with a unique title and YouTube URL, dated now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Video {}", id),
            youtube_url: format!("https://www.youtube.com/watch?v=test{}", id),
            date: Utc::now(),
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the video entity into the database.
    pub async fn build(self) -> Result<entity::video::Model, DbErr> {
        entity::video::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            youtube_url: ActiveValue::Set(self.youtube_url),
            date: ActiveValue::Set(self.date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a video with default values.
pub async fn create_video(db: &DatabaseConnection) -> Result<entity::video::Model, DbErr> {
    VideoFactory::new(db).build().await
}
