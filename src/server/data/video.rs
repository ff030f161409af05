use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::gallery::Video;

pub struct VideoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        youtube_url: String,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Result<Video, DbErr> {
        let video = entity::video::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            youtube_url: ActiveValue::Set(youtube_url),
            date: ActiveValue::Set(date),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Video::from_entity(video))
    }

    /// Gets all videos, newest date first.
    pub async fn get_all(&self) -> Result<Vec<Video>, DbErr> {
        let videos = entity::prelude::Video::find()
            .order_by_desc(entity::video::Column::Date)
            .order_by_desc(entity::video::Column::Id)
            .all(self.db)
            .await?;

        Ok(videos.into_iter().map(Video::from_entity).collect())
    }

    /// Deletes a video.
    ///
    /// # Returns
    /// - `Ok(true)` - Video existed and was deleted
    /// - `Ok(false)` - No video with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Video::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
