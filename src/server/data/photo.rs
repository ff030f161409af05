use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::gallery::Photo;

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        url: String,
        title: Option<String>,
        description: Option<String>,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Result<Photo, DbErr> {
        let photo = entity::photo::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            url: ActiveValue::Set(url),
            date: ActiveValue::Set(date),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Photo::from_entity(photo))
    }

    /// Gets all photos, newest date first.
    pub async fn get_all(&self) -> Result<Vec<Photo>, DbErr> {
        let photos = entity::prelude::Photo::find()
            .order_by_desc(entity::photo::Column::Date)
            .order_by_desc(entity::photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(photos.into_iter().map(Photo::from_entity).collect())
    }

    /// Deletes a photo and returns the deleted record.
    pub async fn delete(&self, id: i32) -> Result<Option<Photo>, DbErr> {
        let Some(photo) = entity::prelude::Photo::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Photo::delete_by_id(id).exec(self.db).await?;

        Ok(Some(Photo::from_entity(photo)))
    }
}
