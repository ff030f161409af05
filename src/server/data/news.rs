use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::news::{CreateNewsParams, News, UpdateNewsParams, DEFAULT_NEWS_STATUS};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a published article with zero views dated `date`.
    pub async fn create(&self, params: CreateNewsParams, date: DateTime<Utc>) -> Result<News, DbErr> {
        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            image: ActiveValue::Set(params.image),
            author: ActiveValue::Set(params.author),
            category: ActiveValue::Set(params.category),
            date: ActiveValue::Set(date),
            views: ActiveValue::Set(0),
            status: ActiveValue::Set(DEFAULT_NEWS_STATUS.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(news))
    }

    /// Gets all articles, newest first.
    pub async fn get_all(&self) -> Result<Vec<News>, DbErr> {
        let news = entity::prelude::News::find()
            .order_by_desc(entity::news::Column::Date)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await?;

        Ok(news.into_iter().map(News::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let news = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(news.map(News::from_entity))
    }

    /// Merges the provided fields into an existing article.
    ///
    /// # Returns
    /// - `Ok(Some(News))` - Updated article
    /// - `Ok(None)` - No article with this id
    pub async fn update(&self, params: UpdateNewsParams) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::news::ActiveModel = existing.clone().into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(Some(image));
        }
        if let Some(author) = params.author {
            active.author = ActiveValue::Set(Some(author));
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(Some(category));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }

        if !active.is_changed() {
            return Ok(Some(News::from_entity(existing)));
        }

        let news = active.update(self.db).await?;

        Ok(Some(News::from_entity(news)))
    }

    /// Deletes an article and returns the deleted record.
    pub async fn delete(&self, id: i32) -> Result<Option<News>, DbErr> {
        let Some(news) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(Some(News::from_entity(news)))
    }
}
