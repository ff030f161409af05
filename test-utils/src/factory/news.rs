//! News factory for creating test news articles.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test news articles with customizable fields.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    image: Option<String>,
    date: DateTime<Utc>,
}

impl<'a> NewsFactory<'a> {
    /// Creates a new NewsFactory with default values.
    ///
    /// Defaults:
    /// - title: `"News {id}"`
    /// - content: `"Body of news {id}"`
    /// - image: `None`
    /// - date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News {}", id),
            content: format!("Body of news {}", id),
            image: None,
            date: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the news entity with `views = 0` and `status = "published"`.
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(self.image),
            author: ActiveValue::Set(None),
            category: ActiveValue::Set(None),
            date: ActiveValue::Set(self.date),
            views: ActiveValue::Set(0),
            status: ActiveValue::Set("published".to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news article with default values.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}
