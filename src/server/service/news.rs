use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::news::{CreateNewsParams, News, UpdateNewsParams},
    service::media::MediaStorage,
    util::parse::require_text,
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new article dated now.
    ///
    /// # Returns
    /// - `Ok(News)` - Stored article with zero views and status "published"
    /// - `Err(AppError::BadRequest)` - Title or content is blank
    pub async fn create(&self, params: CreateNewsParams) -> Result<News, AppError> {
        let params = CreateNewsParams {
            title: require_text(&params.title, "Title")?,
            content: require_text(&params.content, "Content")?,
            ..params
        };

        let repo = NewsRepository::new(self.db);

        Ok(repo.create(params, Utc::now()).await?)
    }

    /// Gets all articles, newest first.
    pub async fn get_all(&self) -> Result<Vec<News>, AppError> {
        let repo = NewsRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    /// Merges the provided fields into an article.
    ///
    /// A provided title or content must not be blank.
    pub async fn update(&self, params: UpdateNewsParams) -> Result<News, AppError> {
        let params = UpdateNewsParams {
            title: params
                .title
                .map(|title| require_text(&title, "Title"))
                .transpose()?,
            content: params
                .content
                .map(|content| require_text(&content, "Content"))
                .transpose()?,
            ..params
        };

        let repo = NewsRepository::new(self.db);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    /// Deletes an article, then removes a locally stored image.
    pub async fn delete(&self, id: i32, media: &MediaStorage) -> Result<(), AppError> {
        let repo = NewsRepository::new(self.db);

        let news = repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

        if let Some(image) = news.image.as_deref() {
            media.remove_by_url(image).await;
        }

        Ok(())
    }
}
