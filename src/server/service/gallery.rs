use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{photo::PhotoRepository, video::VideoRepository},
    error::{media::MediaError, AppError},
    model::gallery::{CreatePhotoParams, CreateVideoParams, Photo, PhotoStorage, Video},
    service::media::{ImageHost, MediaStorage},
    util::{date::parse_date, parse::require_text},
};

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the uploaded image and records the photo.
    ///
    /// The image goes to local storage unless remote storage is requested, in which case
    /// the configured image host is used.
    ///
    /// # Returns
    /// - `Ok(Photo)` - Stored photo
    /// - `Err(AppError::MediaErr(NoFile))` - No image was uploaded
    /// - `Err(AppError::BadRequest)` - Unparsable date, or remote storage requested but not configured
    /// - `Err(AppError::MediaErr)` - Image rejected or could not be stored
    pub async fn create(
        &self,
        params: CreatePhotoParams,
        media: &MediaStorage,
        image_host: Option<&ImageHost>,
    ) -> Result<Photo, AppError> {
        let image = params.image.ok_or(MediaError::NoFile)?;

        let now = Utc::now();
        let date = params.date.as_deref().map(parse_date).transpose()?.unwrap_or(now);

        let url = match params.storage {
            PhotoStorage::Local => media.store(&image, &params.base_url).await?.url,
            PhotoStorage::Remote => {
                let host = image_host.ok_or_else(|| {
                    AppError::BadRequest("Remote image storage is not configured".to_string())
                })?;
                host.upload(&image).await?
            }
        };

        let repo = PhotoRepository::new(self.db);

        Ok(repo
            .create(url, params.title, params.description, date, now)
            .await?)
    }

    /// Gets all photos, newest date first.
    pub async fn get_all(&self) -> Result<Vec<Photo>, AppError> {
        let repo = PhotoRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes a photo, then removes its blob when it is stored locally.
    pub async fn delete(&self, id: i32, media: &MediaStorage) -> Result<(), AppError> {
        let repo = PhotoRepository::new(self.db);

        let photo = repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        media.remove_by_url(&photo.url).await;

        Ok(())
    }
}

pub struct VideoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a video link.
    ///
    /// # Returns
    /// - `Ok(Video)` - Stored video
    /// - `Err(AppError::BadRequest)` - Blank title or URL, or unparsable date
    pub async fn create(&self, params: CreateVideoParams) -> Result<Video, AppError> {
        let title = require_text(&params.title, "Title")?;
        let youtube_url = require_text(&params.youtube_url, "YouTube URL")?;

        let now = Utc::now();
        let date = params.date.as_deref().map(parse_date).transpose()?.unwrap_or(now);

        let repo = VideoRepository::new(self.db);

        Ok(repo
            .create(title, params.description, youtube_url, date, now)
            .await?)
    }

    /// Gets all videos, newest date first.
    pub async fn get_all(&self) -> Result<Vec<Video>, AppError> {
        let repo = VideoRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VideoRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Video not found".to_string()));
        }

        Ok(())
    }
}
