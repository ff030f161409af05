//! Photo and video gallery domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::gallery::{CreateVideoDto, PhotoDto, VideoDto},
    server::service::media::Upload,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn from_entity(entity: entity::photo::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            url: entity.url,
            date: entity.date,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            date: self.date,
            created_at: self.created_at,
        }
    }
}

/// Where an uploaded gallery photo is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoStorage {
    /// Upload directory served under `/uploads`.
    #[default]
    Local,
    /// Configured remote image host.
    Remote,
}

/// Parameters for adding a photo, read from a multipart body.
#[derive(Debug, Clone)]
pub struct CreatePhotoParams {
    pub image: Option<Upload>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw client date, parsed by the service.
    pub date: Option<String>,
    pub storage: PhotoStorage,
    /// Base URL for locally stored images.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Video {
    pub fn from_entity(entity: entity::video::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            youtube_url: entity.youtube_url,
            date: entity.date,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> VideoDto {
        VideoDto {
            id: self.id,
            title: self.title,
            description: self.description,
            youtube_url: self.youtube_url,
            date: self.date,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateVideoParams {
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub date: Option<String>,
}

impl CreateVideoParams {
    pub fn from_dto(dto: CreateVideoDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description,
            youtube_url: dto.youtube_url.unwrap_or_default(),
            date: dto.date,
        }
    }
}
