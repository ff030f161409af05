//! News article domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::news::{CreateNewsDto, NewsDto, UpdateNewsDto};

/// Status assigned to every newly created article.
pub const DEFAULT_NEWS_STATUS: &str = "published";

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub date: DateTime<Utc>,
    /// Stored for wire compatibility; never incremented.
    pub views: i32,
    pub status: String,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            image: entity.image,
            author: entity.author,
            category: entity.category,
            date: entity.date,
            views: entity.views,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            content: Some(self.content),
            image: self.image,
            author: self.author,
            category: self.category,
            date: self.date,
            views: self.views,
            status: self.status,
        }
    }

    /// Converts to a DTO without the article body, for summary listings.
    pub fn into_summary_dto(self) -> NewsDto {
        NewsDto {
            content: None,
            ..self.into_dto()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateNewsParams {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl CreateNewsParams {
    pub fn from_dto(dto: CreateNewsDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            image: dto.image,
            author: dto.author,
            category: dto.category,
        }
    }
}

/// Partial article update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateNewsParams {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl UpdateNewsParams {
    pub fn from_dto(id: i32, dto: UpdateNewsDto) -> Self {
        Self {
            id,
            title: dto.title,
            content: dto.content,
            image: dto.image,
            author: dto.author,
            category: dto.category,
            status: dto.status,
        }
    }
}
