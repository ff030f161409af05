use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CreateCommentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateCommentParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: String,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            message: dto.message.unwrap_or_default(),
        }
    }
}
