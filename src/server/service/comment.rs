use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
    util::parse::require_text,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a comment stamped with the current time.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let params = CreateCommentParams {
            message: require_text(&params.message, "Message")?,
            ..params
        };

        let repo = CommentRepository::new(self.db);

        Ok(repo.create(params, Utc::now()).await?)
    }

    /// Gets all comments, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
