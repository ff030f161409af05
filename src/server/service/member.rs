use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{Member, MemberParams},
    service::media::MediaStorage,
    util::parse::require_text,
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MemberParams) -> Result<Member, AppError> {
        let params = validate(params)?;

        let repo = MemberRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all members ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Replaces every field of an existing member. Never creates one.
    pub async fn update(&self, id: i32, params: MemberParams) -> Result<Member, AppError> {
        let params = validate(params)?;

        let repo = MemberRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Deletes a member, then removes a locally stored photo.
    ///
    /// Photo removal is best-effort and never fails the request.
    pub async fn delete(&self, id: i32, media: &MediaStorage) -> Result<(), AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        if let Some(photo) = member.photo.as_deref() {
            media.remove_by_url(photo).await;
        }

        Ok(())
    }
}

fn validate(params: MemberParams) -> Result<MemberParams, AppError> {
    Ok(MemberParams {
        name: require_text(&params.name, "Name")?,
        ..params
    })
}
