use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::member::{Member, MemberParams};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MemberParams) -> Result<Member, DbErr> {
        let member = entity::member::ActiveModel {
            name: ActiveValue::Set(params.name),
            photo: ActiveValue::Set(params.photo),
            blood: ActiveValue::Set(params.blood),
            union: ActiveValue::Set(params.union),
            student_id: ActiveValue::Set(params.student_id),
            department: ActiveValue::Set(params.department),
            session: ActiveValue::Set(params.session),
            mobile: ActiveValue::Set(params.mobile),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(member))
    }

    /// Gets all members ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let members = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(Member::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let member = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(member.map(Member::from_entity))
    }

    /// Replaces every field of an existing member.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated member
    /// - `Ok(None)` - No member with this id; nothing is created
    pub async fn update(&self, id: i32, params: MemberParams) -> Result<Option<Member>, DbErr> {
        if entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let member = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            photo: ActiveValue::Set(params.photo),
            blood: ActiveValue::Set(params.blood),
            union: ActiveValue::Set(params.union),
            student_id: ActiveValue::Set(params.student_id),
            department: ActiveValue::Set(params.department),
            session: ActiveValue::Set(params.session),
            mobile: ActiveValue::Set(params.mobile),
        }
        .update(self.db)
        .await?;

        Ok(Some(Member::from_entity(member)))
    }

    /// Deletes a member and returns the deleted record.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The member as it was before deletion
    /// - `Ok(None)` - No member with this id
    pub async fn delete(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let Some(member) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Member::delete_by_id(id).exec(self.db).await?;

        Ok(Some(Member::from_entity(member)))
    }
}
