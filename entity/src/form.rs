use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_question::Entity")]
    FormQuestion,
    #[sea_orm(has_many = "super::form_response::Entity")]
    FormResponse,
}

impl Related<super::form_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormQuestion.def()
    }
}

impl Related<super::form_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormResponse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
