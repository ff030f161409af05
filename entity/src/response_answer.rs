use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "response_answer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub response_id: i32,
    /// Id of the answered question; not constrained so answers outlive question edits.
    pub question_id: i32,
    /// JSON-encoded answer value.
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form_response::Entity",
        from = "Column::ResponseId",
        to = "super::form_response::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FormResponse,
}

impl Related<super::form_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormResponse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
