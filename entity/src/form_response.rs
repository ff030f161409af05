use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "form_response")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    pub submitted_at: DateTimeUtc,
    pub ip_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form::Entity",
        from = "Column::FormId",
        to = "super::form::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Form,
    #[sea_orm(has_many = "super::response_answer::Entity")]
    ResponseAnswer,
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Form.def()
    }
}

impl Related<super::response_answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponseAnswer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
