use sea_orm_migration::{prelude::*, schema::*};

use super::m20260203_000006_create_form_table::Form;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(FormQuestion::Id))
                    .col(integer(FormQuestion::FormId))
                    .col(text(FormQuestion::QuestionText))
                    .col(string(FormQuestion::QuestionType))
                    .col(text(FormQuestion::Options).default("[]"))
                    .col(boolean(FormQuestion::Required).default(false))
                    .col(integer(FormQuestion::Order))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_question_form_id")
                            .from(FormQuestion::Table, FormQuestion::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormQuestion {
    Table,
    Id,
    FormId,
    QuestionText,
    QuestionType,
    Options,
    Required,
    Order,
}
