use sea_orm_migration::{prelude::*, schema::*};

use super::m20260203_000008_create_form_response_table::FormResponse;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResponseAnswer::Table)
                    .if_not_exists()
                    .col(pk_auto(ResponseAnswer::Id))
                    .col(integer(ResponseAnswer::ResponseId))
                    .col(integer(ResponseAnswer::QuestionId))
                    .col(text(ResponseAnswer::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_response_answer_response_id")
                            .from(ResponseAnswer::Table, ResponseAnswer::ResponseId)
                            .to(FormResponse::Table, FormResponse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResponseAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResponseAnswer {
    Table,
    Id,
    ResponseId,
    QuestionId,
    Value,
}
