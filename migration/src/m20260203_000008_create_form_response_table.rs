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
                    .table(FormResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(FormResponse::Id))
                    .col(integer(FormResponse::FormId))
                    .col(timestamp_with_time_zone(FormResponse::SubmittedAt))
                    .col(string_null(FormResponse::IpAddress))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_response_form_id")
                            .from(FormResponse::Table, FormResponse::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_form_response_form_id")
                    .table(FormResponse::Table)
                    .col(FormResponse::FormId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormResponse {
    Table,
    Id,
    FormId,
    SubmittedAt,
    IpAddress,
}
