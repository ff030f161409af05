use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Form::Table)
                    .if_not_exists()
                    .col(pk_auto(Form::Id))
                    .col(string(Form::Title))
                    .col(text_null(Form::Description))
                    .col(boolean(Form::IsActive).default(true))
                    .col(timestamp_with_time_zone(Form::CreatedAt))
                    .col(timestamp_with_time_zone(Form::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Form::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Form {
    Table,
    Id,
    Title,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
