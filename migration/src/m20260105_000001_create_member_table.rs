use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::Name))
                    .col(string_null(Member::Photo))
                    .col(string_null(Member::Blood))
                    .col(string_null(Member::Union))
                    .col(string_null(Member::StudentId))
                    .col(string_null(Member::Department))
                    .col(string_null(Member::Session))
                    .col(string_null(Member::Mobile))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Name,
    Photo,
    Blood,
    Union,
    StudentId,
    Department,
    Session,
    Mobile,
}
