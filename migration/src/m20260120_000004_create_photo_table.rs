use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_auto(Photo::Id))
                    .col(string_null(Photo::Title))
                    .col(text_null(Photo::Description))
                    .col(string(Photo::Url))
                    .col(timestamp_with_time_zone(Photo::Date))
                    .col(
                        timestamp_with_time_zone(Photo::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photo {
    Table,
    Id,
    Title,
    Description,
    Url,
    Date,
    CreatedAt,
}
