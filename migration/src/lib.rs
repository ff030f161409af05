pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_member_table;
mod m20260105_000002_create_comment_table;
mod m20260112_000003_create_news_table;
mod m20260120_000004_create_photo_table;
mod m20260120_000005_create_video_table;
mod m20260203_000006_create_form_table;
mod m20260203_000007_create_form_question_table;
mod m20260203_000008_create_form_response_table;
mod m20260203_000009_create_response_answer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_member_table::Migration),
            Box::new(m20260105_000002_create_comment_table::Migration),
            Box::new(m20260112_000003_create_news_table::Migration),
            Box::new(m20260120_000004_create_photo_table::Migration),
            Box::new(m20260120_000005_create_video_table::Migration),
            Box::new(m20260203_000006_create_form_table::Migration),
            Box::new(m20260203_000007_create_form_question_table::Migration),
            Box::new(m20260203_000008_create_form_response_table::Migration),
            Box::new(m20260203_000009_create_response_answer_table::Migration),
        ]
    }
}
