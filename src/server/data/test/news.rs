use crate::server::{
    data::news::NewsRepository,
    model::news::{CreateNewsParams, UpdateNewsParams, DEFAULT_NEWS_STATUS},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that new articles start published with zero views.
///
/// Expected: Ok with views 0 and status "published"
#[tokio::test]
async fn creates_published_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now();
    let repo = NewsRepository::new(db);
    let news = repo
        .create(
            CreateNewsParams {
                title: "Annual meetup".to_string(),
                content: "Details".to_string(),
                author: Some("Editor".to_string()),
                ..Default::default()
            },
            date,
        )
        .await?;

    assert_eq!(news.views, 0);
    assert_eq!(news.status, DEFAULT_NEWS_STATUS);
    assert_eq!(news.date, date);
    assert_eq!(news.author.as_deref(), Some("Editor"));

    Ok(())
}

/// Tests that articles are listed newest first.
///
/// Expected: Ok with articles ordered by date descending
#[tokio::test]
async fn lists_articles_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = factory::news::NewsFactory::new(db)
        .date(now - Duration::days(3))
        .build()
        .await?;
    let recent = factory::news::NewsFactory::new(db).date(now).build().await?;

    let repo = NewsRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|n| n.id).collect();

    assert_eq!(ids, vec![recent.id, old.id]);

    Ok(())
}

/// Tests partial update.
///
/// Expected: Ok(Some) with title and status changed, content and image kept
#[tokio::test]
async fn update_merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::news::NewsFactory::new(db)
        .image("/uploads/image-1.png")
        .build()
        .await?;

    let repo = NewsRepository::new(db);
    let updated = repo
        .update(UpdateNewsParams {
            id: news.id,
            title: Some("Corrected".to_string()),
            status: Some("draft".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Corrected");
    assert_eq!(updated.status, "draft");
    assert_eq!(updated.content, news.content);
    assert_eq!(updated.image, news.image);

    Ok(())
}

/// Tests an update without any provided field.
///
/// Expected: Ok(Some) with the article unchanged
#[tokio::test]
async fn empty_update_returns_article_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::create_news(db).await?;

    let repo = NewsRepository::new(db);
    let updated = repo
        .update(UpdateNewsParams {
            id: news.id,
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, news.title);
    assert_eq!(updated.date, news.date);

    Ok(())
}

/// Tests update and delete of a missing article.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn missing_article_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);

    assert!(repo
        .update(UpdateNewsParams {
            id: 3,
            title: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?
        .is_none());
    assert!(repo.delete(3).await?.is_none());

    Ok(())
}
