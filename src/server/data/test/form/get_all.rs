use super::*;

/// Tests that forms are listed newest first.
///
/// Creates forms at t1 < t2 < t3 in shuffled insertion order.
///
/// Expected: Ok with forms ordered [t3, t2, t1]
#[tokio::test]
async fn lists_forms_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    let t2 = t1 + Duration::hours(1);
    let t3 = t2 + Duration::hours(1);

    let second = factory::form::FormFactory::new(db).created_at(t2).build().await?;
    let third = factory::form::FormFactory::new(db).created_at(t3).build().await?;
    let first = factory::form::FormFactory::new(db).created_at(t1).build().await?;

    let repo = FormRepository::new(db);
    let forms = repo.get_all().await?;

    let ids: Vec<i32> = forms.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    Ok(())
}

/// Tests that equal creation times fall back to id descending, and that each form
/// carries only its own questions.
///
/// Expected: Ok with later-inserted form first and questions attached to the right form
#[tokio::test]
async fn breaks_ties_by_id_and_attaches_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let older = factory::form::FormFactory::new(db).created_at(at).build().await?;
    let newer = factory::form::FormFactory::new(db).created_at(at).build().await?;
    factory::create_question(db, older.id).await?;
    factory::create_question(db, older.id).await?;
    factory::create_question(db, newer.id).await?;

    let repo = FormRepository::new(db);
    let forms = repo.get_all().await?;

    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].id, newer.id);
    assert_eq!(forms[0].questions.len(), 1);
    assert_eq!(forms[1].id, older.id);
    assert_eq!(forms[1].questions.len(), 2);

    Ok(())
}

/// Tests listing with no forms.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_forms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
