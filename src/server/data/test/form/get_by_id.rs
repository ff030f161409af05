use super::*;

/// Tests that questions come back sorted by order, then by id.
///
/// Questions are inserted out of order with one duplicate order value.
///
/// Expected: Ok with questions sorted [order 0, order 1 (first), order 1 (second), order 5]
#[tokio::test]
async fn returns_questions_sorted_by_order_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form(db).await?;
    let last = factory::form_question::FormQuestionFactory::new(db, form.id)
        .order(5)
        .build()
        .await?;
    let tie_first = factory::form_question::FormQuestionFactory::new(db, form.id)
        .order(1)
        .build()
        .await?;
    let first = factory::form_question::FormQuestionFactory::new(db, form.id)
        .order(0)
        .build()
        .await?;
    let tie_second = factory::form_question::FormQuestionFactory::new(db, form.id)
        .order(1)
        .build()
        .await?;

    let repo = FormRepository::new(db);
    let result = repo.get_by_id(form.id).await?.unwrap();

    let ids: Vec<i32> = result.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![first.id, tie_first.id, tie_second.id, last.id]);

    Ok(())
}

/// Tests that stored options and the question type are decoded.
///
/// Expected: Ok with a dropdown question carrying its options in order
#[tokio::test]
async fn decodes_question_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form(db).await?;
    factory::form_question::FormQuestionFactory::new(db, form.id)
        .question_type("dropdown")
        .options(["Small", "Medium", "Large"])
        .build()
        .await?;

    let repo = FormRepository::new(db);
    let result = repo.get_by_id(form.id).await?.unwrap();

    assert_eq!(result.questions[0].question_type, QuestionType::Dropdown);
    assert_eq!(result.questions[0].options, vec!["Small", "Medium", "Large"]);

    Ok(())
}

/// Tests getting an inactive form.
///
/// Expected: Ok(Some) since the repository does not filter on the active flag
#[tokio::test]
async fn returns_inactive_form() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::form::FormFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = FormRepository::new(db);
    let result = repo.get_by_id(form.id).await?;

    assert!(result.is_some_and(|f| !f.is_active));

    Ok(())
}

/// Tests getting a form that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_form() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}

/// Tests that a corrupt options column surfaces as a database error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_undecodable_options() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form(db).await?;
    entity::form_question::ActiveModel {
        form_id: ActiveValue::Set(form.id),
        question_text: ActiveValue::Set("Broken".to_string()),
        question_type: ActiveValue::Set("radio".to_string()),
        options: ActiveValue::Set("not json".to_string()),
        required: ActiveValue::Set(false),
        order: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let repo = FormRepository::new(db);
    let result = repo.get_by_id(form.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
