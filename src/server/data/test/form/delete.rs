use super::*;

/// Tests that deleting a form removes its questions, responses and answers.
///
/// A second form with its own response must survive.
///
/// Expected: Ok(true) with only the other form's rows remaining
#[tokio::test]
async fn cascades_to_questions_responses_and_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (form, questions) = factory::helpers::create_form_with_questions(db).await?;
    factory::form_response::FormResponseFactory::new(db, form.id)
        .answer(questions[0].id, serde_json::json!("Alice"))
        .answer(questions[1].id, serde_json::json!(["Music"]))
        .build()
        .await?;
    factory::form_response::FormResponseFactory::new(db, form.id)
        .answer(questions[0].id, serde_json::json!("Bob"))
        .build()
        .await?;

    let other = factory::create_form(db).await?;
    let other_response = factory::form_response::FormResponseFactory::new(db, other.id)
        .answer(1, serde_json::json!("kept"))
        .build()
        .await?;

    let repo = FormRepository::new(db);
    assert!(repo.delete(form.id).await?);

    assert!(entity::prelude::Form::find_by_id(form.id).one(db).await?.is_none());
    assert_eq!(
        entity::prelude::FormQuestion::find()
            .filter(entity::form_question::Column::FormId.eq(form.id))
            .count(db)
            .await?,
        0
    );

    let responses = entity::prelude::FormResponse::find().all(db).await?;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].id, other_response.id);

    let answers = entity::prelude::ResponseAnswer::find().all(db).await?;
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].response_id, other_response.id);

    Ok(())
}

/// Tests deleting a form that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_form() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
