use super::*;

/// Tests merging scalar fields without touching questions.
///
/// Expected: Ok with new title and active flag, description and questions unchanged
#[tokio::test]
async fn merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (form, questions) = factory::helpers::create_form_with_questions(db).await?;

    let repo = FormRepository::new(db);
    let updated = repo
        .update(
            form.id,
            FormChanges {
                title: Some("Renamed".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(!updated.is_active);
    assert_eq!(updated.description, form.description);
    assert_eq!(updated.questions.len(), questions.len());
    assert_eq!(updated.created_at, form.created_at);

    Ok(())
}

/// Tests that `updated_at` strictly increases even when the clock has not advanced.
///
/// Passes the stored `updated_at` itself, then an earlier instant, as "now".
///
/// Expected: Ok with each update's timestamp greater than the previous one
#[tokio::test]
async fn updated_at_strictly_increases() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();
    let form = factory::form::FormFactory::new(db)
        .created_at(created)
        .build()
        .await?;

    let repo = FormRepository::new(db);
    let first = repo
        .update(form.id, FormChanges::default(), created)
        .await?
        .unwrap();
    let second = repo
        .update(
            form.id,
            FormChanges::default(),
            created - Duration::days(1),
        )
        .await?
        .unwrap();

    assert!(first.updated_at > form.updated_at);
    assert!(second.updated_at > first.updated_at);
    assert!(first.created_at <= first.updated_at);

    Ok(())
}

/// Tests replacing the question list.
///
/// Keeps the first question (edited, same id), drops the other two and adds a new one.
///
/// Expected: Ok with two questions, the first keeping its id, the dropped ones deleted
#[tokio::test]
async fn replaces_questions_preserving_matching_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (form, questions) = factory::helpers::create_form_with_questions(db).await?;
    let kept_id = questions[0].id;

    let repo = FormRepository::new(db);
    let updated = repo
        .update(
            form.id,
            FormChanges {
                questions: Some(vec![
                    NewQuestion {
                        id: Some(kept_id),
                        required: true,
                        ..question("Full name", QuestionType::Text, 0)
                    },
                    question("Email", QuestionType::Email, 1),
                ]),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.questions.len(), 2);
    assert_eq!(updated.questions[0].id, kept_id);
    assert_eq!(updated.questions[0].question_text, "Full name");
    assert_eq!(updated.questions[1].question_type, QuestionType::Email);
    assert!(!questions[1..]
        .iter()
        .any(|old| updated.questions.iter().any(|q| q.id == old.id)));

    let stored = entity::prelude::FormQuestion::find()
        .filter(entity::form_question::Column::FormId.eq(form.id))
        .count(db)
        .await?;
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests that a question id belonging to another form is inserted as a new question.
///
/// Expected: Ok with the other form's question untouched
#[tokio::test]
async fn ignores_question_ids_of_other_forms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form(db).await?;
    let other = factory::create_form(db).await?;
    let foreign = factory::create_question(db, other.id).await?;

    let repo = FormRepository::new(db);
    let updated = repo
        .update(
            form.id,
            FormChanges {
                questions: Some(vec![NewQuestion {
                    id: Some(foreign.id),
                    ..question("Mine", QuestionType::Text, 0)
                }]),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.questions.len(), 1);
    assert_ne!(updated.questions[0].id, foreign.id);

    let untouched = entity::prelude::FormQuestion::find_by_id(foreign.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched.form_id, other.id);
    assert_eq!(untouched.question_text, foreign.question_text);

    Ok(())
}

/// Tests updating a form that does not exist.
///
/// Expected: Ok(None) and no form created
#[tokio::test]
async fn returns_none_for_missing_form() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);
    let result = repo
        .update(
            42,
            FormChanges {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Form::find().count(db).await?, 0);

    Ok(())
}
