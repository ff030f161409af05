use super::*;

/// Tests creating a form with questions.
///
/// Verifies that the form is stored as active with both timestamps set to the
/// provided instant and that every question receives a generated id.
///
/// Expected: Ok with active form and two stored questions
#[tokio::test]
async fn creates_active_form_with_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = FormRepository::new(db);
    let form = repo
        .create(
            FormDraft {
                title: "Survey".to_string(),
                description: Some("Yearly survey".to_string()),
                questions: vec![
                    question("Name", QuestionType::Text, 0),
                    NewQuestion {
                        options: vec!["Red".to_string(), "Blue".to_string()],
                        ..question("Colour", QuestionType::Radio, 1)
                    },
                ],
            },
            now,
        )
        .await?;

    assert!(form.is_active);
    assert_eq!(form.created_at, now);
    assert_eq!(form.updated_at, now);
    assert_eq!(form.questions.len(), 2);
    assert!(form.questions.iter().all(|q| q.id > 0 && q.form_id == form.id));
    assert_eq!(form.questions[1].options, vec!["Red", "Blue"]);

    let stored = entity::prelude::FormQuestion::find()
        .filter(entity::form_question::Column::FormId.eq(form.id))
        .count(db)
        .await?;
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests creating a form without questions.
///
/// Expected: Ok with empty question list
#[tokio::test]
async fn creates_form_without_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FormRepository::new(db);
    let form = repo
        .create(
            FormDraft {
                title: "Empty".to_string(),
                description: None,
                questions: Vec::new(),
            },
            Utc::now(),
        )
        .await?;

    assert!(form.questions.is_empty());
    assert!(form.description.is_none());

    Ok(())
}
