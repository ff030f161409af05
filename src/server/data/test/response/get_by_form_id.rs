use super::*;

/// Tests listing responses newest first with their answers decoded.
///
/// Expected: Ok with [newer, older] and answers in insertion order
#[tokio::test]
async fn lists_responses_newest_first_with_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (form, questions) = factory::helpers::create_form_with_questions(db).await?;
    let base = Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap();

    let older = factory::form_response::FormResponseFactory::new(db, form.id)
        .submitted_at(base)
        .answer(questions[0].id, serde_json::json!("Alice"))
        .answer(questions[2].id, serde_json::json!(27))
        .build()
        .await?;
    let newer = factory::form_response::FormResponseFactory::new(db, form.id)
        .submitted_at(base + Duration::minutes(5))
        .ip_address(None)
        .answer(questions[0].id, serde_json::json!("Bob"))
        .answer(questions[1].id, serde_json::json!(["Music"]))
        .build()
        .await?;

    let repo = ResponseRepository::new(db);
    let responses = repo.get_by_form_id(form.id).await?;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].id, newer.id);
    assert!(responses[0].ip_address.is_none());
    assert_eq!(
        responses[0].answers,
        vec![
            Answer {
                question_id: questions[0].id,
                value: AnswerValue::Text("Bob".to_string()),
            },
            Answer {
                question_id: questions[1].id,
                value: AnswerValue::Choices(vec!["Music".to_string()]),
            },
        ]
    );
    assert_eq!(responses[1].id, older.id);
    assert_eq!(responses[1].answers[1].value, AnswerValue::Number(27.0));

    Ok(())
}

/// Tests that responses of other forms are excluded and unknown forms yield nothing.
///
/// Expected: Ok with only the requested form's response, and empty for an unknown id
#[tokio::test]
async fn filters_by_form() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let form = factory::create_form(db).await?;
    let other = factory::create_form(db).await?;
    let mine = factory::create_response(db, form.id).await?;
    factory::create_response(db, other.id).await?;

    let repo = ResponseRepository::new(db);

    let responses = repo.get_by_form_id(form.id).await?;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].id, mine.id);
    assert!(responses[0].answers.is_empty());

    assert!(repo.get_by_form_id(12345).await?.is_empty());

    Ok(())
}
