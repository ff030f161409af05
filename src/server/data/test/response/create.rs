use super::*;

/// Tests storing a response with answers of every shape.
///
/// Expected: Ok with generated id and answers stored as JSON text
#[tokio::test]
async fn stores_response_with_json_encoded_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (form, questions) = factory::helpers::create_form_with_questions(db).await?;
    let submitted_at = Utc::now();

    let repo = ResponseRepository::new(db);
    let id = repo
        .create(
            form.id,
            vec![
                Answer {
                    question_id: questions[0].id,
                    value: AnswerValue::Text("Alice".to_string()),
                },
                Answer {
                    question_id: questions[1].id,
                    value: AnswerValue::Choices(vec!["Sports".to_string(), "Art".to_string()]),
                },
                Answer {
                    question_id: questions[2].id,
                    value: AnswerValue::Number(30.0),
                },
            ],
            Some("203.0.113.7".to_string()),
            submitted_at,
        )
        .await?;

    let response = entity::prelude::FormResponse::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(response.form_id, form.id);
    assert_eq!(response.ip_address.as_deref(), Some("203.0.113.7"));
    assert_eq!(response.submitted_at, submitted_at);

    let values: Vec<String> = entity::prelude::ResponseAnswer::find()
        .all(db)
        .await?
        .into_iter()
        .map(|a| a.value)
        .collect();
    assert_eq!(values, vec![r#""Alice""#, r#"["Sports","Art"]"#, "30"]);

    Ok(())
}

/// Tests storing a fractional number and a skipped answer.
///
/// Expected: Ok with the fraction kept and the skipped answer stored as `null`
#[tokio::test]
async fn stores_fractions_and_skipped_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_form_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (form, questions) = factory::helpers::create_form_with_questions(db).await?;

    let repo = ResponseRepository::new(db);
    repo.create(
        form.id,
        vec![
            Answer {
                question_id: questions[1].id,
                value: AnswerValue::Empty,
            },
            Answer {
                question_id: questions[2].id,
                value: AnswerValue::Number(2.5),
            },
        ],
        None,
        Utc::now(),
    )
    .await?;

    let values: Vec<String> = entity::prelude::ResponseAnswer::find()
        .all(db)
        .await?
        .into_iter()
        .map(|a| a.value)
        .collect();
    assert_eq!(values, vec!["null", "2.5"]);

    Ok(())
}
