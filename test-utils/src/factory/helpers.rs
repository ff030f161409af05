//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub(crate) fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active form with three questions covering the common answer shapes.
///
/// Questions, in order:
/// 1. required `text` "Name"
/// 2. optional `checkbox` "Interests" with options `["Sports", "Music", "Art"]`
/// 3. optional `number` "Age"
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((form, questions))` - The form and its questions in order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_form_with_questions(
    db: &DatabaseConnection,
) -> Result<(entity::form::Model, Vec<entity::form_question::Model>), DbErr> {
    let form = crate::factory::form::create_form(db).await?;

    let name = crate::factory::form_question::FormQuestionFactory::new(db, form.id)
        .question_text("Name")
        .question_type("text")
        .required(true)
        .order(0)
        .build()
        .await?;
    let interests = crate::factory::form_question::FormQuestionFactory::new(db, form.id)
        .question_text("Interests")
        .question_type("checkbox")
        .options(["Sports", "Music", "Art"])
        .order(1)
        .build()
        .await?;
    let age = crate::factory::form_question::FormQuestionFactory::new(db, form.id)
        .question_text("Age")
        .question_type("number")
        .order(2)
        .build()
        .await?;

    Ok((form, vec![name, interests, age]))
}
