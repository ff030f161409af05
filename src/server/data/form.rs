use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::form::{Form, FormChanges, FormDraft, NewQuestion};

pub struct FormRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active form and its questions in one transaction.
    ///
    /// # Arguments
    /// - `draft` - Validated form contents
    /// - `now` - Timestamp used for both `created_at` and `updated_at`
    ///
    /// # Returns
    /// - `Ok(Form)` - Stored form with generated ids
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, draft: FormDraft, now: DateTime<Utc>) -> Result<Form, DbErr> {
        let txn = self.db.begin().await?;

        let form = entity::form::ActiveModel {
            title: ActiveValue::Set(draft.title),
            description: ActiveValue::Set(draft.description),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut questions = Vec::with_capacity(draft.questions.len());
        for question in draft.questions {
            questions.push(insert_question(&txn, form.id, question).await?);
        }

        txn.commit().await?;

        Form::from_entity(form, questions)
    }

    /// Gets a form by ID with its questions.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Form>, DbErr> {
        let Some(form) = entity::prelude::Form::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let questions = find_questions(self.db, id).await?;

        Form::from_entity(form, questions).map(Some)
    }

    /// Gets all forms, newest first (ties by id descending).
    ///
    /// Questions are loaded with one additional query and grouped by form.
    pub async fn get_all(&self) -> Result<Vec<Form>, DbErr> {
        let forms = entity::prelude::Form::find()
            .order_by_desc(entity::form::Column::CreatedAt)
            .order_by_desc(entity::form::Column::Id)
            .all(self.db)
            .await?;

        if forms.is_empty() {
            return Ok(Vec::new());
        }

        let form_ids: Vec<i32> = forms.iter().map(|f| f.id).collect();

        let mut questions_by_form: HashMap<i32, Vec<entity::form_question::Model>> =
            HashMap::new();
        for question in entity::prelude::FormQuestion::find()
            .filter(entity::form_question::Column::FormId.is_in(form_ids))
            .all(self.db)
            .await?
        {
            questions_by_form
                .entry(question.form_id)
                .or_default()
                .push(question);
        }

        forms
            .into_iter()
            .map(|form| {
                let questions = questions_by_form.remove(&form.id).unwrap_or_default();
                Form::from_entity(form, questions)
            })
            .collect()
    }

    /// Applies a partial update in one transaction.
    ///
    /// `updated_at` is set to now, or one millisecond past the previous value when the
    /// clock has not advanced, so it strictly increases on every update.
    ///
    /// When `changes.questions` is set it replaces the question list: entries whose id
    /// names an existing question of this form are updated in place, other entries are
    /// inserted, and stored questions absent from the list are deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Form))` - Updated form
    /// - `Ok(None)` - No form with this id
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn update(
        &self,
        id: i32,
        changes: FormChanges,
        now: DateTime<Utc>,
    ) -> Result<Option<Form>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Form::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let updated_at = if now > existing.updated_at {
            now
        } else {
            existing.updated_at + Duration::milliseconds(1)
        };

        let mut active: entity::form::ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(updated_at);
        let form = active.update(&txn).await?;

        if let Some(questions) = changes.questions {
            replace_questions(&txn, id, questions).await?;
        }

        let questions = find_questions(&txn, id).await?;

        txn.commit().await?;

        Form::from_entity(form, questions).map(Some)
    }

    /// Deletes a form together with its questions, responses and answers.
    ///
    /// # Returns
    /// - `Ok(true)` - Form existed and was deleted
    /// - `Ok(false)` - No form with this id
    /// - `Err(DbErr)` - Database error, nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::Form::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        let response_ids: Vec<i32> = entity::prelude::FormResponse::find()
            .filter(entity::form_response::Column::FormId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        if !response_ids.is_empty() {
            entity::prelude::ResponseAnswer::delete_many()
                .filter(entity::response_answer::Column::ResponseId.is_in(response_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::FormResponse::delete_many()
            .filter(entity::form_response::Column::FormId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::FormQuestion::delete_many()
            .filter(entity::form_question::Column::FormId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Form::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn find_questions<C: ConnectionTrait>(
    db: &C,
    form_id: i32,
) -> Result<Vec<entity::form_question::Model>, DbErr> {
    entity::prelude::FormQuestion::find()
        .filter(entity::form_question::Column::FormId.eq(form_id))
        .order_by_asc(entity::form_question::Column::Order)
        .order_by_asc(entity::form_question::Column::Id)
        .all(db)
        .await
}

async fn insert_question<C: ConnectionTrait>(
    db: &C,
    form_id: i32,
    question: NewQuestion,
) -> Result<entity::form_question::Model, DbErr> {
    entity::form_question::ActiveModel {
        form_id: ActiveValue::Set(form_id),
        question_text: ActiveValue::Set(question.question_text),
        question_type: ActiveValue::Set(question.question_type.to_string()),
        options: ActiveValue::Set(encode_options(&question.options)?),
        required: ActiveValue::Set(question.required),
        order: ActiveValue::Set(question.order),
        ..Default::default()
    }
    .insert(db)
    .await
}

async fn replace_questions<C: ConnectionTrait>(
    db: &C,
    form_id: i32,
    questions: Vec<NewQuestion>,
) -> Result<(), DbErr> {
    let existing: HashSet<i32> = find_questions(db, form_id)
        .await?
        .into_iter()
        .map(|q| q.id)
        .collect();

    let kept: HashSet<i32> = questions
        .iter()
        .filter_map(|q| q.id)
        .filter(|id| existing.contains(id))
        .collect();

    let removed: Vec<i32> = existing.difference(&kept).copied().collect();
    if !removed.is_empty() {
        entity::prelude::FormQuestion::delete_many()
            .filter(entity::form_question::Column::Id.is_in(removed))
            .exec(db)
            .await?;
    }

    let mut updated = HashSet::new();
    for question in questions {
        // A repeated id only updates the stored question once; later copies are inserted.
        match question.id.filter(|id| kept.contains(id) && updated.insert(*id)) {
            Some(id) => {
                entity::form_question::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    form_id: ActiveValue::Unchanged(form_id),
                    question_text: ActiveValue::Set(question.question_text),
                    question_type: ActiveValue::Set(question.question_type.to_string()),
                    options: ActiveValue::Set(encode_options(&question.options)?),
                    required: ActiveValue::Set(question.required),
                    order: ActiveValue::Set(question.order),
                }
                .update(db)
                .await?;
            }
            None => {
                insert_question(db, form_id, question).await?;
            }
        }
    }

    Ok(())
}

fn encode_options(options: &[String]) -> Result<String, DbErr> {
    serde_json::to_string(options)
        .map_err(|e| DbErr::Custom(format!("Failed to encode question options: {}", e)))
}
