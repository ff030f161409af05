use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::form::{Answer, FormResponse};

pub struct ResponseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResponseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a response and its answers in one transaction.
    ///
    /// Answer values are persisted as JSON text.
    ///
    /// # Returns
    /// - `Ok(i32)` - Generated response id
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(
        &self,
        form_id: i32,
        answers: Vec<Answer>,
        ip_address: Option<String>,
        submitted_at: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;

        let response = entity::form_response::ActiveModel {
            form_id: ActiveValue::Set(form_id),
            submitted_at: ActiveValue::Set(submitted_at),
            ip_address: ActiveValue::Set(ip_address),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for answer in answers {
            let value = serde_json::to_string(&answer.value)
                .map_err(|e| DbErr::Custom(format!("Failed to encode answer value: {}", e)))?;

            entity::response_answer::ActiveModel {
                response_id: ActiveValue::Set(response.id),
                question_id: ActiveValue::Set(answer.question_id),
                value: ActiveValue::Set(value),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(response.id)
    }

    /// Gets all responses of a form, newest first (ties by id descending).
    ///
    /// Answers are loaded with one additional query and keep their insertion order.
    pub async fn get_by_form_id(&self, form_id: i32) -> Result<Vec<FormResponse>, DbErr> {
        let responses = entity::prelude::FormResponse::find()
            .filter(entity::form_response::Column::FormId.eq(form_id))
            .order_by_desc(entity::form_response::Column::SubmittedAt)
            .order_by_desc(entity::form_response::Column::Id)
            .all(self.db)
            .await?;

        if responses.is_empty() {
            return Ok(Vec::new());
        }

        let response_ids: Vec<i32> = responses.iter().map(|r| r.id).collect();

        let mut answers_by_response: HashMap<i32, Vec<entity::response_answer::Model>> =
            HashMap::new();
        for answer in entity::prelude::ResponseAnswer::find()
            .filter(entity::response_answer::Column::ResponseId.is_in(response_ids))
            .order_by_asc(entity::response_answer::Column::Id)
            .all(self.db)
            .await?
        {
            answers_by_response
                .entry(answer.response_id)
                .or_default()
                .push(answer);
        }

        responses
            .into_iter()
            .map(|response| {
                let answers = answers_by_response.remove(&response.id).unwrap_or_default();
                FormResponse::from_entity(response, answers)
            })
            .collect()
    }
}
