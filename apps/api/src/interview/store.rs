//! Interview Store — the document-store collaborator.
//!
//! Handlers depend on the `InterviewStore` trait; `AppState` carries an
//! `Arc<dyn InterviewStore>`. `PgInterviewStore` is the PostgreSQL backend.
//! Timestamps are always assigned by the database.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{InterviewRequest, QuestionSet};
use crate::models::interview::InterviewRow;

/// Fields for a new user-created interview.
pub struct NewInterview<'a> {
    pub user_id: &'a str,
    pub request: &'a InterviewRequest,
    pub questions: &'a QuestionSet,
}

/// Replacement parameters and questions for an existing interview.
pub struct InterviewUpdate<'a> {
    pub request: &'a InterviewRequest,
    pub questions: &'a QuestionSet,
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Inserts a new document with `is_default = false`.
    async fn create(&self, new: NewInterview<'_>) -> Result<InterviewRow, AppError>;

    /// Overwrites parameters and questions, stamping `updated_at`.
    /// `AppError::NotFound` if the id does not exist.
    async fn update(&self, id: Uuid, update: InterviewUpdate<'_>)
        -> Result<InterviewRow, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<InterviewRow>, AppError>;

    /// All interviews owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<InterviewRow>, AppError>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct PgInterviewStore {
    pool: PgPool,
}

impl PgInterviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn questions_json(questions: &QuestionSet) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(questions)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize questions: {e}")))
}

#[async_trait]
impl InterviewStore for PgInterviewStore {
    async fn create(&self, new: NewInterview<'_>) -> Result<InterviewRow, AppError> {
        let questions = questions_json(new.questions)?;

        let row = sqlx::query_as::<_, InterviewRow>(
            r#"
            INSERT INTO interviews
                (id, user_id, position, description, experience_years,
                 tech_stack, difficulty, questions, is_default, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.request.position())
        .bind(new.request.description())
        .bind(new.request.experience_years())
        .bind(new.request.tech_stack())
        .bind(new.request.difficulty().as_str())
        .bind(&questions)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        update: InterviewUpdate<'_>,
    ) -> Result<InterviewRow, AppError> {
        let questions = questions_json(update.questions)?;

        sqlx::query_as::<_, InterviewRow>(
            r#"
            UPDATE interviews
            SET position = $2,
                description = $3,
                experience_years = $4,
                tech_stack = $5,
                difficulty = $6,
                questions = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.request.position())
        .bind(update.request.description())
        .bind(update.request.experience_years())
        .bind(update.request.tech_stack())
        .bind(update.request.difficulty().as_str())
        .bind(&questions)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))
    }

    async fn get(&self, id: Uuid) -> Result<Option<InterviewRow>, AppError> {
        let row = sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<InterviewRow>, AppError> {
        let rows = sqlx::query_as::<_, InterviewRow>(
            "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
