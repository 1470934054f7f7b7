//! Axum route handlers for the Interview API.
//!
//! Every generation follows the same order: validate → ownership check →
//! pipeline → store write. Nothing is persisted unless the pipeline succeeds,
//! and a failed store write fails the request.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{InterviewForm, QuestionSet};
use crate::interview::store::{InterviewUpdate, NewInterview};
use crate::models::interview::InterviewRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Interview parameters submitted on behalf of a user.
#[derive(Debug, Deserialize)]
pub struct InterviewSubmission {
    #[serde(default)]
    pub user_id: String,
    #[serde(flatten)]
    pub form: InterviewForm,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: QuestionSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews/generate
///
/// Generates a question set without persisting it.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<InterviewForm>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let request = form.validate().map_err(AppError::InvalidFields)?;
    let questions = state.pipeline.generate(&request).await?;
    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// POST /api/v1/interviews
///
/// Generates questions and stores them as a new user-created interview.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(submission): Json<InterviewSubmission>,
) -> Result<(StatusCode, Json<InterviewRow>), AppError> {
    let user_id = require_user_id(&submission.user_id)?;
    let request = submission.form.validate().map_err(AppError::InvalidFields)?;

    let questions = state.pipeline.generate(&request).await?;

    let row = state
        .store
        .create(NewInterview {
            user_id,
            request: &request,
            questions: &questions,
        })
        .await?;

    info!("Created interview {} for user {}", row.id, user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/interviews/:id
///
/// Regenerates questions for new parameters and overwrites the interview.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(submission): Json<InterviewSubmission>,
) -> Result<Json<InterviewRow>, AppError> {
    let user_id = require_user_id(&submission.user_id)?;
    let request = submission.form.validate().map_err(AppError::InvalidFields)?;

    load_owned(&state, id, user_id).await?;

    let questions = state.pipeline.generate(&request).await?;

    let row = state
        .store
        .update(
            id,
            InterviewUpdate {
                request: &request,
                questions: &questions,
            },
        )
        .await?;

    info!("Updated interview {} for user {}", id, user_id);
    Ok(Json(row))
}

/// GET /api/v1/interviews?user_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let user_id = require_user_id(&params.user_id)?;
    Ok(Json(state.store.list_for_user(user_id).await?))
}

/// GET /api/v1/interviews/:id?user_id=
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InterviewRow>, AppError> {
    let user_id = require_user_id(&params.user_id)?;
    Ok(Json(load_owned(&state, id, user_id).await?))
}

/// DELETE /api/v1/interviews/:id?user_id=
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(&params.user_id)?;
    load_owned(&state, id, user_id).await?;

    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("Interview {id} not found")));
    }

    info!("Deleted interview {} for user {}", id, user_id);
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_user_id(user_id: &str) -> Result<&str, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    Ok(user_id)
}

/// Fetches an interview and checks it belongs to `user_id`.
async fn load_owned(state: &AppState, id: Uuid, user_id: &str) -> Result<InterviewRow, AppError> {
    let row = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    if row.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(row)
}
