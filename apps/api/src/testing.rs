//! In-memory fakes of the external collaborators, for unit and router tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::store::{InterviewStore, InterviewUpdate, NewInterview};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::interview::InterviewRow;

/// A well-formed five-item model reply.
pub fn five_item_response() -> String {
    json!([
        {"question": "How do you design a REST endpoint for pagination?", "answer": "Use cursor or offset parameters and return a next link."},
        {"question": "How would you optimize a slow SQL query?", "answer": "Inspect the plan, add indexes, and avoid N+1 access."},
        {"question": "Compare callbacks, promises, and async/await in Node.", "answer": "They are successive abstractions over the event loop."},
        {"question": "How would you implement rate limiting?", "answer": "Token bucket per client stored in a shared cache."},
        {"question": "Describe a scenario where a transaction is required.", "answer": "Transferring funds between two accounts atomically."}
    ])
    .to_string()
}

enum Behaviour {
    Reply(String),
    Fail,
    Stall,
}

/// Scripted `TextGenerator` that records every prompt it receives.
pub struct FakeGenerator {
    behaviour: Behaviour,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with(Behaviour::Reply(reply.into()))
    }

    pub fn failing() -> Self {
        Self::with(Behaviour::Fail)
    }

    /// Never answers within any realistic timeout.
    pub fn stalling() -> Self {
        Self::with(Behaviour::Stall)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.clone()),
            Behaviour::Fail => Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }),
            Behaviour::Stall => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(LlmError::EmptyContent)
            }
        }
    }
}

/// `InterviewStore` backed by a HashMap. Writes can be made to fail.
#[derive(Default)]
pub struct InMemoryInterviewStore {
    rows: Mutex<HashMap<Uuid, InterviewRow>>,
    fail_writes: bool,
}

impl InMemoryInterviewStore {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, row: InterviewRow) {
        self.rows.lock().unwrap().insert(row.id, row);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::Internal(anyhow::anyhow!("store unavailable")));
        }
        Ok(())
    }
}

/// A stored interview owned by `user_id`, with placeholder content.
pub fn stored_interview(user_id: &str) -> InterviewRow {
    InterviewRow {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        position: "Frontend Engineer".to_string(),
        description: "Build user interfaces".to_string(),
        experience_years: 2.0,
        tech_stack: "React".to_string(),
        difficulty: "Easy".to_string(),
        questions: json!([]),
        is_default: false,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[async_trait]
impl InterviewStore for InMemoryInterviewStore {
    async fn create(&self, new: NewInterview<'_>) -> Result<InterviewRow, AppError> {
        self.check_writable()?;
        let row = InterviewRow {
            id: Uuid::new_v4(),
            user_id: new.user_id.to_string(),
            position: new.request.position().to_string(),
            description: new.request.description().to_string(),
            experience_years: new.request.experience_years(),
            tech_stack: new.request.tech_stack().to_string(),
            difficulty: new.request.difficulty().to_string(),
            questions: serde_json::to_value(new.questions).unwrap(),
            is_default: false,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.insert(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        update: InterviewUpdate<'_>,
    ) -> Result<InterviewRow, AppError> {
        self.check_writable()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;
        row.position = update.request.position().to_string();
        row.description = update.request.description().to_string();
        row.experience_years = update.request.experience_years();
        row.tech_stack = update.request.tech_stack().to_string();
        row.difficulty = update.request.difficulty().to_string();
        row.questions = serde_json::to_value(update.questions).unwrap();
        row.updated_at = Some(Utc::now());
        Ok(row.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<InterviewRow>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<InterviewRow>, AppError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.check_writable()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}
