use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted mock interview document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    /// External identity provider id of the owner.
    pub user_id: String,
    pub position: String,
    pub description: String,
    pub experience_years: f64,
    pub tech_stack: String,
    pub difficulty: String,
    pub questions: Value,
    /// True only for seeded template interviews; user-created ones are false.
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
