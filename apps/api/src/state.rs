use std::sync::Arc;

use crate::interview::pipeline::QuestionPipeline;
use crate::interview::store::InterviewStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store. Default: PgInterviewStore.
    pub store: Arc<dyn InterviewStore>,
    /// Question generation pipeline, wrapping the LLM client.
    pub pipeline: QuestionPipeline,
}
