//! Question Pipeline — orchestrates one generation.
//!
//! Flow: build_prompt → one LLM call (bounded by timeout, never retried) →
//!       extract_question_set (payload extraction + shape check).
//!
//! Stateless: the pipeline only holds read-only collaborator handles, so one
//! instance is shared across all requests.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::interview::extractor::{extract_question_set, ExtractionError};
use crate::interview::models::{InterviewRequest, QuestionSet};
use crate::interview::prompt_builder::build_prompt;
use crate::interview::prompts::QUESTION_SYSTEM;
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Generative AI call failed: {0}")]
    UpstreamCallFailure(#[from] LlmError),

    #[error("Generative AI call timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

#[derive(Clone)]
pub struct QuestionPipeline {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl QuestionPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Generates a question set, seeding the prompt with the current time.
    pub async fn generate(&self, request: &InterviewRequest) -> Result<QuestionSet, PipelineError> {
        let seed = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.generate_with_seed(request, seed).await
    }

    /// Deterministic variant of `generate` for a caller-chosen seed.
    pub async fn generate_with_seed(
        &self,
        request: &InterviewRequest,
        seed: u64,
    ) -> Result<QuestionSet, PipelineError> {
        info!(
            "Generating {} questions for '{}'",
            request.difficulty(),
            request.position()
        );

        let prompt = build_prompt(request, seed);

        let call = self.generator.complete(&prompt, QUESTION_SYSTEM);
        let raw = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                warn!("Question generation timed out after {:?}", self.timeout);
                PipelineError::Timeout(self.timeout)
            })?
            .inspect_err(|e| warn!("Question generation LLM call failed: {e}"))?;

        let questions = extract_question_set(&raw).inspect_err(|e| {
            warn!(
                "Could not extract questions: {e}; response starts with {:?}",
                raw.chars().take(120).collect::<String>()
            )
        })?;

        info!("Generated {} questions", questions.len());
        Ok(questions)
    }
}
