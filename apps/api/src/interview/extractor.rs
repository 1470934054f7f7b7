//! Response Extractor — turns loosely formatted model output into a JSON
//! payload, then into a validated `QuestionSet`.
//!
//! Flow: trim → fenced block (if any) → bracket span → JSON parse → shape check.
//! Models routinely wrap the array in prose or code fences; anything outside
//! the first `[` .. last `]` span is ignored, but the span itself must parse.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::interview::models::{QaItem, QuestionSet, QUESTIONS_PER_SET};

/// Paired triple-backtick fence with an optional info string (`json`, `JSON`, ...).
/// Both markers must open a line, so backticks inside JSON string values
/// (which cannot contain raw newlines) never count as a fence.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^[ \t]*```[^\n`]*\n(.*?)^[ \t]*```")
        .expect("fenced block pattern is valid")
});

/// Greedy first-`[`-to-last-`]` span, across newlines.
static BRACKET_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("bracket span pattern is valid"));

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("No JSON array found in response")]
    NoStructuredPayloadFound,

    #[error("Invalid JSON format: {0}")]
    MalformedResponse(String),

    #[error("Expected a JSON array of questions")]
    NotAnArray,

    #[error("Expected {expected} questions, got {actual}")]
    UnexpectedQuestionCount { expected: usize, actual: usize },

    #[error("Question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Extracts and parses the bracketed JSON payload from raw model text.
///
/// Returns the parsed value as-is; `parse_question_set` applies the shape rules.
pub fn extract_payload(raw: &str) -> Result<Value, ExtractionError> {
    first_success(raw, payload_from)
}

/// Validates a parsed payload as exactly `QUESTIONS_PER_SET` non-blank
/// question/answer pairs. Item text is trimmed.
pub fn parse_question_set(payload: &Value) -> Result<QuestionSet, ExtractionError> {
    let items = payload.as_array().ok_or(ExtractionError::NotAnArray)?;

    if items.len() != QUESTIONS_PER_SET {
        return Err(ExtractionError::UnexpectedQuestionCount {
            expected: QUESTIONS_PER_SET,
            actual: items.len(),
        });
    }

    let items = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new_unchecked(items))
}

/// `extract_payload` followed by `parse_question_set`, with the same
/// candidate fallback: a fenced block that does not yield a valid set
/// gives way to the whole text.
pub fn extract_question_set(raw: &str) -> Result<QuestionSet, ExtractionError> {
    first_success(raw, |candidate| {
        payload_from(candidate).and_then(|payload| parse_question_set(&payload))
    })
}

/// Candidate texts in priority order: the first fenced block, then the whole text.
fn candidates(text: &str) -> Vec<&str> {
    let fenced = FENCED_BLOCK
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    fenced.into_iter().chain(std::iter::once(text)).collect()
}

/// Runs `attempt` on each candidate, returning the first success or the
/// whole-text error.
fn first_success<T>(
    raw: &str,
    attempt: impl Fn(&str) -> Result<T, ExtractionError>,
) -> Result<T, ExtractionError> {
    let mut last_error = ExtractionError::NoStructuredPayloadFound;
    for candidate in candidates(raw.trim()) {
        match attempt(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}

/// Bracket span of one candidate, parsed as JSON.
fn payload_from(candidate: &str) -> Result<Value, ExtractionError> {
    let span = BRACKET_SPAN
        .find(candidate)
        .ok_or(ExtractionError::NoStructuredPayloadFound)?;
    serde_json::from_str(span.as_str())
        .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))
}

fn parse_item(index: usize, item: &Value) -> Result<QaItem, ExtractionError> {
    let object = item.as_object().ok_or_else(|| ExtractionError::InvalidQuestion {
        index,
        reason: "not an object".to_string(),
    })?;

    let field = |name: &str| -> Result<String, ExtractionError> {
        let text = object
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ExtractionError::InvalidQuestion {
                index,
                reason: format!("missing or blank `{name}`"),
            });
        }
        Ok(text.to_string())
    };

    Ok(QaItem {
        question: field("question")?,
        answer: field("answer")?,
    })
}
