use serde_json::Value;

use crate::interview::models::{Difficulty, FieldError, InterviewForm, InterviewRequest};

pub const POSITION_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

impl InterviewForm {
    /// Validates every field and returns the typed request, or one error per
    /// offending field.
    ///
    /// FAIL conditions:
    /// - position empty or longer than 100 characters
    /// - description shorter than 10 characters
    /// - experience missing, negative, or not a finite number (numeric strings count)
    /// - tech stack empty
    /// - difficulty missing or not one of Easy / Moderate / Difficult
    pub fn validate(&self) -> Result<InterviewRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let position_len = self.position.chars().count();
        if position_len == 0 {
            errors.push(FieldError {
                field: "position",
                message: "Position is required",
            });
        } else if position_len > POSITION_MAX_CHARS {
            errors.push(FieldError {
                field: "position",
                message: "Position must be 100 characters or less",
            });
        }

        if self.description.chars().count() < DESCRIPTION_MIN_CHARS {
            errors.push(FieldError {
                field: "description",
                message: "Description is required",
            });
        }

        let experience_years = match self.experience_years.as_ref().and_then(years_from) {
            Some(years) if years.is_finite() && years >= 0.0 => Some(years),
            _ => {
                errors.push(FieldError {
                    field: "experience_years",
                    message: "Experience cannot be empty or negative",
                });
                None
            }
        };

        if self.tech_stack.is_empty() {
            errors.push(FieldError {
                field: "tech_stack",
                message: "Tech stack must be at least a character",
            });
        }

        let difficulty = match self
            .difficulty
            .as_ref()
            .and_then(Value::as_str)
            .map(str::parse::<Difficulty>)
        {
            Some(Ok(difficulty)) => Some(difficulty),
            _ => {
                errors.push(FieldError {
                    field: "difficulty",
                    message: "Please select a difficulty level",
                });
                None
            }
        };

        match (experience_years, difficulty) {
            (Some(experience_years), Some(difficulty)) if errors.is_empty() => {
                Ok(InterviewRequest {
                    position: self.position.clone(),
                    description: self.description.clone(),
                    experience_years,
                    tech_stack: self.tech_stack.clone(),
                    difficulty,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Numbers pass through; HTML number inputs may also post them as strings.
fn years_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
