use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of question/answer pairs every generated set must contain.
pub const QUESTIONS_PER_SET: usize = 5;

/// Interview difficulty. Drives the instruction block and exemplar table
/// selected by the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Moderate" => Ok(Difficulty::Moderate),
            "Difficult" => Ok(Difficulty::Difficult),
            _ => Err(()),
        }
    }
}

/// Raw interview parameters as submitted by a client.
///
/// Text fields default to empty when absent. Experience and difficulty are
/// kept as raw JSON so a wrong type (`"abc"`, `5`) becomes a field error
/// from `validate()` rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewForm {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience_years: Option<Value>,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

/// Validated interview parameters. Only obtainable through
/// `InterviewForm::validate`, so the pipeline never re-checks them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewRequest {
    pub(crate) position: String,
    pub(crate) description: String,
    pub(crate) experience_years: f64,
    pub(crate) tech_stack: String,
    pub(crate) difficulty: Difficulty,
}

impl InterviewRequest {
    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn experience_years(&self) -> f64 {
        self.experience_years
    }

    pub fn tech_stack(&self) -> &str {
        &self.tech_stack
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// A single form field that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// One generated interview question with its model answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
}

/// An ordered set of exactly `QUESTIONS_PER_SET` items.
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<QaItem>);

impl QuestionSet {
    /// Callers outside the extractor go through `extractor::parse_question_set`,
    /// which enforces the count and per-item shape.
    pub(crate) fn new_unchecked(items: Vec<QaItem>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[QaItem] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_serde_matches_display() {
        for difficulty in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Difficult] {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{difficulty}\""));
            assert_eq!(difficulty.as_str().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_difficulty_parse_is_case_sensitive() {
        assert!("easy".parse::<Difficulty>().is_err());
        assert!("Hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_form_tolerates_missing_fields() {
        let form: InterviewForm = serde_json::from_str("{}").unwrap();
        assert!(form.position.is_empty());
        assert!(form.experience_years.is_none());
        assert!(form.difficulty.is_none());
    }

    #[test]
    fn test_form_accepts_wrongly_typed_choice_fields() {
        let form: InterviewForm =
            serde_json::from_str(r#"{"experience_years": "abc", "difficulty": 5}"#).unwrap();
        assert_eq!(form.experience_years, Some(Value::from("abc")));
        assert_eq!(form.difficulty, Some(Value::from(5)));
    }

    #[test]
    fn test_question_set_serializes_as_bare_array() {
        let set = QuestionSet::new_unchecked(vec![QaItem {
            question: "Q".to_string(),
            answer: "A".to_string(),
        }]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!([{"question": "Q", "answer": "A"}]));
    }
}
