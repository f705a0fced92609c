//! Best-effort extraction of structured data from free-text model output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::CompletionError;
use crate::models::{Difficulty, Question, QuestionType};

pub const MISSING_EXPLANATION: &str = "Pas d'explication disponible";

// Greedy: first '{' through the last '}', across lines.
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Parses the outermost `{...}` span of `text`, or all of it when there is none.
pub fn extract_json_object(text: &str) -> Result<Value, CompletionError> {
    let candidate = JSON_OBJECT
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(text);

    serde_json::from_str(candidate).map_err(|err| {
        tracing::error!(error = %err, content = %text, "Model output is not valid JSON");
        CompletionError::InvalidFormat
    })
}

/// Maps the model's `questions` array onto well-formed questions.
///
/// Ids are renumbered from 1 and every question takes the requested difficulty.
/// Empty strings count as missing.
pub fn clean_questions(data: &Value, difficulty: Difficulty) -> Result<Vec<Question>, CompletionError> {
    let raw = data["questions"]
        .as_array()
        .ok_or(CompletionError::InvalidStructure)?;

    let questions = raw
        .iter()
        .enumerate()
        .map(|(index, q)| {
            let number = index + 1;
            let kind = non_empty_str(&q["type"])
                .and_then(QuestionType::parse)
                .unwrap_or(QuestionType::Qcm);

            let options = match kind {
                QuestionType::Qcm => Some(
                    q["options"]
                        .as_array()
                        .map(|options| {
                            options
                                .iter()
                                .filter_map(|o| o.as_str().map(str::to_string))
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default(),
                ),
                _ => None,
            };

            Question {
                id: number.to_string(),
                kind,
                question: non_empty_str(&q["question"])
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Question {}", number)),
                options,
                correct_answer: answer_text(&q["correctAnswer"]),
                explanation: non_empty_str(&q["explanation"])
                    .unwrap_or(MISSING_EXPLANATION)
                    .to_string(),
                difficulty,
            }
        })
        .collect();

    Ok(questions)
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn answer_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "vrai".to_string(),
        Value::Bool(false) => "faux".to_string(),
        _ => String::new(),
    }
}
