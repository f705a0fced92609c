use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::present;
use crate::error::AppError;
use crate::models::{Difficulty, Question};
use crate::parsing::{clean_questions, extract_json_object};
use crate::prompts::{exam_prompt, EXAM_PARAMS};
use crate::startup::AppState;

pub const MAX_QUESTION_COUNT: u32 = 50;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateExamRequest {
    pub subject: Option<String>,
    pub difficulty: Option<String>,
    pub question_count: Option<u32>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExamMetadata {
    pub subject: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct GenerateExamResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub metadata: ExamMetadata,
}

pub async fn generate_exam(
    State(state): State<AppState>,
    payload: Result<Json<GenerateExamRequest>, JsonRejection>,
) -> Result<Json<GenerateExamResponse>, AppError> {
    let Json(request) = payload?;

    let (Some(subject), Some(difficulty), Some(question_count)) = (
        present(request.subject),
        present(request.difficulty),
        request.question_count.filter(|&n| n > 0),
    ) else {
        return Err(AppError::BadRequest(
            "Matière, difficulté et nombre de questions requis".to_string(),
        ));
    };

    let difficulty = Difficulty::parse(&difficulty).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Difficulté invalide: {} (facile, moyen ou difficile)",
            difficulty
        ))
    })?;

    if question_count > MAX_QUESTION_COUNT {
        return Err(AppError::BadRequest(format!(
            "Nombre de questions limité à {}",
            MAX_QUESTION_COUNT
        )));
    }

    let prompt = exam_prompt(&subject, difficulty, question_count);

    let questions = async {
        let content = state.completion.complete(&prompt, EXAM_PARAMS).await?;
        let data = extract_json_object(&content)?;
        clean_questions(&data, difficulty)
    }
    .await
    .map_err(|err| {
        tracing::error!(error = %err, subject = %subject, "Exam generation failed");
        AppError::ExamGeneration(err)
    })?;

    tracing::info!(
        subject = %subject,
        difficulty = difficulty.as_str(),
        requested = question_count,
        generated = questions.len(),
        "Exam generated"
    );

    Ok(Json(GenerateExamResponse {
        success: true,
        metadata: ExamMetadata {
            subject,
            difficulty,
            question_count: questions.len(),
            generated_at: Utc::now(),
        },
        questions,
    }))
}
