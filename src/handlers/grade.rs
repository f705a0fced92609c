use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::grading::{grade, GradeReport};
use crate::models::{ExamResult, Question};
use crate::prompts::{feedback_prompt, FEEDBACK_PARAMS};
use crate::startup::AppState;

pub const FALLBACK_FEEDBACK: &str = "Bon travail ! Continuez à étudier pour vous améliorer.";

#[derive(Deserialize, Debug, Default)]
pub struct GradeExamRequest {
    pub questions: Option<Vec<Question>>,
    pub answers: Option<HashMap<String, String>>,
}

pub async fn grade_exam(
    State(state): State<AppState>,
    payload: Result<Json<GradeExamRequest>, JsonRejection>,
) -> Result<Json<ExamResult>, AppError> {
    let Json(request) = payload?;

    let (Some(questions), Some(answers)) = (request.questions, request.answers) else {
        return Err(AppError::BadRequest(
            "Questions et réponses requises".to_string(),
        ));
    };

    let report = grade(&questions, &answers);
    let feedback = write_feedback(&state, &report).await;

    tracing::info!(
        questions = report.max_score,
        score = report.score,
        percentage = report.percentage,
        "Exam graded"
    );

    let now = Utc::now();
    Ok(Json(ExamResult {
        id: Uuid::new_v4().to_string(),
        exam_id: format!("exam_{}", now.timestamp_millis()),
        answers,
        score: report.score,
        max_score: report.max_score,
        percentage: report.percentage,
        feedback,
        completed_at: now,
        time_spent: 0,
    }))
}

/// Never fails the grading: any problem falls back to a stock message.
async fn write_feedback(state: &AppState, report: &GradeReport) -> String {
    let prompt = feedback_prompt(report.score, report.max_score, report.percentage, &report.lines);

    match state.completion.complete(&prompt, FEEDBACK_PARAMS).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => FALLBACK_FEEDBACK.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "Feedback generation failed, using fallback");
            FALLBACK_FEEDBACK.to_string()
        }
    }
}
