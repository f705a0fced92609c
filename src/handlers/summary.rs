use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::present;
use crate::error::{AppError, CompletionError};
use crate::models::{Summary, SummaryLevel};
use crate::prompts::{summary_params, summary_prompt};
use crate::startup::AppState;
use crate::subjects;

#[derive(Deserialize, Debug, Default)]
pub struct GenerateSummaryRequest {
    pub content: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    pub subject: String,
    pub level: SummaryLevel,
    pub original_length: usize,
    pub summary_length: usize, // before trimming
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct GenerateSummaryResponse {
    pub success: bool,
    pub summary: String,
    pub metadata: SummaryMetadata,
    pub record: Summary,
}

pub async fn generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSummaryRequest>, JsonRejection>,
) -> Result<Json<GenerateSummaryResponse>, AppError> {
    let Json(request) = payload?;

    let (Some(content), Some(subject), Some(level)) = (
        present(request.content),
        present(request.subject),
        present(request.level),
    ) else {
        return Err(AppError::BadRequest(
            "Contenu, matière et niveau requis".to_string(),
        ));
    };

    let level = SummaryLevel::parse(&level).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Niveau invalide: {} (court, moyen ou detaille)",
            level
        ))
    })?;

    let prompt = summary_prompt(&content, &subject, level);
    let raw = state
        .completion
        .complete(&prompt, summary_params(level))
        .await
        .map_err(|err| {
            let err = match err {
                CompletionError::EmptyContent => CompletionError::EmptySummary,
                other => other,
            };
            tracing::error!(error = %err, subject = %subject, "Summary generation failed");
            AppError::SummaryGeneration(err)
        })?;

    let summary = raw.trim().to_string();
    let subject_name = subjects::find(&subject).map_or(subject.as_str(), |s| s.name);
    let record = Summary::new(&subject, subject_name, level, summary.clone());

    tracing::info!(
        subject = %subject,
        level = level.as_str(),
        words = record.word_count,
        "Summary generated"
    );

    Ok(Json(GenerateSummaryResponse {
        success: true,
        summary,
        metadata: SummaryMetadata {
            original_length: content.chars().count(),
            summary_length: raw.chars().count(),
            subject,
            level,
            generated_at: Utc::now(),
        },
        record,
    }))
}
