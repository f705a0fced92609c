use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures talking to, or making sense of, the completion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Erreur de communication avec l'IA: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Erreur API IA: {0}")]
    Status(u16),

    #[error("Aucune réponse de l'IA")]
    EmptyContent,

    #[error("Aucun résumé généré par l'IA")]
    EmptySummary,

    #[error("Format de réponse IA invalide")]
    InvalidFormat,

    #[error("Structure de questions invalide")]
    InvalidStructure,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Exam generation failed: {0}")]
    ExamGeneration(#[source] CompletionError),

    #[error("Summary generation failed: {0}")]
    SummaryGeneration(#[source] CompletionError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Requête invalide: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Paramètres invalides: {}", rejection.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::ExamGeneration(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erreur lors de la génération de l'examen".to_string(),
                Some(err.to_string()),
            ),
            AppError::SummaryGeneration(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erreur lors de la génération du résumé".to_string(),
                Some(err.to_string()),
            ),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
