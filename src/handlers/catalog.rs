use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::models::{Subject, SubjectLevel, UserProgress};
use crate::subjects::{self, SUBJECTS};

#[derive(Deserialize, Debug)]
pub struct SubjectsQuery {
    pub level: Option<SubjectLevel>,
}

pub async fn list_subjects(
    query: Result<Query<SubjectsQuery>, QueryRejection>,
) -> Result<Json<Vec<&'static Subject>>, AppError> {
    let Query(query) = query?;

    let list: Vec<&'static Subject> = match query.level {
        Some(level) => subjects::by_level(level).collect(),
        None => SUBJECTS.iter().collect(),
    };
    Ok(Json(list))
}

pub async fn get_subject(Path(id): Path<String>) -> Result<Json<&'static Subject>, AppError> {
    subjects::find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Matière introuvable".to_string()))
}

// Simulated dashboard figures.
pub async fn progress() -> Json<UserProgress> {
    Json(UserProgress::simulated())
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "ecolearn",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
