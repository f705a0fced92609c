use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ---- Core Data Structures ----

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubjectLevel {
    Primaire,
    College,
    Lycee,
}

#[derive(Serialize, Debug, Clone)]
pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: SubjectLevel,
    pub icon: &'static str,
    pub color: &'static str, // CSS class used by the UI
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionType {
    #[serde(rename = "qcm")]
    Qcm,
    #[serde(rename = "vrai-faux")]
    VraiFaux,
    #[serde(rename = "ouverte")]
    Ouverte,
    // Anything a client sends back that we cannot grade.
    #[default]
    #[serde(rename = "inconnu", other)]
    Unknown,
}

impl QuestionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "qcm" => Some(QuestionType::Qcm),
            "vrai-faux" => Some(QuestionType::VraiFaux),
            "ouverte" => Some(QuestionType::Ouverte),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Facile,
    Difficile,
    #[default]
    #[serde(other)]
    Moyen,
}

impl Difficulty {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "facile" => Some(Difficulty::Facile),
            "moyen" => Some(Difficulty::Moyen),
            "difficile" => Some(Difficulty::Difficile),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Facile => "facile",
            Difficulty::Moyen => "moyen",
            Difficulty::Difficile => "difficile",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionType,
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>, // only for QCM
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub exam_id: String,
    pub answers: HashMap<String, String>, // question id -> answer
    pub score: f64,
    pub max_score: usize,
    pub percentage: u32,
    pub feedback: String,
    pub completed_at: DateTime<Utc>,
    pub time_spent: u64, // seconds, measured by the client
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLevel {
    Court,
    Moyen,
    Detaille,
}

impl SummaryLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "court" => Some(SummaryLevel::Court),
            "moyen" => Some(SummaryLevel::Moyen),
            "detaille" => Some(SummaryLevel::Detaille),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLevel::Court => "court",
            SummaryLevel::Moyen => "moyen",
            SummaryLevel::Detaille => "detaille",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub level: SummaryLevel,
    pub created_at: DateTime<Utc>,
    pub word_count: usize,
}

impl Summary {
    /// Builds the record the UI keeps in its history.
    pub fn new(subject: &str, subject_name: &str, level: SummaryLevel, content: String) -> Self {
        Summary {
            id: Uuid::new_v4(),
            title: format!("Résumé {}", subject_name),
            word_count: content.split(' ').count(),
            content,
            subject: subject.to_string(),
            level,
            created_at: Utc::now(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub subjects_studied: Vec<String>,
    pub total_summaries: u32,
    pub total_exams: u32,
    pub average_score: f32,
    pub last_activity: DateTime<Utc>,
    pub streak_days: u32,
    pub achievements: Vec<String>,
}

impl UserProgress {
    /// Dashboard figures. Not derived from any real history.
    pub fn simulated() -> Self {
        UserProgress {
            subjects_studied: vec!["math".into(), "sciences".into(), "francais".into()],
            total_summaries: 12,
            total_exams: 8,
            average_score: 85.0,
            last_activity: Utc::now(),
            streak_days: 7,
            achievements: vec![
                "Premier résumé".into(),
                "Examen parfait".into(),
                "Semaine studieuse".into(),
            ],
        }
    }
}
