//! HTTP handlers. Each request is independent; the only shared state is the
//! completion client.

mod catalog;
mod exam;
mod grade;
mod summary;

pub use catalog::{get_subject, health_check, list_subjects, progress};
pub use exam::{generate_exam, ExamMetadata, GenerateExamRequest, GenerateExamResponse};
pub use grade::{grade_exam, GradeExamRequest, FALLBACK_FEEDBACK};
pub use summary::{
    generate_summary, GenerateSummaryRequest, GenerateSummaryResponse, SummaryMetadata,
};

/// Treats empty strings like absent fields.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
