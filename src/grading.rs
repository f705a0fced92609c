//! Automatic exam correction.
//!
//! Closed questions (QCM, vrai/faux) need an exact match. Open questions get
//! partial credit once the answer is long enough; judging their quality is left
//! to the feedback written by the model.

use std::collections::HashMap;

use crate::models::{Question, QuestionType};

pub const OPEN_ANSWER_CREDIT: f64 = 0.8;
pub const OPEN_ANSWER_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub score: f64,
    pub max_score: usize,
    pub percentage: u32,
    pub lines: Vec<String>, // one per question, fed to the feedback prompt
}

pub fn grade(questions: &[Question], answers: &HashMap<String, String>) -> GradeReport {
    let mut score = 0.0;
    let mut lines = Vec::with_capacity(questions.len());

    for question in questions {
        let answer = answers.get(&question.id);

        match question.kind {
            QuestionType::Qcm | QuestionType::VraiFaux => {
                if answer == Some(&question.correct_answer) {
                    score += 1.0;
                    lines.push(format!("✅ Question {}: Correct", question.id));
                } else {
                    lines.push(format!(
                        "❌ Question {}: Incorrect. Bonne réponse: {}",
                        question.id, question.correct_answer
                    ));
                }
            }
            QuestionType::Ouverte => {
                let long_enough = answer
                    .map(|a| a.trim().chars().count() > OPEN_ANSWER_MIN_CHARS)
                    .unwrap_or(false);

                if long_enough {
                    score += OPEN_ANSWER_CREDIT;
                    lines.push(format!(
                        "🔍 Question {}: Réponse évaluée (crédit partiel)",
                        question.id
                    ));
                } else {
                    lines.push(format!("❌ Question {}: Réponse insuffisante", question.id));
                }
            }
            // Counts toward max_score, earns nothing, reports nothing.
            QuestionType::Unknown => {}
        }
    }

    let max_score = questions.len();
    let percentage = if max_score == 0 {
        0
    } else {
        (score / max_score as f64 * 100.0).round() as u32
    };

    GradeReport {
        score: (score * 100.0).round() / 100.0,
        max_score,
        percentage,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn question(id: &str, kind: QuestionType, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            kind,
            question: format!("Question {}", id),
            options: None,
            correct_answer: correct.to_string(),
            explanation: String::new(),
            difficulty: Difficulty::Moyen,
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, a)| (id.to_string(), a.to_string()))
            .collect()
    }

    #[test]
    fn closed_questions_need_exact_match() {
        let questions = vec![
            question("1", QuestionType::Qcm, "Paris"),
            question("2", QuestionType::Qcm, "Paris"),
            question("3", QuestionType::VraiFaux, "vrai"),
            question("4", QuestionType::VraiFaux, "faux"),
        ];
        let report = grade(
            &questions,
            &answers(&[("1", "Paris"), ("2", "paris"), ("3", "vrai"), ("4", "vrai")]),
        );

        assert_eq!(report.score, 2.0);
        assert_eq!(report.max_score, 4);
        assert_eq!(report.percentage, 50);
        assert_eq!(report.lines[0], "✅ Question 1: Correct");
        assert_eq!(report.lines[1], "❌ Question 2: Incorrect. Bonne réponse: Paris");
    }

    #[test]
    fn unanswered_question_scores_nothing() {
        let questions = vec![question("1", QuestionType::Qcm, "")];
        let report = grade(&questions, &HashMap::new());

        assert_eq!(report.score, 0.0);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn open_answers_get_partial_credit_past_ten_characters() {
        let questions = vec![
            question("1", QuestionType::Ouverte, "La photosynthèse"),
            question("2", QuestionType::Ouverte, "La photosynthèse"),
            question("3", QuestionType::Ouverte, "La photosynthèse"),
        ];
        let report = grade(
            &questions,
            &answers(&[
                ("1", "Les plantes utilisent la lumière"),
                // exactly ten characters once trimmed
                ("2", "   0123456789   "),
                ("3", "éééééééééééé"),
            ]),
        );

        assert_eq!(report.score, 1.6);
        assert_eq!(report.percentage, 53);
        assert_eq!(report.lines[0], "🔍 Question 1: Réponse évaluée (crédit partiel)");
        assert_eq!(report.lines[1], "❌ Question 2: Réponse insuffisante");
    }

    #[test]
    fn score_is_rounded_but_percentage_uses_raw_sum() {
        let questions: Vec<_> = (1..=3)
            .map(|i| question(&i.to_string(), QuestionType::Ouverte, ""))
            .collect();
        let long = "une réponse suffisamment longue";
        let report = grade(&questions, &answers(&[("1", long), ("2", long), ("3", long)]));

        assert_eq!(report.score, 2.4);
        assert_eq!(report.percentage, 80);
    }

    #[test]
    fn mixed_exam() {
        let questions = vec![
            question("1", QuestionType::Qcm, "4"),
            question("2", QuestionType::VraiFaux, "faux"),
            question("3", QuestionType::Ouverte, "Réponse type"),
        ];
        let report = grade(
            &questions,
            &answers(&[("1", "4"), ("2", "faux"), ("3", "court")]),
        );

        assert_eq!(report.score, 2.0);
        assert_eq!(report.percentage, 67);
        assert_eq!(report.lines.len(), 3);
    }

    #[test]
    fn ungradable_question_counts_toward_max_score_only() {
        let questions = vec![
            question("1", QuestionType::Qcm, "4"),
            question("2", QuestionType::Unknown, "Une dissertation"),
        ];
        let report = grade(
            &questions,
            &answers(&[("1", "4"), ("2", "Une très longue dissertation")]),
        );

        assert_eq!(report.score, 1.0);
        assert_eq!(report.max_score, 2);
        assert_eq!(report.percentage, 50);
        assert_eq!(report.lines, vec!["✅ Question 1: Correct".to_string()]);
    }

    #[test]
    fn empty_exam_scores_zero_percent() {
        let report = grade(&[], &HashMap::new());
        assert_eq!(report.max_score, 0);
        assert_eq!(report.percentage, 0);
        assert!(report.lines.is_empty());
    }
}
