//! French prompt templates sent to the completion service.

use crate::completion::CompletionParams;
use crate::models::{Difficulty, SummaryLevel};

pub const EXAM_PARAMS: CompletionParams = CompletionParams {
    max_tokens: 2000,
    temperature: 0.8,
};

pub const FEEDBACK_PARAMS: CompletionParams = CompletionParams {
    max_tokens: 200,
    temperature: 0.7,
};

pub fn summary_params(level: SummaryLevel) -> CompletionParams {
    let max_tokens = match level {
        SummaryLevel::Detaille => 1000,
        SummaryLevel::Moyen => 700,
        SummaryLevel::Court => 400,
    };
    CompletionParams {
        max_tokens,
        temperature: 0.7,
    }
}

fn exam_subject_hint(subject: &str) -> &'static str {
    match subject {
        "math" => "Crée des questions de mathématiques incluant calculs, géométrie, algèbre et résolution de problèmes.",
        "sciences" => "Génère des questions sur la physique, chimie, biologie avec des concepts scientifiques et expériences.",
        "francais" => "Pose des questions sur la grammaire, orthographe, littérature et compréhension de texte.",
        "histoire" => "Crée des questions sur les événements historiques, dates importantes et personnages célèbres.",
        "geographie" => "Génère des questions sur la géographie mondiale, climat, populations et ressources naturelles.",
        "anglais" => "Pose des questions sur le vocabulaire anglais, grammaire et compréhension.",
        "art" => "Crée des questions sur l'histoire de l'art, techniques artistiques et artistes célèbres.",
        "sport" => "Génère des questions sur les sports, règles, techniques et bienfaits de l'activité physique.",
        _ => "Questions générales sur le sujet",
    }
}

fn difficulty_instruction(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Facile => "Questions niveau débutant avec des concepts de base",
        Difficulty::Moyen => "Questions niveau intermédiaire avec des applications pratiques",
        Difficulty::Difficile => "Questions niveau avancé avec des analyses complexes",
    }
}

fn summary_subject_hint(subject: &str) -> &'static str {
    match subject {
        "math" => "Concentre-toi sur les formules, théorèmes et méthodes de résolution.",
        "sciences" => "Mets l'accent sur les concepts scientifiques, expériences et phénomènes.",
        "francais" => "Souligne les éléments littéraires, grammaticaux et stylistiques.",
        "histoire" => "Organise chronologiquement les événements, dates et personnages clés.",
        "geographie" => "Structure par régions, climat, populations et ressources.",
        "anglais" => "Inclus le vocabulaire clé, structures grammaticales et expressions.",
        "art" => "Décris les techniques, styles artistiques et contexte historique.",
        "sport" => "Couvre les règles, techniques, bénéfices santé et aspects tactiques.",
        _ => "Organise le contenu de manière claire et éducative.",
    }
}

fn length_instruction(level: SummaryLevel) -> &'static str {
    match level {
        SummaryLevel::Court => "en 100-200 mots maximum",
        SummaryLevel::Moyen => "en 300-500 mots",
        SummaryLevel::Detaille => "en 600 mots ou plus avec tous les détails importants",
    }
}

pub fn exam_prompt(subject: &str, difficulty: Difficulty, question_count: u32) -> String {
    let level = difficulty.as_str();
    format!(
        r#"Tu es un générateur d'examens éducatifs. Crée exactement {count} questions pour un examen de {subject}.

NIVEAU: {level} ({instruction})
MATIÈRE: {hint}

CONSIGNES STRICTES:
1. Génère exactement {count} questions
2. Mélange les types: 60% QCM, 25% Vrai/Faux, 15% Questions ouvertes
3. Pour chaque QCM: 4 options avec UNE SEULE bonne réponse
4. Pour Vrai/Faux: une affirmation claire
5. Pour questions ouvertes: réponses en 1-3 phrases

FORMAT JSON OBLIGATOIRE:
{{
  "questions": [
    {{
      "id": "1",
      "type": "qcm",
      "question": "Question ici ?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": "Option A",
      "explanation": "Explication de la bonne réponse",
      "difficulty": "{level}"
    }},
    {{
      "id": "2",
      "type": "vrai-faux",
      "question": "Affirmation ici",
      "correctAnswer": "vrai",
      "explanation": "Explication",
      "difficulty": "{level}"
    }},
    {{
      "id": "3",
      "type": "ouverte",
      "question": "Question ouverte ?",
      "correctAnswer": "Réponse type attendue",
      "explanation": "Explication des points clés",
      "difficulty": "{level}"
    }}
  ]
}}

IMPORTANT: Répond UNIQUEMENT avec le JSON valide, sans texte supplémentaire."#,
        count = question_count,
        subject = subject,
        level = level,
        instruction = difficulty_instruction(difficulty),
        hint = exam_subject_hint(subject),
    )
}

pub fn summary_prompt(content: &str, subject: &str, level: SummaryLevel) -> String {
    format!(
        "Tu es un assistant éducatif expert. Crée un résumé structuré et pédagogique du contenu suivant.

MATIÈRE: {subject}
NIVEAU DE DÉTAIL: {level} ({length})

INSTRUCTIONS SPÉCIFIQUES:
{hint}

CONTENU À RÉSUMER:
{content}

STRUCTURE ATTENDUE:
1. Commencer par une phrase d'introduction
2. Organiser en points clés avec des sous-sections si nécessaire
3. Utiliser des exemples concrets
4. Terminer par une conclusion synthétique
5. Utiliser un langage adapté aux étudiants

FORMAT: Texte structuré avec des sauts de ligne et une présentation claire.",
        subject = subject,
        level = level.as_str(),
        length = length_instruction(level),
        hint = summary_subject_hint(subject),
        content = content,
    )
}

pub fn feedback_prompt(score: f64, max_score: usize, percentage: u32, lines: &[String]) -> String {
    format!(
        "Tu es un tuteur bienveillant. L'étudiant a obtenu {score}/{max_score} ({percentage}%) à son examen.

PERFORMANCE:
{performance}

Crée un feedback personnalisé et encourageant en 2-3 phrases qui:
1. Félicite les points réussis
2. Encourage à réviser les erreurs
3. Donne des conseils d'amélioration spécifiques
4. Reste positif et motivant

Réponds directement le feedback, sans introduction.",
        score = score,
        max_score = max_score,
        percentage = percentage,
        performance = lines.join("\n"),
    )
}
