//! Static subject catalog.

use crate::models::{Subject, SubjectLevel};

pub static SUBJECTS: [Subject; 8] = [
    Subject {
        id: "math",
        name: "Mathématiques",
        description: "Algèbre, géométrie, calculs et résolution de problèmes",
        level: SubjectLevel::College,
        icon: "🔢",
        color: "bg-blue-500",
    },
    Subject {
        id: "sciences",
        name: "Sciences",
        description: "Physique, chimie, biologie et sciences de la terre",
        level: SubjectLevel::College,
        icon: "🔬",
        color: "bg-green-500",
    },
    Subject {
        id: "francais",
        name: "Français",
        description: "Littérature, grammaire, orthographe et expression écrite",
        level: SubjectLevel::College,
        icon: "📚",
        color: "bg-purple-500",
    },
    Subject {
        id: "histoire",
        name: "Histoire",
        description: "Événements historiques, civilisations et chronologie",
        level: SubjectLevel::College,
        icon: "🏛️",
        color: "bg-amber-500",
    },
    Subject {
        id: "geographie",
        name: "Géographie",
        description: "Continents, pays, climat et géographie physique",
        level: SubjectLevel::College,
        icon: "🌍",
        color: "bg-teal-500",
    },
    Subject {
        id: "anglais",
        name: "Anglais",
        description: "Vocabulaire, grammaire et compréhension anglaise",
        level: SubjectLevel::College,
        icon: "🇬🇧",
        color: "bg-red-500",
    },
    Subject {
        id: "art",
        name: "Arts Plastiques",
        description: "Dessin, peinture, sculpture et histoire de l'art",
        level: SubjectLevel::College,
        icon: "🎨",
        color: "bg-pink-500",
    },
    Subject {
        id: "sport",
        name: "Éducation Physique",
        description: "Sports, santé, nutrition et activité physique",
        level: SubjectLevel::College,
        icon: "⚽",
        color: "bg-orange-500",
    },
];

pub fn find(id: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|subject| subject.id == id)
}

pub fn by_level(level: SubjectLevel) -> impl Iterator<Item = &'static Subject> {
    SUBJECTS.iter().filter(move |subject| subject.level == level)
}
