//! Fixed study technique tables.
//!
//! Two tables feed block technique selection: a general list per energy
//! level and a subject-specific list for a small fixed set of subjects.
//! The technique for block index `i` is element `i` modulo the combined
//! list length, so techniques cycle as the schedule grows.

use super::EnergyLevel;

/// Returned when the combined technique list is empty.
const FALLBACK_TECHNIQUE: &str = "Focused Review";

/// General techniques for an energy level, in rotation order.
pub fn general_techniques(energy: EnergyLevel) -> &'static [&'static str] {
    match energy {
        EnergyLevel::High => &[
            "Active Recall",
            "Feynman Technique",
            "Mind Mapping",
            "Practice Problems",
            "Teaching Others",
        ],
        EnergyLevel::Medium => &[
            "Cornell Note-Taking",
            "Spaced Repetition",
            "Concept Mapping",
            "Summarization",
            "Question Generation",
        ],
        EnergyLevel::Low => &[
            "Simple Note-Taking",
            "Audio Recording",
            "Visual Learning",
            "Flashcards",
            "Mind Mapping",
        ],
    }
}

/// Subject-specific techniques. Subjects outside the fixed set get an
/// empty list and fall back to the general rotation alone.
pub fn subject_techniques(subject: &str) -> &'static [&'static str] {
    match subject {
        "Mathematics" => &["Problem Solving", "Formula Practice", "Concept Mapping"],
        "Programming" => &["Code Practice", "Project Building", "Documentation Reading"],
        "Physics" => &["Problem Sets", "Concept Visualization", "Lab Work Review"],
        "Language Learning" => &[
            "Immersion Practice",
            "Vocabulary Drills",
            "Conversation Practice",
        ],
        "History" => &["Timeline Creation", "Source Analysis", "Event Mapping"],
        "Literature" => &["Critical Reading", "Character Analysis", "Theme Mapping"],
        _ => &[],
    }
}

/// Pick the technique for study block `index`.
///
/// The combined list is general ++ subject-specific; selection wraps via
/// modulo. Guarded against an empty combined list so selection can never
/// divide by zero.
pub fn pick_technique(subject: &str, energy: EnergyLevel, index: usize) -> &'static str {
    let general = general_techniques(energy);
    let specific = subject_techniques(subject);

    let combined_len = general.len() + specific.len();
    if combined_len == 0 {
        return FALLBACK_TECHNIQUE;
    }

    let i = index % combined_len;
    if i < general.len() {
        general[i]
    } else {
        specific[i - general.len()]
    }
}
