//! Fixed subject suggestion table.
//!
//! Suggestions depend only on (mood, energy level); they are not derived
//! from any history.

use super::{EnergyLevel, Mood};

/// Suggested subjects for a (mood, energy) combination, in display order.
pub fn suggested_subjects(mood: Mood, energy: EnergyLevel) -> &'static [&'static str] {
    use EnergyLevel::*;
    use Mood::*;

    match (mood, energy) {
        (Energetic, High) => &["Mathematics", "Programming", "Physics", "Language Learning"],
        (Energetic, Medium) => &["History", "Literature", "Biology", "Chemistry"],
        (Energetic, Low) => &["Art History", "Philosophy", "Music Theory", "Psychology"],
        (Focused, High) => &["Data Structures", "Calculus", "Research Methods", "Economics"],
        (Focused, Medium) => &[
            "Business Studies",
            "Geography",
            "Political Science",
            "Statistics",
        ],
        (Focused, Low) => &[
            "Creative Writing",
            "Sociology",
            "Environmental Science",
            "Design",
        ],
        (Relaxed, High) => &[
            "Foreign Languages",
            "Computer Science",
            "Engineering",
            "Finance",
        ],
        (Relaxed, Medium) => &["Marketing", "Psychology", "Anthropology", "Communication"],
        (Relaxed, Low) => &["Literature", "Art", "Music", "Film Studies"],
    }
}

/// Suggestion lookup over raw string labels.
///
/// An unknown mood or energy label yields the empty list, never an error.
pub fn suggest_for_labels(mood: &str, energy: &str) -> Vec<String> {
    match (mood.parse::<Mood>(), energy.parse::<EnergyLevel>()) {
        (Ok(mood), Ok(energy)) => suggested_subjects(mood, energy)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        _ => Vec::new(),
    }
}
