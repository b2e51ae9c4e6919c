//! Two-step planner wizard.
//!
//! The original flow collects answers across two screens: mood/energy
//! first, then subject selection and available time. Here that in-progress
//! state is an explicit struct instead of ambient UI state; `finish()`
//! yields an immutable [`PlannerInput`] for the generator.

use serde::{Deserialize, Serialize};

use super::suggestions::suggested_subjects;
use super::{EnergyLevel, Mood, PlannerInput, TimeBucket};
use crate::error::ValidationError;

/// Result of completing the mood step.
///
/// Carries everything the backend records about the step; the caller
/// forwards it fire-and-forget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodStepOutcome {
    pub mood: Mood,
    pub energy_level: EnergyLevel,
    pub suggestions: Vec<String>,
}

/// In-progress planner answers.
#[derive(Debug, Clone, Default)]
pub struct PlannerWizard {
    mood: Option<Mood>,
    energy_level: Option<EnergyLevel>,
    suggestions: Vec<String>,
    subjects: Vec<String>,
    time_available: TimeBucket,
}

impl PlannerWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
    }

    pub fn set_energy_level(&mut self, energy_level: EnergyLevel) {
        self.energy_level = Some(energy_level);
    }

    /// Whether the mood step can be submitted (both answers present).
    pub fn can_suggest(&self) -> bool {
        self.mood.is_some() && self.energy_level.is_some()
    }

    /// Complete the mood step: look up suggestions and move to subject
    /// selection. Fails while either answer is missing.
    pub fn confirm_mood(&mut self) -> Result<MoodStepOutcome, ValidationError> {
        let mood = self
            .mood
            .ok_or_else(|| ValidationError::MissingField("mood".to_string()))?;
        let energy_level = self
            .energy_level
            .ok_or_else(|| ValidationError::MissingField("energy_level".to_string()))?;

        self.suggestions = suggested_subjects(mood, energy_level)
            .iter()
            .map(|s| s.to_string())
            .collect();

        Ok(MoodStepOutcome {
            mood,
            energy_level,
            suggestions: self.suggestions.clone(),
        })
    }

    /// Suggestions computed by the last `confirm_mood` call.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Toggle a suggested subject: select it if absent, deselect if present.
    pub fn toggle_subject(&mut self, name: &str) {
        if let Some(pos) = self.subjects.iter().position(|s| s == name) {
            self.subjects.remove(pos);
        } else {
            self.subjects.push(name.to_string());
        }
    }

    /// Add a free-text subject. Duplicates (exact string match) and empty
    /// entries are ignored; returns whether the subject was added.
    pub fn add_custom_subject(&mut self, name: &str) -> bool {
        if name.is_empty() || self.subjects.iter().any(|s| s == name) {
            return false;
        }
        self.subjects.push(name.to_string());
        true
    }

    pub fn remove_subject(&mut self, name: &str) {
        self.subjects.retain(|s| s != name);
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn set_time_available(&mut self, bucket: TimeBucket) {
        self.time_available = bucket;
    }

    /// Whether plan generation can be triggered.
    pub fn can_generate(&self) -> bool {
        self.can_suggest() && !self.subjects.is_empty()
    }

    /// Finalize the answers into an immutable [`PlannerInput`].
    pub fn finish(&self) -> Result<PlannerInput, ValidationError> {
        let mood = self
            .mood
            .ok_or_else(|| ValidationError::MissingField("mood".to_string()))?;
        let energy_level = self
            .energy_level
            .ok_or_else(|| ValidationError::MissingField("energy_level".to_string()))?;
        if self.subjects.is_empty() {
            return Err(ValidationError::EmptyCollection("subjects".to_string()));
        }

        Ok(PlannerInput {
            mood,
            energy_level,
            time_available: self.time_available,
            subjects: self.subjects.clone(),
        })
    }
}
