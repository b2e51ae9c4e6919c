//! Deterministic block-pair schedule generator.
//!
//! Turns a [`PlannerInput`] into an alternating sequence of study and
//! break blocks. The computation is pure: no randomness, no clock reads,
//! no side effects. Calling it twice with the same input yields an
//! identical schedule.

use serde::{Deserialize, Serialize};

use super::techniques::pick_technique;
use super::PlannerInput;

/// Type of schedule block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Study block assigned to one subject
    Study,
    /// Fixed-length rest block
    Break,
}

/// One block of the generated schedule.
///
/// Serialized in the wire shape the backend stores under
/// `ai_study_plans.schedule`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Rendered wall-clock label, e.g. "9:00" or "9:45".
    pub start_time: String,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Hour the first study block is labeled with
    pub start_hour: u32,
    /// Break block length (minutes)
    pub break_minutes: u32,
    /// Recommendations attached to every break block
    pub break_recommendations: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_hour: 9,
            break_minutes: 10,
            break_recommendations: vec![
                "Stand up and stretch".to_string(),
                "Drink water".to_string(),
                "Deep breathing".to_string(),
            ],
        }
    }
}

/// Deterministic study schedule generator.
pub struct PlanGenerator {
    config: GeneratorConfig,
}

impl PlanGenerator {
    /// Create a new generator with default config.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the alternating study/break schedule for `input`.
    ///
    /// Callers are expected to prevent invocation with an empty subject
    /// list; if it happens anyway the result is an empty schedule, not an
    /// error.
    ///
    /// The start-time labels advance one full hour per block pair even
    /// when the pair is shorter than 60 minutes, so rendered times drift
    /// from cumulative elapsed time for low and medium energy levels.
    /// That matches the shipped behavior exactly and is pinned by tests.
    pub fn generate(&self, input: &PlannerInput) -> Vec<ScheduleBlock> {
        if input.subjects.is_empty() {
            return Vec::new();
        }

        let planning_minutes = input.time_available.planning_minutes();
        let study_minutes = input.energy_level.study_block_minutes();
        let total_pairs = planning_minutes / (study_minutes + self.config.break_minutes);

        let mut blocks = Vec::with_capacity(total_pairs as usize * 2);
        let mut hour = self.config.start_hour;

        for i in 0..total_pairs as usize {
            let subject = &input.subjects[i % input.subjects.len()];

            blocks.push(ScheduleBlock {
                block_type: BlockType::Study,
                start_time: format!("{hour}:00"),
                duration_minutes: study_minutes,
                subject: Some(subject.clone()),
                activity: Some(format!("{subject} Study Session")),
                technique: Some(pick_technique(subject, input.energy_level, i).to_string()),
                recommendations: None,
            });

            blocks.push(ScheduleBlock {
                block_type: BlockType::Break,
                start_time: format!("{hour}:{study_minutes:02}"),
                duration_minutes: self.config.break_minutes,
                subject: None,
                activity: None,
                technique: None,
                recommendations: Some(self.config.break_recommendations.clone()),
            });

            hour += 1;
        }

        blocks
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}
