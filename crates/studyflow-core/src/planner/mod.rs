//! Study plan generation.
//!
//! This module implements the "AI" study planner:
//! - Subject suggestions from a fixed (mood x energy) table
//! - Study technique selection per block
//! - The deterministic block-pair schedule generator
//! - The two-step wizard that assembles a [`PlannerInput`]
//!
//! Generation is a pure computation over an in-memory [`PlannerInput`];
//! recording the result anywhere is the caller's concern.

mod generator;
mod suggestions;
mod techniques;
mod wizard;

pub use generator::{BlockType, GeneratorConfig, PlanGenerator, ScheduleBlock};
pub use suggestions::{suggest_for_labels, suggested_subjects};
pub use techniques::{general_techniques, pick_technique, subject_techniques};
pub use wizard::{MoodStepOutcome, PlannerWizard};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Self-reported mood, the first wizard question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    Focused,
    Relaxed,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Energetic => "energetic",
            Mood::Focused => "focused",
            Mood::Relaxed => "relaxed",
        };
        f.write_str(label)
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energetic" => Ok(Mood::Energetic),
            "focused" => Ok(Mood::Focused),
            "relaxed" => Ok(Mood::Relaxed),
            other => Err(ValidationError::UnknownMood(other.to_string())),
        }
    }
}

/// Self-reported energy level, the second wizard question.
///
/// Drives both the study block length and the general technique list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// High energy (45-minute study blocks)
    High,
    /// Medium energy (30-minute study blocks)
    Medium,
    /// Low energy (20-minute study blocks)
    Low,
}

impl EnergyLevel {
    /// Study block length in minutes for this energy level.
    pub fn study_block_minutes(&self) -> u32 {
        match self {
            EnergyLevel::High => 45,
            EnergyLevel::Medium => 30,
            EnergyLevel::Low => 20,
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnergyLevel::High => "high",
            EnergyLevel::Medium => "medium",
            EnergyLevel::Low => "low",
        };
        f.write_str(label)
    }
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(EnergyLevel::High),
            "medium" => Ok(EnergyLevel::Medium),
            "low" => Ok(EnergyLevel::Low),
            other => Err(ValidationError::UnknownEnergyLevel(other.to_string())),
        }
    }
}

/// Coarse self-reported available-time category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeBucket {
    /// 1-2 hours, planned as 1.5h
    #[serde(rename = "1-2")]
    OneToTwo,
    /// 2-4 hours, planned as 3h
    #[serde(rename = "2-4")]
    TwoToFour,
    /// 4+ hours, planned as 5h
    #[serde(rename = "4+")]
    FourPlus,
}

impl TimeBucket {
    /// Minutes the generator plans for in this bucket.
    pub fn planning_minutes(&self) -> u32 {
        match self {
            TimeBucket::OneToTwo => 90,
            TimeBucket::TwoToFour => 180,
            TimeBucket::FourPlus => 300,
        }
    }
}

impl Default for TimeBucket {
    fn default() -> Self {
        TimeBucket::OneToTwo
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeBucket::OneToTwo => "1-2",
            TimeBucket::TwoToFour => "2-4",
            TimeBucket::FourPlus => "4+",
        };
        f.write_str(label)
    }
}

impl FromStr for TimeBucket {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-2" => Ok(TimeBucket::OneToTwo),
            "2-4" => Ok(TimeBucket::TwoToFour),
            "4+" => Ok(TimeBucket::FourPlus),
            other => Err(ValidationError::UnknownTimeBucket(other.to_string())),
        }
    }
}

/// Finalized planner answers, consumed once by [`PlanGenerator::generate`].
///
/// Assembled either directly or through [`PlannerWizard`]. Subject order
/// matters: blocks are assigned round-robin in this order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerInput {
    pub mood: Mood,
    pub energy_level: EnergyLevel,
    pub time_available: TimeBucket,
    pub subjects: Vec<String>,
}
