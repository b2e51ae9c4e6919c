//! Productivity score computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate study statistics, mirroring the backend `study_stats` row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyStats {
    pub total_study_time_minutes: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub distraction_score: u32,
    pub last_study_date: Option<DateTime<Utc>>,
}

/// Score movement relative to the previous period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A 0-100 productivity score with its qualitative reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductivityScore {
    pub score: u32,
    pub trend: Trend,
    pub feedback: String,
}

impl ProductivityScore {
    /// Combine streak, study time, and distraction metrics into a score
    /// out of 100.
    ///
    /// Streak contributes up to 10 days at triple weight, study time up
    /// to 50 hours at 0.8, and the distraction penalty is capped at 40
    /// before being inverted.
    pub fn compute(stats: &StudyStats) -> Self {
        let streak_factor = stats.current_streak.min(10) as f64;
        let time_factor = (stats.total_study_time_minutes as f64 / 60.0).min(50.0);
        let distraction_factor = 100.0 - stats.distraction_score.min(40) as f64;

        let raw = streak_factor * 3.0 + time_factor * 0.8 + distraction_factor * 0.3;
        let score = (raw.floor() as u32).min(100);

        let trend = if score > 70 {
            Trend::Up
        } else if score < 50 {
            Trend::Down
        } else {
            Trend::Neutral
        };

        Self {
            score,
            trend,
            feedback: Self::feedback_for(score).to_string(),
        }
    }

    fn feedback_for(score: u32) -> &'static str {
        if score >= 80 {
            "Excellent productivity!"
        } else if score >= 60 {
            "Good progress!"
        } else if score >= 40 {
            "Room for improvement"
        } else {
            "Needs attention"
        }
    }
}
