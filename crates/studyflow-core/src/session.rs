//! Focus session tracking.
//!
//! A focus session is an explicit start/stop interval of tracked studying.
//! Timestamps are passed in by the caller rather than read from the clock
//! here, so elapsed-time math stays deterministic under test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject used when a session is started without one.
pub const DEFAULT_SUBJECT: &str = "Focus Mode";

/// One tracked study interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusSession {
    pub id: String,
    pub subject: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl FocusSession {
    /// Open a new session starting at `now`.
    pub fn start(subject: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            subject: subject.into(),
            started_at: now,
            ended_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Whole seconds elapsed since the session started. Clamped at zero
    /// in case the caller's clock went backwards.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        let end = self.ended_at.unwrap_or(now);
        (end - self.started_at).num_seconds().max(0)
    }

    /// Close the session at `now` and return its length in whole minutes
    /// (sub-minute remainders are dropped).
    pub fn end(&mut self, now: DateTime<Utc>) -> i64 {
        self.ended_at = Some(now);
        self.duration_minutes().unwrap_or(0)
    }

    /// Completed length in whole minutes; `None` while still active.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.ended_at
            .map(|end| ((end - self.started_at).num_minutes()).max(0))
    }
}

/// Render a second count as HH:MM:SS for display.
pub fn format_hms(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
