//! Hosted backend client.
//!
//! The product persists through a managed-Postgres service exposed over
//! an auto-generated REST layer. Everything the engine records there is
//! fire-and-forget: a failed write warns and the in-memory result the
//! user already sees stays untouched.

mod rest;

pub use rest::RestBackend;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BackendError;
use crate::stats::StudyStats;
use crate::storage::Config;

/// A recorded (mood, energy, suggestions) triple from the mood step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSuggestionRecord {
    pub user_id: String,
    pub mood: String,
    pub energy_level: String,
    pub suggested_subjects: Vec<String>,
}

/// A study plan upload, keyed remotely on (user, plan date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanRecord {
    pub user_id: String,
    pub plan_date: NaiveDate,
    pub schedule: serde_json::Value,
}

/// An active-session row opened when focus tracking starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSessionRecord {
    pub user_id: String,
    pub subject: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// The seam between the engine and the hosted backend.
///
/// Implementations are stateless between calls; callers treat every
/// method as best-effort and downgrade failures to warnings via
/// [`record_or_warn`].
pub trait StudyBackend: Send + Sync {
    /// Unique identifier (e.g. "rest", "null").
    fn name(&self) -> &str;

    /// Whether the backend has enough configuration to accept writes.
    fn is_configured(&self) -> bool;

    /// Record the mood-step outcome for later analysis.
    fn record_subject_suggestion(
        &self,
        record: &SubjectSuggestionRecord,
    ) -> Result<(), BackendError>;

    /// Insert or replace the plan for the record's plan date.
    fn upsert_study_plan(&self, record: &StudyPlanRecord) -> Result<(), BackendError>;

    /// Open an active-session row.
    fn start_session(&self, record: &ActiveSessionRecord) -> Result<(), BackendError>;

    /// Close any open active-session rows at `ended_at`.
    fn finish_session(&self, ended_at: DateTime<Utc>) -> Result<(), BackendError>;

    /// Add completed study minutes to the remote stats row.
    fn add_study_minutes(&self, minutes: u32, at: DateTime<Utc>) -> Result<(), BackendError>;

    /// Fetch the remote stats row, if one exists.
    fn fetch_stats(&self) -> Result<Option<StudyStats>, BackendError>;
}

/// No-op backend for offline use and tests.
pub struct NullBackend;

impl StudyBackend for NullBackend {
    fn name(&self) -> &str {
        "null"
    }

    fn is_configured(&self) -> bool {
        false
    }

    fn record_subject_suggestion(
        &self,
        _record: &SubjectSuggestionRecord,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    fn upsert_study_plan(&self, _record: &StudyPlanRecord) -> Result<(), BackendError> {
        Ok(())
    }

    fn start_session(&self, _record: &ActiveSessionRecord) -> Result<(), BackendError> {
        Ok(())
    }

    fn finish_session(&self, _ended_at: DateTime<Utc>) -> Result<(), BackendError> {
        Ok(())
    }

    fn add_study_minutes(&self, _minutes: u32, _at: DateTime<Utc>) -> Result<(), BackendError> {
        Ok(())
    }

    fn fetch_stats(&self) -> Result<Option<StudyStats>, BackendError> {
        Ok(None)
    }
}

/// Build the backend selected by `config`: the REST client when enabled
/// and configured, the no-op backend otherwise.
pub fn backend_from_config(config: &Config) -> Box<dyn StudyBackend> {
    if !config.backend.enabled {
        return Box::new(NullBackend);
    }
    match RestBackend::new(&config.backend) {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            eprintln!("Warning: backend disabled: {e}");
            Box::new(NullBackend)
        }
    }
}

/// Downgrade a recording failure to a warning.
pub fn record_or_warn(result: Result<(), BackendError>, what: &str) {
    if let Err(e) = result {
        eprintln!("Warning: failed to record {what}: {e}");
    }
}
