//! SQLite-based local storage for plans and sessions.
//!
//! Provides persistent storage for:
//! - Generated study plans (one row per plan date, upsert semantics)
//! - Completed focus sessions
//! - Key-value store for application state (e.g. the active session)

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::data_dir;
use crate::error::DatabaseError;
use crate::planner::ScheduleBlock;
use crate::session::FocusSession;

/// A stored study plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
    pub plan_date: NaiveDate,
    pub schedule: Vec<ScheduleBlock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A completed focus session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub subject: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_min: i64,
}

/// SQLite database at `~/.config/studyflow/studyflow.db`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database in the data directory, creating the schema if
    /// needed.
    pub fn open() -> Result<Self, DatabaseError> {
        let path = data_dir()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?
            .join("studyflow.db");
        Self::open_at(&path)
    }

    /// Open a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS plans (
                    id         TEXT PRIMARY KEY,
                    plan_date  TEXT NOT NULL UNIQUE,
                    schedule   TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS sessions (
                    id           TEXT PRIMARY KEY,
                    subject      TEXT NOT NULL,
                    started_at   TEXT NOT NULL,
                    ended_at     TEXT NOT NULL,
                    duration_min INTEGER NOT NULL
                );

                CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_plans_plan_date ON plans(plan_date);
                CREATE INDEX IF NOT EXISTS idx_sessions_started_at ON sessions(started_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    /// Insert or replace the plan for `plan_date`.
    ///
    /// Re-generating on the same date overwrites the stored schedule,
    /// mirroring the remote table's upsert keyed on plan date.
    pub fn upsert_plan(
        &self,
        plan_date: NaiveDate,
        schedule: &[ScheduleBlock],
        now: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        let schedule_json = serde_json::to_string(schedule)
            .map_err(|e| DatabaseError::QueryFailed(format!("encode schedule: {e}")))?;
        self.conn.execute(
            "INSERT INTO plans (id, plan_date, schedule, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             ON CONFLICT(plan_date) DO UPDATE SET
                 schedule = excluded.schedule,
                 updated_at = excluded.updated_at",
            params![
                uuid::Uuid::new_v4().to_string(),
                plan_date.to_string(),
                schedule_json,
                now.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Most recently dated plan, if any.
    pub fn latest_plan(&self) -> Result<Option<PlanRecord>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, plan_date, schedule, created_at, updated_at
                 FROM plans ORDER BY plan_date DESC LIMIT 1",
                [],
                Self::plan_from_row,
            )
            .optional()
            .map_err(DatabaseError::from)
    }

    /// Plan stored for a specific date, if any.
    pub fn plan_for_date(&self, plan_date: NaiveDate) -> Result<Option<PlanRecord>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, plan_date, schedule, created_at, updated_at
                 FROM plans WHERE plan_date = ?1",
                params![plan_date.to_string()],
                Self::plan_from_row,
            )
            .optional()
            .map_err(DatabaseError::from)
    }

    fn plan_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlanRecord> {
        let schedule_json: String = row.get(2)?;
        let schedule = serde_json::from_str(&schedule_json).unwrap_or_default();
        Ok(PlanRecord {
            id: row.get(0)?,
            plan_date: row
                .get::<_, String>(1)?
                .parse()
                .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
            schedule,
            created_at: parse_ts(&row.get::<_, String>(3)?),
            updated_at: parse_ts(&row.get::<_, String>(4)?),
        })
    }

    /// Record a completed focus session.
    ///
    /// Active sessions (no end time) are rejected.
    pub fn record_session(&self, session: &FocusSession) -> Result<(), DatabaseError> {
        let ended_at = session.ended_at.ok_or_else(|| {
            DatabaseError::QueryFailed("cannot record a session that is still active".to_string())
        })?;
        let duration_min = session.duration_minutes().unwrap_or(0);
        self.conn.execute(
            "INSERT INTO sessions (id, subject, started_at, ended_at, duration_min)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session.id,
                session.subject,
                session.started_at.to_rfc3339(),
                ended_at.to_rfc3339(),
                duration_min,
            ],
        )?;
        Ok(())
    }

    /// All completed sessions, newest first.
    pub fn sessions(&self) -> Result<Vec<SessionRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, subject, started_at, ended_at, duration_min
             FROM sessions ORDER BY started_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SessionRecord {
                id: row.get(0)?,
                subject: row.get(1)?,
                started_at: parse_ts(&row.get::<_, String>(2)?),
                ended_at: parse_ts(&row.get::<_, String>(3)?),
                duration_min: row.get(4)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Distinct calendar days (by start time) with at least one completed
    /// session.
    pub fn session_days(&self) -> Result<Vec<NaiveDate>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT substr(started_at, 1, 10) FROM sessions")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut days = Vec::new();
        for row in rows {
            if let Ok(day) = row?.parse() {
                days.push(day);
            }
        }
        Ok(days)
    }

    /// Total completed study minutes.
    pub fn total_minutes(&self) -> Result<u64, DatabaseError> {
        self.conn
            .query_row(
                "SELECT COALESCE(SUM(duration_min), 0) FROM sessions",
                [],
                |row| row.get::<_, u64>(0),
            )
            .map_err(DatabaseError::from)
    }

    /// Number of completed sessions.
    pub fn session_count(&self) -> Result<u64, DatabaseError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| {
                row.get::<_, u64>(0)
            })
            .map_err(DatabaseError::from)
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(DatabaseError::from)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

fn parse_ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH)
}
