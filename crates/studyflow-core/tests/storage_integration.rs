//! On-disk storage tests: database persistence across reopens.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tempfile::TempDir;

use studyflow_core::planner::{EnergyLevel, Mood, PlanGenerator, PlannerInput, TimeBucket};
use studyflow_core::{Database, FocusSession};

fn now() -> DateTime<Utc> {
    "2026-03-01T09:00:00Z".parse().unwrap()
}

#[test]
fn database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studyflow.db");
    let plan_date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    let schedule = PlanGenerator::new().generate(&PlannerInput {
        mood: Mood::Focused,
        energy_level: EnergyLevel::Medium,
        time_available: TimeBucket::TwoToFour,
        subjects: vec!["Statistics".to_string(), "Geography".to_string()],
    });

    {
        let db = Database::open_at(&path).unwrap();
        db.upsert_plan(plan_date, &schedule, now()).unwrap();

        let mut session = FocusSession::start("Statistics", now());
        session.end(now() + Duration::minutes(30));
        db.record_session(&session).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let plan = db.latest_plan().unwrap().unwrap();
    assert_eq!(plan.plan_date, plan_date);
    assert_eq!(plan.schedule, schedule);
    assert_eq!(db.total_minutes().unwrap(), 30);
    assert_eq!(db.session_count().unwrap(), 1);
}

#[test]
fn kv_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("studyflow.db");

    let session = FocusSession::start("Physics", now());
    let encoded = serde_json::to_string(&session).unwrap();

    {
        let db = Database::open_at(&path).unwrap();
        db.kv_set("active_session", &encoded).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let raw = db.kv_get("active_session").unwrap().unwrap();
    let decoded: FocusSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, session);
    assert!(decoded.is_active());
}
