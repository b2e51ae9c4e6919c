use chrono::Utc;
use clap::Subcommand;

use studyflow_core::backend::backend_from_config;
use studyflow_core::stats::{streaks, week_activity};
use studyflow_core::{Config, Database, ProductivityScore, StudyStats};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Totals and 7-day activity
    Summary,
    /// Productivity score
    Score,
    /// Current and longest streak
    Streak,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Utc::now().date_naive();

    match action {
        StatsAction::Summary => {
            let days = db.session_days()?;
            let summary = serde_json::json!({
                "total_study_time_minutes": db.total_minutes()?,
                "session_count": db.session_count()?,
                "week_activity": week_activity(&days, today),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Score => {
            let stats = remote_or_local_stats(&db)?;
            let score = ProductivityScore::compute(&stats);
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        StatsAction::Streak => {
            let days = db.session_days()?;
            let (current, longest) = streaks(&days, today);
            let report = serde_json::json!({
                "current_streak": current,
                "longest_streak": longest,
                "week_activity": week_activity(&days, today),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Prefer the remote stats row when the backend is configured; fall back
/// to stats derived from the local session history.
fn remote_or_local_stats(db: &Database) -> Result<StudyStats, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let backend = backend_from_config(&config);
    match backend.fetch_stats() {
        Ok(Some(stats)) => return Ok(stats),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: failed to fetch remote stats: {e}"),
    }

    let today = Utc::now().date_naive();
    let days = db.session_days()?;
    let (current, longest) = streaks(&days, today);
    Ok(StudyStats {
        total_study_time_minutes: db.total_minutes()?.min(u32::MAX as u64) as u32,
        current_streak: current,
        longest_streak: longest,
        distraction_score: 0,
        last_study_date: None,
    })
}
