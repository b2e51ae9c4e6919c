use chrono::{Duration, Utc};
use clap::Subcommand;

use studyflow_core::backend::{backend_from_config, record_or_warn, ActiveSessionRecord};
use studyflow_core::session::{format_hms, DEFAULT_SUBJECT};
use studyflow_core::{Config, Database, FocusSession};

const ACTIVE_SESSION_KEY: &str = "active_session";

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a focus session
    Start {
        /// Subject being studied
        #[arg(default_value = DEFAULT_SUBJECT)]
        subject: String,
    },
    /// Stop the active focus session and record it
    Stop,
    /// Show the active focus session
    Status,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        SessionAction::Start { subject } => {
            if db.kv_get(ACTIVE_SESSION_KEY)?.is_some() {
                return Err("a focus session is already active".into());
            }

            let now = Utc::now();
            let session = FocusSession::start(subject, now);
            db.kv_set(ACTIVE_SESSION_KEY, &serde_json::to_string(&session)?)?;

            let config = Config::load_or_default();
            let backend = backend_from_config(&config);
            record_or_warn(
                backend.start_session(&ActiveSessionRecord {
                    user_id: config.backend.user_id.clone(),
                    subject: session.subject.clone(),
                    start_time: session.started_at,
                    // The remote row carries a provisional one-hour end
                    // until the session is closed.
                    end_time: session.started_at + Duration::hours(1),
                }),
                "session start",
            );

            println!("focus session started: {}", session.subject);
        }
        SessionAction::Stop => {
            let raw = db
                .kv_get(ACTIVE_SESSION_KEY)?
                .ok_or("no active focus session")?;
            let mut session: FocusSession = serde_json::from_str(&raw)?;

            let now = Utc::now();
            let minutes = session.end(now);
            db.record_session(&session)?;
            db.kv_delete(ACTIVE_SESSION_KEY)?;

            let config = Config::load_or_default();
            let backend = backend_from_config(&config);
            record_or_warn(backend.finish_session(now), "session end");
            record_or_warn(
                backend.add_study_minutes(minutes.max(0) as u32, now),
                "study minutes",
            );

            println!("session recorded: {} ({minutes} min)", session.subject);
        }
        SessionAction::Status => {
            match db.kv_get(ACTIVE_SESSION_KEY)? {
                Some(raw) => {
                    let session: FocusSession = serde_json::from_str(&raw)?;
                    let elapsed = session.elapsed_secs(Utc::now());
                    println!("{} ({})", session.subject, format_hms(elapsed));
                }
                None => println!("no active session"),
            }
        }
    }
    Ok(())
}
