use chrono::Utc;
use clap::Subcommand;

use studyflow_core::backend::{
    backend_from_config, record_or_warn, StudyPlanRecord, SubjectSuggestionRecord,
};
use studyflow_core::planner::suggest_for_labels;
use studyflow_core::{Config, Database, EnergyLevel, Mood, PlanGenerator, PlannerInput, TimeBucket};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Suggest subjects for a mood and energy level
    Suggest {
        /// Mood (energetic, focused, relaxed)
        mood: String,
        /// Energy level (high, medium, low)
        energy: String,
    },
    /// Generate and store today's study plan
    Generate {
        /// Mood (energetic, focused, relaxed)
        #[arg(long)]
        mood: String,
        /// Energy level (high, medium, low)
        #[arg(long)]
        energy: String,
        /// Available time bucket (1-2, 2-4, 4+)
        #[arg(long, default_value = "1-2")]
        time: String,
        /// Subject in round-robin order (repeatable)
        #[arg(long = "subject", required = true)]
        subjects: Vec<String>,
    },
    /// Show the most recently stored plan
    Show,
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Suggest { mood, energy } => {
            // Unknown labels produce an empty list, not an error.
            let suggestions = suggest_for_labels(&mood, &energy);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);

            let config = Config::load_or_default();
            let backend = backend_from_config(&config);
            record_or_warn(
                backend.record_subject_suggestion(&SubjectSuggestionRecord {
                    user_id: config.backend.user_id.clone(),
                    mood,
                    energy_level: energy,
                    suggested_subjects: suggestions,
                }),
                "subject suggestions",
            );
        }
        PlanAction::Generate {
            mood,
            energy,
            time,
            subjects,
        } => {
            let input = PlannerInput {
                mood: mood.parse::<Mood>()?,
                energy_level: energy.parse::<EnergyLevel>()?,
                time_available: time.parse::<TimeBucket>()?,
                subjects,
            };

            let config = Config::load_or_default();
            let generator = PlanGenerator::with_config(config.generator_config());
            let schedule = generator.generate(&input);

            let now = Utc::now();
            let plan_date = now.date_naive();
            let db = Database::open()?;
            db.upsert_plan(plan_date, &schedule, now)?;

            let backend = backend_from_config(&config);
            record_or_warn(
                backend.upsert_study_plan(&StudyPlanRecord {
                    user_id: config.backend.user_id.clone(),
                    plan_date,
                    schedule: serde_json::to_value(&schedule)?,
                }),
                "study plan",
            );

            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        PlanAction::Show => {
            let db = Database::open()?;
            match db.latest_plan()? {
                Some(plan) => println!("{}", serde_json::to_string_pretty(&plan)?),
                None => println!("no stored plan"),
            }
        }
    }
    Ok(())
}
