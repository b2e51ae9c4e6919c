//! # Studyflow Core Library
//!
//! This library provides the core business logic for Studyflow, a
//! study-productivity application. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary, with
//! any GUI shell being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Planner**: Deterministic study-plan generation -- subject
//!   suggestions, technique rotation, and the block-pair schedule
//! - **Sessions**: Explicit start/stop focus tracking
//! - **Stats**: Productivity score and streak derivation
//! - **Storage**: SQLite plan/session cache and TOML-based configuration
//! - **Backend**: Client for the hosted managed-Postgres REST layer
//!
//! ## Key Components
//!
//! - [`PlanGenerator`]: The schedule generator
//! - [`PlannerWizard`]: Two-step assembly of a [`PlannerInput`]
//! - [`Database`]: Plan and session persistence
//! - [`Config`]: Application configuration management
//! - [`StudyBackend`]: Trait for the hosted backend seam

pub mod backend;
pub mod error;
pub mod planner;
pub mod session;
pub mod stats;
pub mod storage;

pub use backend::{NullBackend, RestBackend, StudyBackend};
pub use error::{BackendError, ConfigError, CoreError, DatabaseError, ValidationError};
pub use planner::{
    BlockType, EnergyLevel, GeneratorConfig, Mood, PlanGenerator, PlannerInput, PlannerWizard,
    ScheduleBlock, TimeBucket,
};
pub use session::FocusSession;
pub use stats::{ProductivityScore, StudyStats, Trend};
pub use storage::{Config, Database};
