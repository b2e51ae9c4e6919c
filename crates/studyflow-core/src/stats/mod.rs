//! Study statistics.
//!
//! Derives the dashboard numbers from raw stats and session history:
//! the productivity score and the streak/7-day activity strip.

mod productivity;
mod streak;

pub use productivity::{ProductivityScore, StudyStats, Trend};
pub use streak::{streaks, week_activity};
