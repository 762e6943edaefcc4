//! # Lifedash Core Library
//!
//! Core business logic for Lifedash, a personal life dashboard. All
//! operations are available via a standalone CLI binary; any GUI shell is a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Schedule**: recurrence rules (daily / weekly-on-days) for tracked
//!   items such as courses and medications
//! - **Streak**: consecutive-day completion streaks under a configurable
//!   qualifying threshold, scanning backward from a reference date
//! - **Adherence**: per-day medication adherence classification and reports
//! - **Checklist**: the daily health checklist that feeds the streak engine
//! - **Storage**: SQLite-based tracking history and TOML-based configuration
//!
//! The engine functions are pure: they take materialized values (an
//! explicit `as_of` date, never the wall clock) and never observe a data
//! source change mid-computation.

pub mod adherence;
pub mod calendar;
pub mod checklist;
pub mod error;
pub mod schedule;
pub mod storage;
pub mod streak;

pub use adherence::{AdherenceAnalyzer, AdherenceDay, AdherenceReport, AdherenceStatus};
pub use calendar::WeekWindow;
pub use checklist::{DailyChecklist, HealthDayInput};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use schedule::{day_load, DayLoad, ScheduleRule, TrackedItem};
pub use storage::{Config, Database, Domain};
pub use streak::{
    CompletionDayRecord, CompletionHistory, StreakAnalyzer, StreakReport, StreakTier,
    DEFAULT_STREAK_THRESHOLD,
};
