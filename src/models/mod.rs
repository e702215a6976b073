//! Data models for the Time Metrics Engine.
//!
//! This module contains the core data structures used throughout
//! the engine: schedules, punch pairs, and calculated metrics.

mod metrics;
mod punch;
mod schedule;

pub use metrics::{TimeMetrics, hours_string};
pub use punch::{PunchPair, RawPunchPair};
pub use schedule::Schedule;
