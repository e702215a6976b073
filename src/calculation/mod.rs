//! Calculation logic for the Time Metrics Engine.
//!
//! This module contains all the calculation functions for deriving metrics
//! from a punch pair, including shift window resolution for the punch-in's
//! local day, late/undertime and regular/overtime derivation, night
//! differential by interval intersection, and the top-level single and
//! batch calculation entry points.

mod attendance;
mod metrics;
mod night_diff;
mod shift_window;

pub use attendance::{
    late_minutes, overtime_minutes, regular_minutes, total_worked_minutes, undertime_minutes,
};
pub use metrics::{BatchEntry, calculate, calculate_batch};
pub use night_diff::{NIGHT_END_HOUR, NIGHT_START_HOUR, night_diff_minutes};
pub use shift_window::{ShiftWindow, resolve_shift_window};
