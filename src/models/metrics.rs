//! Calculated time metrics model.
//!
//! This module defines the TimeMetrics output record produced by the
//! calculator for a single punch pair.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The worked-hours metrics derived from one punch pair.
///
/// Minute fields are the authoritative numeric source for aggregation;
/// the `*_hours` strings are display-ready values formatted to exactly
/// two decimal places. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMetrics {
    /// The clock-in instant the metrics were derived from.
    pub punch_in: DateTime<Utc>,
    /// The clock-out instant the metrics were derived from.
    pub punch_out: DateTime<Utc>,
    /// The resolved shift start for the punch-in's local day.
    pub shift_start: DateTime<Utc>,
    /// The resolved shift end for the punch-in's local day.
    pub shift_end: DateTime<Utc>,
    /// Minutes between punch-in and punch-out (negative if inverted).
    pub total_worked_minutes: i64,
    /// Worked minutes inside the shift window, capped at its nominal length.
    pub regular_minutes: i64,
    /// Worked minutes after the scheduled shift end.
    pub overtime_minutes: i64,
    /// Worked minutes inside the 22:00-06:00 night window.
    pub night_diff_minutes: i64,
    /// Minutes the punch-in fell after the scheduled start.
    pub late_minutes: i64,
    /// Minutes the punch-out fell before the scheduled end.
    pub undertime_minutes: i64,
    /// Total worked time in decimal hours, 2-place formatted.
    pub total_worked_hours: String,
    /// Regular time in decimal hours, 2-place formatted.
    pub regular_hours: String,
    /// Overtime in decimal hours, 2-place formatted.
    pub overtime_hours: String,
    /// Night differential in decimal hours, 2-place formatted.
    pub night_diff_hours: String,
}

/// Formats a minute count as decimal hours with exactly two places.
///
/// # Examples
///
/// ```
/// use timeclock_engine::models::hours_string;
///
/// assert_eq!(hours_string(525), "8.75");
/// assert_eq!(hours_string(90), "1.50");
/// assert_eq!(hours_string(0), "0.00");
/// ```
pub fn hours_string(minutes: i64) -> String {
    let hours = (Decimal::new(minutes, 0) / Decimal::new(60, 0)).round_dp(2);
    format!("{:.2}", hours)
}
