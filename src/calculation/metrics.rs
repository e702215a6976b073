//! Top-level metrics calculation.
//!
//! This module assembles the full [`TimeMetrics`] record for one punch pair
//! and provides fault-isolated batch calculation over raw punch records.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{PunchPair, RawPunchPair, Schedule, TimeMetrics, hours_string};

use super::attendance::{
    late_minutes, overtime_minutes, regular_minutes, total_worked_minutes, undertime_minutes,
};
use super::night_diff::night_diff_minutes;
use super::shift_window::resolve_shift_window;

/// Calculates the full metrics record for one punch pair.
///
/// A pure function of its inputs and the timezone database: identical
/// inputs always produce identical output. The punch ordering is not
/// validated; an inverted pair produces zero for every clamped metric and
/// a negative total.
///
/// # Errors
///
/// Returns an error only when the shift window cannot be resolved, which
/// requires a pathological local-time mapping in the schedule's timezone.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, NaiveTime, Utc};
/// use chrono_tz::Tz;
/// use timeclock_engine::calculation::calculate;
/// use timeclock_engine::models::{PunchPair, Schedule};
///
/// let schedule = Schedule::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     Tz::Asia__Manila,
/// );
/// let pair = PunchPair::new(
///     "2025-10-01T09:15:00+08:00".parse::<DateTime<Utc>>().unwrap(),
///     "2025-10-01T19:30:00+08:00".parse::<DateTime<Utc>>().unwrap(),
/// );
///
/// let metrics = calculate(&pair, &schedule).unwrap();
/// assert_eq!(metrics.regular_minutes, 525);
/// assert_eq!(metrics.overtime_hours, "1.50");
/// ```
pub fn calculate(pair: &PunchPair, schedule: &Schedule) -> EngineResult<TimeMetrics> {
    let window = resolve_shift_window(pair.punch_in, schedule)?;

    let total_worked = total_worked_minutes(pair);
    let regular = regular_minutes(pair, &window);
    let overtime = overtime_minutes(pair, &window);
    let night_diff = night_diff_minutes(pair, schedule)?;

    Ok(TimeMetrics {
        punch_in: pair.punch_in,
        punch_out: pair.punch_out,
        shift_start: window.start,
        shift_end: window.end,
        total_worked_minutes: total_worked,
        regular_minutes: regular,
        overtime_minutes: overtime,
        night_diff_minutes: night_diff,
        late_minutes: late_minutes(pair, &window),
        undertime_minutes: undertime_minutes(pair, &window),
        total_worked_hours: hours_string(total_worked),
        regular_hours: hours_string(regular),
        overtime_hours: hours_string(overtime),
        night_diff_hours: hours_string(night_diff),
    })
}

/// One entry of a batch calculation result.
///
/// Echoes the source record and carries exactly one of `metrics` or
/// `error` - constructed only through [`BatchEntry::from_outcome`], which
/// guarantees the exclusivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// The raw record the entry was calculated from.
    pub record: RawPunchPair,
    /// The calculated metrics, when the record resolved and calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TimeMetrics>,
    /// The failure reason, when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    /// Builds an entry from a per-record outcome.
    pub fn from_outcome(record: RawPunchPair, outcome: EngineResult<TimeMetrics>) -> Self {
        match outcome {
            Ok(metrics) => Self {
                record,
                metrics: Some(metrics),
                error: None,
            },
            Err(err) => Self {
                record,
                metrics: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Calculates metrics for each record independently.
///
/// The output preserves input order and length. A record that fails to
/// resolve or calculate yields an error entry; it never aborts the rest of
/// the batch.
pub fn calculate_batch(records: &[RawPunchPair], schedule: &Schedule) -> Vec<BatchEntry> {
    records
        .iter()
        .map(|record| {
            let outcome = record
                .resolve()
                .and_then(|pair| calculate(&pair, schedule));
            BatchEntry::from_outcome(record.clone(), outcome)
        })
        .collect()
}
