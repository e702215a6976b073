//! Shift window resolution.
//!
//! This module anchors a recurring daily schedule to concrete instants for
//! a specific punch. The window is built from the calendar date of the
//! punch-in as observed in the schedule's timezone, so the same punch pair
//! always resolves against the employee's local working day regardless of
//! how the instants were originally expressed.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};
use crate::models::Schedule;

/// The scheduled shift window resolved to concrete instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    /// The instant the shift was scheduled to start.
    pub start: DateTime<Utc>,
    /// The instant the shift was scheduled to end.
    pub end: DateTime<Utc>,
}

impl ShiftWindow {
    /// Returns the nominal window length in minutes.
    ///
    /// Negative when the schedule's end precedes its start on the same day;
    /// the attendance clamps treat that as an empty window.
    pub fn scheduled_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Resolves the shift window for the punch-in's calendar day.
///
/// The punch-in instant is converted to the schedule's timezone, its local
/// date is combined with the schedule's start/end times of day, and both
/// local datetimes are mapped back to instants.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, NaiveTime, Utc};
/// use chrono_tz::Tz;
/// use timeclock_engine::calculation::resolve_shift_window;
/// use timeclock_engine::models::Schedule;
///
/// let schedule = Schedule::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     Tz::Asia__Manila,
/// );
/// let punch_in = "2025-10-01T09:15:00+08:00"
///     .parse::<DateTime<Utc>>()
///     .unwrap();
///
/// let window = resolve_shift_window(punch_in, &schedule).unwrap();
/// assert_eq!(window.scheduled_minutes(), 540);
/// ```
pub fn resolve_shift_window(
    punch_in: DateTime<Utc>,
    schedule: &Schedule,
) -> EngineResult<ShiftWindow> {
    let local_date = punch_in.with_timezone(&schedule.timezone).date_naive();

    let start = resolve_local(schedule.timezone, local_date.and_time(schedule.start))?;
    let end = resolve_local(schedule.timezone, local_date.and_time(schedule.end))?;

    Ok(ShiftWindow {
        start: start.with_timezone(&Utc),
        end: end.with_timezone(&Utc),
    })
}

/// Maps a local datetime to an instant in the given timezone.
///
/// Ambiguous local times (DST fall-back) resolve to the earliest instant;
/// nonexistent local times (DST spring-forward gap) are nudged forward by
/// one hour.
pub(crate) fn resolve_local(tz: Tz, naive: NaiveDateTime) -> EngineResult<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("no valid local time near {} in {}", naive, tz),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_schedule(start: &str, end: &str, tz: Tz) -> Schedule {
        Schedule::new(
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            tz,
        )
    }

    fn make_instant(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn test_window_anchored_to_local_day() {
        let schedule = make_schedule("09:00", "18:00", Tz::Asia__Manila);
        let punch_in = make_instant("2025-10-01T09:15:00+08:00");

        let window = resolve_shift_window(punch_in, &schedule).unwrap();

        assert_eq!(window.start, make_instant("2025-10-01T09:00:00+08:00"));
        assert_eq!(window.end, make_instant("2025-10-01T18:00:00+08:00"));
        assert_eq!(window.scheduled_minutes(), 540);
    }

    #[test]
    fn test_window_uses_schedule_timezone_not_punch_offset() {
        // 2025-10-01T20:00:00-04:00 is already 2025-10-02T08:00 in Manila,
        // so the window must anchor to October 2nd Manila time.
        let schedule = make_schedule("09:00", "18:00", Tz::Asia__Manila);
        let punch_in = make_instant("2025-10-01T20:00:00-04:00");

        let window = resolve_shift_window(punch_in, &schedule).unwrap();

        assert_eq!(window.start, make_instant("2025-10-02T09:00:00+08:00"));
    }

    #[test]
    fn test_window_in_utc_by_default() {
        let schedule = make_schedule("08:00", "16:00", Tz::UTC);
        let punch_in = make_instant("2025-06-15T08:30:00Z");

        let window = resolve_shift_window(punch_in, &schedule).unwrap();

        assert_eq!(window.start, make_instant("2025-06-15T08:00:00Z"));
        assert_eq!(window.end, make_instant("2025-06-15T16:00:00Z"));
    }

    #[test]
    fn test_dst_gap_nudges_forward() {
        // US spring forward 2025-03-09: 02:30 local does not exist in New York.
        let schedule = make_schedule("02:30", "10:30", Tz::America__New_York);
        let punch_in = make_instant("2025-03-09T08:00:00-04:00");

        let window = resolve_shift_window(punch_in, &schedule).unwrap();

        // Nudged to 03:30 EDT.
        assert_eq!(window.start, make_instant("2025-03-09T03:30:00-04:00"));
    }

    #[test]
    fn test_dst_ambiguity_takes_earliest() {
        // US fall back 2025-11-02: 01:30 local occurs twice in New York.
        let schedule = make_schedule("01:30", "09:30", Tz::America__New_York);
        let punch_in = make_instant("2025-11-02T12:00:00Z");

        let window = resolve_shift_window(punch_in, &schedule).unwrap();

        // Earliest occurrence is the EDT one.
        assert_eq!(window.start, make_instant("2025-11-02T01:30:00-04:00"));
    }

    #[test]
    fn test_inverted_schedule_window_is_negative() {
        let schedule = make_schedule("18:00", "09:00", Tz::UTC);
        let punch_in = make_instant("2025-06-15T10:00:00Z");

        let window = resolve_shift_window(punch_in, &schedule).unwrap();

        assert_eq!(window.scheduled_minutes(), -540);
    }
}
