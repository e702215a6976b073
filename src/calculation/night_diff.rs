//! Night differential calculation.
//!
//! This module counts the worked minutes that fall inside the nightly
//! premium window, 22:00-06:00 local to the schedule's timezone. Rather
//! than scanning the punch interval minute by minute, the punch is
//! intersected with one 22:00 -> next-day 06:00 window per local date
//! spanned, which costs O(days) and handles overnight and multi-day
//! punches uniformly.

use chrono::{Duration, Utc};
use chrono_tz::Tz;

use crate::error::EngineResult;
use crate::models::{PunchPair, Schedule};

use super::shift_window::resolve_local;

/// Hour of day the night window opens (22:00 local).
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour of day the night window closes (06:00 local).
pub const NIGHT_END_HOUR: u32 = 6;

/// Counts worked minutes inside the 22:00-06:00 night window.
///
/// Evaluates the punch interval `[punch_in, punch_out)` against the night
/// window of every local date the interval touches, in the schedule's
/// timezone. Each date `d` contributes the window `[d 22:00, d+1 06:00)`;
/// the date before the punch-in is included so a punch starting between
/// midnight and 06:00 is credited for the tail of the previous night.
///
/// Returns zero for an empty or inverted punch interval.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, NaiveTime, Utc};
/// use chrono_tz::Tz;
/// use timeclock_engine::calculation::night_diff_minutes;
/// use timeclock_engine::models::{PunchPair, Schedule};
///
/// let schedule = Schedule::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     Tz::Asia__Manila,
/// );
/// let pair = PunchPair::new(
///     "2025-10-01T21:00:00+08:00".parse::<DateTime<Utc>>().unwrap(),
///     "2025-10-02T07:00:00+08:00".parse::<DateTime<Utc>>().unwrap(),
/// );
///
/// // 22:00-24:00 plus 00:00-06:00 the next morning.
/// assert_eq!(night_diff_minutes(&pair, &schedule).unwrap(), 480);
/// ```
pub fn night_diff_minutes(pair: &PunchPair, schedule: &Schedule) -> EngineResult<i64> {
    if pair.punch_out <= pair.punch_in {
        return Ok(0);
    }

    let tz = schedule.timezone;
    let in_local = pair.punch_in.with_timezone(&tz);
    let out_local = pair.punch_out.with_timezone(&tz);

    // The previous local date's window can reach past midnight into the
    // punch interval, so start one day early.
    let first_date = in_local.date_naive() - Duration::days(1);
    let last_date = out_local.date_naive();

    let mut total = 0i64;
    let mut date = first_date;
    while date <= last_date {
        let window_start = night_window_start(tz, date)?;
        let window_end = night_window_end(tz, date)?;

        let overlap_start = pair.punch_in.max(window_start);
        let overlap_end = pair.punch_out.min(window_end);
        if overlap_end > overlap_start {
            total += (overlap_end - overlap_start).num_minutes();
        }

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(total)
}

/// The instant the night window opens on the given local date (22:00).
fn night_window_start(tz: Tz, date: chrono::NaiveDate) -> EngineResult<chrono::DateTime<Utc>> {
    let naive = date
        .and_hms_opt(NIGHT_START_HOUR, 0, 0)
        .expect("22:00 is a valid time of day");
    Ok(resolve_local(tz, naive)?.with_timezone(&Utc))
}

/// The instant the night window closes, 06:00 on the morning after `date`.
fn night_window_end(tz: Tz, date: chrono::NaiveDate) -> EngineResult<chrono::DateTime<Utc>> {
    let naive = (date + Duration::days(1))
        .and_hms_opt(NIGHT_END_HOUR, 0, 0)
        .expect("06:00 is a valid time of day");
    Ok(resolve_local(tz, naive)?.with_timezone(&Utc))
}
