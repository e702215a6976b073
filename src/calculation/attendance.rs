//! Attendance duration derivations.
//!
//! This module derives the individual minute metrics for one punch pair
//! against a resolved shift window: total worked time, regular time inside
//! the window, overtime after the window, and late/undertime shortfalls.
//!
//! None of these functions reject inverted punch pairs; clamping yields
//! zero for the bounded metrics and total worked time goes negative.

use crate::models::PunchPair;

use super::shift_window::ShiftWindow;

/// Minutes the punch-in fell after the scheduled shift start.
///
/// Zero when the employee arrived at or before the scheduled start.
pub fn late_minutes(pair: &PunchPair, window: &ShiftWindow) -> i64 {
    (pair.punch_in - window.start).num_minutes().max(0)
}

/// Minutes the punch-out fell before the scheduled shift end.
///
/// Zero when the employee left at or after the scheduled end.
pub fn undertime_minutes(pair: &PunchPair, window: &ShiftWindow) -> i64 {
    (window.end - pair.punch_out).num_minutes().max(0)
}

/// Minutes between punch-in and punch-out.
///
/// Not clamped: a punch-out before the punch-in yields a negative value.
pub fn total_worked_minutes(pair: &PunchPair) -> i64 {
    (pair.punch_out - pair.punch_in).num_minutes()
}

/// Worked minutes that fall inside the shift window.
///
/// The overlap of `[punch_in, punch_out)` with `[shift_start, shift_end)`,
/// clamped to `[0, scheduled_minutes]`. An empty or inverted overlap yields
/// zero.
pub fn regular_minutes(pair: &PunchPair, window: &ShiftWindow) -> i64 {
    let overlap_start = pair.punch_in.max(window.start);
    let overlap_end = pair.punch_out.min(window.end);
    let overlap = (overlap_end - overlap_start).num_minutes();
    overlap.clamp(0, window.scheduled_minutes().max(0))
}

/// Worked minutes after the scheduled shift end.
///
/// Only time strictly after the shift end counts, and only time actually
/// worked: when the whole punch lies past the shift end, overtime equals
/// the worked duration. Early arrival before the shift start is never
/// credited as overtime.
pub fn overtime_minutes(pair: &PunchPair, window: &ShiftWindow) -> i64 {
    let after_end = pair.punch_in.max(window.end);
    (pair.punch_out - after_end).num_minutes().max(0)
}
