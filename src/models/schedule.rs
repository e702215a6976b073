//! Shift schedule model.
//!
//! This module defines the Schedule struct representing one recurring
//! daily shift window in a specific IANA timezone.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A recurring daily shift window.
///
/// The start and end are times of day; the window is anchored to a concrete
/// calendar date at calculation time, in the schedule's timezone. When the
/// timezone is omitted from serialized input it defaults to UTC.
///
/// # Examples
///
/// ```
/// use timeclock_engine::models::Schedule;
///
/// let schedule: Schedule = serde_yaml::from_str("start: \"09:00\"\nend: \"18:00\"\ntimezone: Asia/Manila").unwrap();
/// assert_eq!(schedule.scheduled_minutes(), 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The scheduled start time of day.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// The scheduled end time of day.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// The IANA timezone the schedule is observed in.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
}

fn default_timezone() -> Tz {
    Tz::UTC
}

impl Schedule {
    /// Creates a schedule from start/end times of day and a timezone.
    pub fn new(start: NaiveTime, end: NaiveTime, timezone: Tz) -> Self {
        Self {
            start,
            end,
            timezone,
        }
    }

    /// Returns the nominal length of the shift window in minutes.
    ///
    /// This is the signed difference between end and start on the same
    /// calendar day; an end at or before the start yields zero or a
    /// negative value, which the calculation clamps against.
    pub fn scheduled_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Serde adapter for `HH:MM` times of day.
///
/// Accepts `HH:MM` and, leniently, `HH:MM:SS`; always serializes as `HH:MM`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
