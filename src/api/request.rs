//! Request types for the Time Metrics Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/calculate/batch` endpoints, and their conversions into domain
//! types with per-field validation.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{RawPunchPair, Schedule};

/// Request body for the `/calculate` endpoint.
///
/// Punches are ISO-8601 strings with an explicit offset or UTC designator.
/// When the schedule is omitted the service's configured default applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The clock-in instant.
    #[serde(default)]
    pub punch_in: Option<String>,
    /// The clock-out instant.
    #[serde(default)]
    pub punch_out: Option<String>,
    /// The shift schedule to evaluate against.
    #[serde(default)]
    pub schedule: Option<ScheduleRequest>,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The punch records to calculate, one result entry per record.
    pub records: Vec<PunchRecordRequest>,
    /// The shift schedule to evaluate against.
    #[serde(default)]
    pub schedule: Option<ScheduleRequest>,
}

/// One punch record in a batch request.
///
/// Either punch may be absent; validation happens per record so a bad
/// entry does not fail the whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PunchRecordRequest {
    /// The clock-in instant, if present.
    #[serde(default)]
    pub punch_in: Option<String>,
    /// The clock-out instant, if present.
    #[serde(default)]
    pub punch_out: Option<String>,
}

/// Shift schedule information in a calculation request.
///
/// Start and end are `HH:MM` times of day; the timezone is an IANA zone
/// name and defaults to UTC when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The scheduled start time of day (`HH:MM`).
    #[serde(default)]
    pub start: Option<String>,
    /// The scheduled end time of day (`HH:MM`).
    #[serde(default)]
    pub end: Option<String>,
    /// The IANA timezone name.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<PunchRecordRequest> for RawPunchPair {
    fn from(req: PunchRecordRequest) -> Self {
        RawPunchPair {
            punch_in: req.punch_in,
            punch_out: req.punch_out,
        }
    }
}

impl TryFrom<ScheduleRequest> for Schedule {
    type Error = EngineError;

    fn try_from(req: ScheduleRequest) -> EngineResult<Self> {
        let start = parse_time_of_day("start", req.start.as_deref())?;
        let end = parse_time_of_day("end", req.end.as_deref())?;
        let timezone = match req.timezone.as_deref() {
            Some(name) => name.parse::<Tz>().map_err(|_| EngineError::UnknownTimezone {
                name: name.to_string(),
            })?,
            None => Tz::UTC,
        };
        Ok(Schedule::new(start, end, timezone))
    }
}

/// Parses a required `HH:MM` time-of-day field.
fn parse_time_of_day(field: &str, value: Option<&str>) -> EngineResult<NaiveTime> {
    let value = value.ok_or_else(|| EngineError::InvalidSchedule {
        field: field.to_string(),
        message: "is required".to_string(),
    })?;
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidSchedule {
            field: field.to_string(),
            message: format!("'{}' is not a valid HH:MM time", value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "punch_in": "2025-10-01T09:15:00+08:00",
            "punch_out": "2025-10-01T19:30:00+08:00",
            "schedule": {
                "start": "09:00",
                "end": "18:00",
                "timezone": "Asia/Manila"
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.punch_in.as_deref(),
            Some("2025-10-01T09:15:00+08:00")
        );
        assert!(request.schedule.is_some());
    }

    #[test]
    fn test_deserialize_request_without_schedule() {
        let json = r#"{
            "punch_in": "2025-10-01T09:15:00+08:00",
            "punch_out": "2025-10-01T19:30:00+08:00"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.schedule.is_none());
    }

    #[test]
    fn test_schedule_conversion() {
        let req = ScheduleRequest {
            start: Some("09:00".to_string()),
            end: Some("18:00".to_string()),
            timezone: Some("Asia/Manila".to_string()),
        };

        let schedule: Schedule = req.try_into().unwrap();
        assert_eq!(schedule.scheduled_minutes(), 540);
        assert_eq!(schedule.timezone, Tz::Asia__Manila);
    }

    #[test]
    fn test_schedule_conversion_defaults_timezone_to_utc() {
        let req = ScheduleRequest {
            start: Some("09:00".to_string()),
            end: Some("17:00".to_string()),
            timezone: None,
        };

        let schedule: Schedule = req.try_into().unwrap();
        assert_eq!(schedule.timezone, Tz::UTC);
    }

    #[test]
    fn test_schedule_conversion_missing_start() {
        let req = ScheduleRequest {
            start: None,
            end: Some("18:00".to_string()),
            timezone: None,
        };

        let err = Schedule::try_from(req).unwrap_err();
        assert_eq!(err.to_string(), "Invalid schedule field 'start': is required");
    }

    #[test]
    fn test_schedule_conversion_bad_time() {
        let req = ScheduleRequest {
            start: Some("9am".to_string()),
            end: Some("18:00".to_string()),
            timezone: None,
        };

        let err = Schedule::try_from(req).unwrap_err();
        assert!(err.to_string().contains("9am"));
    }

    #[test]
    fn test_schedule_conversion_unknown_timezone() {
        let req = ScheduleRequest {
            start: Some("09:00".to_string()),
            end: Some("18:00".to_string()),
            timezone: Some("Mars/Olympus_Mons".to_string()),
        };

        let err = Schedule::try_from(req).unwrap_err();
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus_Mons");
    }

    #[test]
    fn test_punch_record_conversion() {
        let req = PunchRecordRequest {
            punch_in: Some("2025-10-01T09:00:00Z".to_string()),
            punch_out: None,
        };

        let raw: RawPunchPair = req.into();
        assert!(raw.punch_in.is_some());
        assert!(raw.punch_out.is_none());
    }
}
