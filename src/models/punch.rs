//! Punch pair models.
//!
//! This module defines the resolved PunchPair used by the calculator and
//! the RawPunchPair used for batch input, where punches may be absent or
//! unparseable and are validated per record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A resolved pair of punch instants.
///
/// Both instants are required. The pair is not validated for ordering:
/// a punch-out at or before the punch-in is accepted and produces
/// zero-leaning metrics downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchPair {
    /// The clock-in instant.
    pub punch_in: DateTime<Utc>,
    /// The clock-out instant.
    pub punch_out: DateTime<Utc>,
}

impl PunchPair {
    /// Creates a punch pair from two instants.
    pub fn new(punch_in: DateTime<Utc>, punch_out: DateTime<Utc>) -> Self {
        Self {
            punch_in,
            punch_out,
        }
    }
}

/// An unvalidated punch pair as received from a caller.
///
/// Punches are ISO-8601 strings with an explicit offset or UTC designator,
/// and either may be missing. [`RawPunchPair::resolve`] converts the record
/// into a [`PunchPair`] or reports which field was invalid.
///
/// # Examples
///
/// ```
/// use timeclock_engine::models::RawPunchPair;
///
/// let record = RawPunchPair {
///     punch_in: Some("2025-10-01T09:15:00+08:00".to_string()),
///     punch_out: Some("2025-10-01T19:30:00+08:00".to_string()),
/// };
/// let pair = record.resolve().unwrap();
/// assert!(pair.punch_out > pair.punch_in);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchPair {
    /// The clock-in instant as an ISO-8601 string, if present.
    #[serde(default)]
    pub punch_in: Option<String>,
    /// The clock-out instant as an ISO-8601 string, if present.
    #[serde(default)]
    pub punch_out: Option<String>,
}

impl RawPunchPair {
    /// Resolves the record into a typed [`PunchPair`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the offending field when
    /// a punch is missing or is not a valid ISO-8601 instant.
    pub fn resolve(&self) -> EngineResult<PunchPair> {
        let punch_in = parse_instant("punch_in", self.punch_in.as_deref())?;
        let punch_out = parse_instant("punch_out", self.punch_out.as_deref())?;
        Ok(PunchPair::new(punch_in, punch_out))
    }
}

/// Parses an optional ISO-8601 instant, reporting the field on failure.
fn parse_instant(field: &str, value: Option<&str>) -> EngineResult<DateTime<Utc>> {
    let value = value.ok_or_else(|| EngineError::missing(field))?;
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("'{}' is not a valid ISO-8601 instant: {}", value, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_valid_pair() {
        let record = RawPunchPair {
            punch_in: Some("2025-10-01T09:15:00+08:00".to_string()),
            punch_out: Some("2025-10-01T19:30:00+08:00".to_string()),
        };

        let pair = record.resolve().unwrap();
        assert_eq!(
            pair.punch_in,
            Utc.with_ymd_and_hms(2025, 10, 1, 1, 15, 0).unwrap()
        );
        assert_eq!(
            pair.punch_out,
            Utc.with_ymd_and_hms(2025, 10, 1, 11, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_resolve_utc_designator() {
        let record = RawPunchPair {
            punch_in: Some("2025-10-01T01:15:00Z".to_string()),
            punch_out: Some("2025-10-01T11:30:00Z".to_string()),
        };

        assert!(record.resolve().is_ok());
    }

    #[test]
    fn test_resolve_missing_punch_out() {
        let record = RawPunchPair {
            punch_in: Some("2025-10-01T09:15:00+08:00".to_string()),
            punch_out: None,
        };

        let err = record.resolve().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input 'punch_out': is required");
    }

    #[test]
    fn test_resolve_missing_punch_in() {
        let record = RawPunchPair {
            punch_in: None,
            punch_out: Some("2025-10-01T19:30:00+08:00".to_string()),
        };

        let err = record.resolve().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input 'punch_in': is required");
    }

    #[test]
    fn test_resolve_unparseable_instant() {
        let record = RawPunchPair {
            punch_in: Some("not-a-timestamp".to_string()),
            punch_out: Some("2025-10-01T19:30:00+08:00".to_string()),
        };

        let err = record.resolve().unwrap_err();
        assert!(err.to_string().contains("punch_in"));
        assert!(err.to_string().contains("not-a-timestamp"));
    }

    #[test]
    fn test_resolve_accepts_inverted_pair() {
        // Ordering is deliberately not validated.
        let record = RawPunchPair {
            punch_in: Some("2025-10-01T19:30:00+08:00".to_string()),
            punch_out: Some("2025-10-01T09:15:00+08:00".to_string()),
        };

        let pair = record.resolve().unwrap();
        assert!(pair.punch_out < pair.punch_in);
    }

    #[test]
    fn test_raw_pair_deserializes_with_missing_fields() {
        let record: RawPunchPair = serde_json::from_str("{}").unwrap();
        assert!(record.punch_in.is_none());
        assert!(record.punch_out.is_none());
    }
}
