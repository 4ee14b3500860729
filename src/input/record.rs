//! Raw journey records and timestamp parsing.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Journey;

/// Timestamp layouts accepted in addition to RFC 3339.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A journey as it appears in JSON input and HTTP request bodies.
///
/// Zones are kept as signed integers so that out-of-range values reach
/// [`Journey::new`] and are reported as invalid zones rather than as
/// deserialization failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRecord {
    /// Local start time, e.g. `2025-11-03T10:20:00`.
    pub timestamp: String,
    /// Zone the journey started in.
    pub from_zone: i64,
    /// Zone the journey ended in.
    pub to_zone: i64,
}

impl JourneyRecord {
    /// Converts the record into a validated journey.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::JourneyParse`] at `location` if the timestamp
    /// cannot be parsed, and [`EngineError::InvalidZone`] if either zone is
    /// out of range.
    pub fn to_journey(&self, location: &str) -> EngineResult<Journey> {
        let timestamp =
            parse_timestamp(&self.timestamp).ok_or_else(|| EngineError::JourneyParse {
                location: location.to_string(),
                message: format!("invalid timestamp '{}'", self.timestamp),
            })?;

        Journey::new(timestamp, self.from_zone, self.to_zone)
    }
}

/// Parses a journey timestamp into local wall-clock time.
///
/// RFC 3339 values with an offset keep the wall-clock time in that offset;
/// the offset itself is dropped. Values without an offset are taken as-is.
///
/// # Example
///
/// ```
/// use fare_engine::input::parse_timestamp;
///
/// let plain = parse_timestamp("2025-11-03T10:20:00").unwrap();
/// let offset = parse_timestamp("2025-11-03T10:20:00+01:00").unwrap();
/// assert_eq!(plain, offset);
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
