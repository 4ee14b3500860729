//! Journey model.
//!
//! This module defines the [`Journey`] struct, the immutable record of one
//! trip, together with the keys derived from it for fare and cap lookups.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::calculation::is_peak_time;
use crate::error::{EngineError, EngineResult};

use super::ZonePair;

/// The lowest fare zone a journey may start or end in.
pub const MIN_ZONE: u32 = 1;

/// The highest fare zone a journey may start or end in.
pub const MAX_ZONE: u32 = 2;

/// A single trip between two fare zones at a local wall-clock time.
///
/// Journeys can only be built through [`Journey::new`], which rejects zones
/// outside `MIN_ZONE..=MAX_ZONE`. They are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    timestamp: NaiveDateTime,
    from_zone: u32,
    to_zone: u32,
}

impl Journey {
    /// Creates a journey, validating both zones.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidZone`] if either zone is outside the
    /// valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_engine::models::Journey;
    /// use chrono::NaiveDateTime;
    ///
    /// let ts = NaiveDateTime::parse_from_str("2025-11-03 10:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let journey = Journey::new(ts, 2, 1).unwrap();
    /// assert_eq!(journey.zone_pair().to_string(), "1-2");
    ///
    /// assert!(Journey::new(ts, 3, 1).is_err());
    /// ```
    pub fn new(timestamp: NaiveDateTime, from_zone: i64, to_zone: i64) -> EngineResult<Self> {
        Ok(Self {
            timestamp,
            from_zone: validate_zone(from_zone)?,
            to_zone: validate_zone(to_zone)?,
        })
    }

    /// Returns the local time the journey started.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the zone the journey started in.
    pub fn from_zone(&self) -> u32 {
        self.from_zone
    }

    /// Returns the zone the journey ended in.
    pub fn to_zone(&self) -> u32 {
        self.to_zone
    }

    /// Returns the direction-independent zone pair for this journey.
    pub fn zone_pair(&self) -> ZonePair {
        ZonePair::new(self.from_zone, self.to_zone)
    }

    /// Returns true if the journey starts inside a peak window.
    pub fn is_peak_hour(&self) -> bool {
        is_peak_time(self.timestamp)
    }

    /// Returns the calendar day the journey belongs to for daily capping.
    pub fn calendar_day_key(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the Monday that starts the journey's Monday–Sunday week.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_engine::models::Journey;
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// // 2025-11-09 is a Sunday
    /// let ts = NaiveDateTime::parse_from_str("2025-11-09 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let journey = Journey::new(ts, 1, 2).unwrap();
    /// assert_eq!(journey.week_key(), NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
    /// ```
    pub fn week_key(&self) -> NaiveDate {
        let date = self.timestamp.date();
        // Sunday counts as day 6 of the week that began the previous Monday.
        let days_since_monday = date.weekday().num_days_from_monday();
        date - Duration::days(i64::from(days_since_monday))
    }
}

fn validate_zone(zone: i64) -> EngineResult<u32> {
    u32::try_from(zone)
        .ok()
        .filter(|z| (MIN_ZONE..=MAX_ZONE).contains(z))
        .ok_or(EngineError::InvalidZone {
            zone,
            min: MIN_ZONE,
            max: MAX_ZONE,
        })
}
