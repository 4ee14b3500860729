//! Zone pair model.
//!
//! A [`ZonePair`] is the direction-independent key used by every fare and cap
//! table: a journey from zone 2 to zone 1 and one from zone 1 to zone 2 share
//! the pair `1-2`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A normalized pair of fare zones, stored lowest zone first.
///
/// # Examples
///
/// ```
/// use fare_engine::models::ZonePair;
///
/// let pair = ZonePair::new(2, 1);
/// assert_eq!(pair, ZonePair::new(1, 2));
/// assert_eq!(pair.to_string(), "1-2");
/// assert_eq!("1-2".parse::<ZonePair>().unwrap(), pair);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZonePair {
    low: u32,
    high: u32,
}

impl ZonePair {
    /// Creates a zone pair from two zones in either order.
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns the lower-numbered zone.
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Returns the higher-numbered zone, which decides how far the journey reached.
    pub fn high(&self) -> u32 {
        self.high
    }
}

impl fmt::Display for ZonePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for ZonePair {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidZonePair {
            value: s.to_string(),
        };

        let (a, b) = s.trim().split_once('-').ok_or_else(invalid)?;
        let a: u32 = a.trim().parse().map_err(|_| invalid())?;
        let b: u32 = b.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(a, b))
    }
}

impl Serialize for ZonePair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZonePair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
