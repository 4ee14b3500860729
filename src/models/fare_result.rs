//! Fare calculation result models.
//!
//! This module contains the [`FareCalculationResult`] type returned by the
//! engine and the per-journey [`JourneyFare`] records it is made of. Field
//! names are serialized in camelCase (`totalFare`, `journeyFares`, ...) and
//! form the stable contract consumed by the output formatters and the HTTP API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Pence;

/// The fare outcome for a single journey.
///
/// # Example
///
/// ```
/// use fare_engine::models::JourneyFare;
/// use chrono::NaiveDateTime;
///
/// let fare = JourneyFare {
///     timestamp: NaiveDateTime::parse_from_str("2025-11-03 10:20:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     from_zone: 2,
///     to_zone: 1,
///     base_fare: 35,
///     charged_fare: 35,
///     explanation: "Peak hour fare".to_string(),
/// };
/// assert!(fare.charged_fare <= fare.base_fare);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyFare {
    /// When the journey started (local wall-clock time).
    pub timestamp: NaiveDateTime,
    /// The zone the journey started in.
    pub from_zone: u32,
    /// The zone the journey ended in.
    pub to_zone: u32,
    /// The uncapped fare for the journey.
    pub base_fare: Pence,
    /// The fare actually charged after caps.
    pub charged_fare: Pence,
    /// Human-readable reason for the charged amount.
    pub explanation: String,
}

/// The complete result of a fare calculation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareCalculationResult {
    /// The sum of every charged fare.
    pub total_fare: Pence,
    /// Per-journey records in ascending timestamp order.
    pub journey_fares: Vec<JourneyFare>,
}

impl FareCalculationResult {
    /// Returns an empty result (no journeys, nothing charged).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the total that would have been charged with no caps.
    pub fn total_base_fare(&self) -> Pence {
        self.journey_fares.iter().map(|jf| jf.base_fare).sum()
    }
}
