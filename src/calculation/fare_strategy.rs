//! Base fare calculation.
//!
//! A [`FareStrategy`] prices a single journey before any caps are applied.

use crate::config::FareRules;
use crate::error::EngineResult;
use crate::models::{Journey, Pence};

/// Computes the uncapped fare for one journey.
pub trait FareStrategy {
    /// Returns the base fare for `journey` under `rules`.
    fn calculate_fare(&self, journey: &Journey, rules: &FareRules) -> EngineResult<Pence>;
}

/// Prices a journey at the peak or off-peak fare of its zone pair.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::{FareStrategy, StandardFareStrategy};
/// use fare_engine::config::FareRules;
/// use fare_engine::models::Journey;
/// use chrono::NaiveDateTime;
///
/// let ts = NaiveDateTime::parse_from_str("2025-11-03 10:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let journey = Journey::new(ts, 2, 1).unwrap();
/// let fare = StandardFareStrategy.calculate_fare(&journey, &FareRules::default()).unwrap();
/// assert_eq!(fare, 35);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFareStrategy;

impl FareStrategy for StandardFareStrategy {
    fn calculate_fare(&self, journey: &Journey, rules: &FareRules) -> EngineResult<Pence> {
        rules.get_fare(journey.zone_pair(), journey.is_peak_hour())
    }
}
