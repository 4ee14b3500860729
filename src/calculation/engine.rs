//! Fare calculation orchestration.
//!
//! The [`FareCalculationEngine`] sorts a batch of journeys by time and runs
//! each one through a [`FareStrategy`] and then a [`CapStrategy`], sharing a
//! fresh [`CapAccumulator`] across the batch.

use crate::config::FareRules;
use crate::error::EngineResult;
use crate::models::{FareCalculationResult, Journey, JourneyFare, Pence};

use super::accumulator::CapAccumulator;
use super::cap_strategy::{CapStrategy, DailyWeeklyCapStrategy};
use super::fare_strategy::{FareStrategy, StandardFareStrategy};

/// Calculates charged fares for a batch of journeys.
///
/// The engine owns its fare rules and strategies and never changes them, so
/// one engine can serve any number of calculations. Each call to
/// [`calculate_fares`](Self::calculate_fares) gets its own accumulator.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::FareCalculationEngine;
/// use fare_engine::config::FareRules;
/// use fare_engine::models::Journey;
/// use chrono::NaiveDateTime;
///
/// let engine = FareCalculationEngine::new(FareRules::default());
/// let ts = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let journeys = vec![
///     Journey::new(ts("2025-11-03 18:15:00"), 1, 1).unwrap(),
///     Journey::new(ts("2025-11-03 10:20:00"), 2, 1).unwrap(),
/// ];
///
/// let result = engine.calculate_fares(&journeys).unwrap();
/// assert_eq!(result.total_fare, 65);
/// assert_eq!(result.journey_fares[0].from_zone, 2); // sorted by time
/// ```
#[derive(Debug, Clone)]
pub struct FareCalculationEngine<F = StandardFareStrategy, C = DailyWeeklyCapStrategy> {
    rules: FareRules,
    fare_strategy: F,
    cap_strategy: C,
}

impl FareCalculationEngine {
    /// Creates an engine using the standard fare and cap strategies.
    pub fn new(rules: FareRules) -> Self {
        Self::with_strategies(rules, StandardFareStrategy, DailyWeeklyCapStrategy)
    }
}

impl<F: FareStrategy, C: CapStrategy> FareCalculationEngine<F, C> {
    /// Creates an engine with custom pricing and capping strategies.
    pub fn with_strategies(rules: FareRules, fare_strategy: F, cap_strategy: C) -> Self {
        Self {
            rules,
            fare_strategy,
            cap_strategy,
        }
    }

    /// Returns the fare rules the engine prices against.
    pub fn rules(&self) -> &FareRules {
        &self.rules
    }

    /// Calculates base and charged fares for every journey.
    ///
    /// Journeys are processed in ascending timestamp order; journeys with
    /// the same timestamp keep their input order. The result lists journeys
    /// in that processed order.
    ///
    /// # Errors
    ///
    /// Any rule lookup failure aborts the whole calculation. Caps depend on
    /// every earlier journey, so no partial result is returned.
    pub fn calculate_fares(&self, journeys: &[Journey]) -> EngineResult<FareCalculationResult> {
        if journeys.is_empty() {
            return Ok(FareCalculationResult::empty());
        }

        let mut sorted: Vec<&Journey> = journeys.iter().collect();
        sorted.sort_by_key(|journey| journey.timestamp());

        let mut accumulator = CapAccumulator::new();
        let mut journey_fares = Vec::with_capacity(sorted.len());
        let mut total_fare: Pence = 0;

        for journey in sorted {
            let base_fare = self.fare_strategy.calculate_fare(journey, &self.rules)?;
            let decision =
                self.cap_strategy
                    .apply_cap(journey, base_fare, &mut accumulator, &self.rules)?;

            total_fare += decision.charged_fare;
            journey_fares.push(JourneyFare {
                timestamp: journey.timestamp(),
                from_zone: journey.from_zone(),
                to_zone: journey.to_zone(),
                base_fare,
                charged_fare: decision.charged_fare,
                explanation: decision.explanation,
            });
        }

        Ok(FareCalculationResult {
            total_fare,
            journey_fares,
        })
    }
}
