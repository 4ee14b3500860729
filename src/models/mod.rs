//! Core data models for the Fare Calculation Engine.
//!
//! This module contains the domain values shared across the engine: journeys,
//! zone pairs and calculation results.

mod fare_result;
mod journey;
mod zone_pair;

pub use fare_result::{FareCalculationResult, JourneyFare};
pub use journey::{Journey, MAX_ZONE, MIN_ZONE};
pub use zone_pair::ZonePair;

/// A monetary amount in minor currency units (e.g. pence).
pub type Pence = u32;
