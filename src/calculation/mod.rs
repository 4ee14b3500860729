//! Calculation logic for the Fare Calculation Engine.
//!
//! This module contains peak-hour classification, base fare pricing, the
//! daily and weekly capping rules and the engine that runs a batch of
//! journeys through them in time order.

mod accumulator;
mod cap_strategy;
mod engine;
mod fare_strategy;
mod peak_hours;

pub use accumulator::{CapAccumulator, PeriodLedger};
pub use cap_strategy::{CapDecision, CapOutcome, CapStrategy, DailyWeeklyCapStrategy};
pub use engine::FareCalculationEngine;
pub use fare_strategy::{FareStrategy, StandardFareStrategy};
pub use peak_hours::{
    DayType, PeakWindow, WEEKDAY_PEAK_WINDOWS, WEEKEND_PEAK_WINDOWS, get_day_type, is_peak_time,
    peak_windows,
};
