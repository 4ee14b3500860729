//! Running totals for daily and weekly capping.
//!
//! A [`CapAccumulator`] lives for exactly one fare calculation run. It keeps,
//! per calendar day and per week (keyed by the week's Monday), how much has
//! been charged so far and which zone pairs were travelled.

use std::collections::HashMap;

use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::models::{Pence, ZonePair};

/// Charges and visited zone pairs for one day or one week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodLedger {
    total: Pence,
    // Insertion order matters: the first pair seen wins cap ties.
    zone_pairs: SmallVec<[ZonePair; 4]>,
}

impl PeriodLedger {
    /// Returns the amount charged so far in this period.
    pub fn total(&self) -> Pence {
        self.total
    }

    /// Returns the distinct zone pairs seen in this period, first-seen first.
    pub fn zone_pairs(&self) -> &[ZonePair] {
        &self.zone_pairs
    }

    /// Records that a journey on `zone_pair` happened in this period.
    pub fn visit(&mut self, zone_pair: ZonePair) {
        if !self.zone_pairs.contains(&zone_pair) {
            self.zone_pairs.push(zone_pair);
        }
    }

    /// Adds a charged amount to the running total.
    pub fn charge(&mut self, amount: Pence) {
        self.total += amount;
    }
}

/// Per-run ledger of daily and weekly charges.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::CapAccumulator;
/// use fare_engine::models::ZonePair;
/// use chrono::NaiveDate;
///
/// let mut accumulator = CapAccumulator::new();
/// let monday = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
///
/// let day = accumulator.day_entry(monday);
/// day.visit(ZonePair::new(1, 2));
/// day.charge(35);
///
/// assert_eq!(accumulator.daily_total(monday), 35);
/// assert_eq!(accumulator.weekly_total(monday), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapAccumulator {
    daily: HashMap<NaiveDate, PeriodLedger>,
    weekly: HashMap<NaiveDate, PeriodLedger>,
}

impl CapAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ledger for a day, creating an empty one on first use.
    pub fn day_entry(&mut self, day_key: NaiveDate) -> &mut PeriodLedger {
        self.daily.entry(day_key).or_default()
    }

    /// Returns the ledger for a week, creating an empty one on first use.
    pub fn week_entry(&mut self, week_key: NaiveDate) -> &mut PeriodLedger {
        self.weekly.entry(week_key).or_default()
    }

    /// Returns the ledger for a day, if any journey was recorded on it.
    pub fn day(&self, day_key: NaiveDate) -> Option<&PeriodLedger> {
        self.daily.get(&day_key)
    }

    /// Returns the ledger for a week, if any journey was recorded in it.
    pub fn week(&self, week_key: NaiveDate) -> Option<&PeriodLedger> {
        self.weekly.get(&week_key)
    }

    /// Returns the amount charged on a day (0 if the day was never seen).
    pub fn daily_total(&self, day_key: NaiveDate) -> Pence {
        self.day(day_key).map_or(0, PeriodLedger::total)
    }

    /// Returns the amount charged in a week (0 if the week was never seen).
    pub fn weekly_total(&self, week_key: NaiveDate) -> Pence {
        self.week(week_key).map_or(0, PeriodLedger::total)
    }
}
