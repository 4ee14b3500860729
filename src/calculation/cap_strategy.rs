//! Daily and weekly fare capping.
//!
//! A [`CapStrategy`] turns a journey's base fare into the amount actually
//! charged, given everything charged earlier in the same run. Caps are
//! history-dependent, so journeys must be fed in ascending timestamp order.

use crate::config::FareRules;
use crate::error::EngineResult;
use crate::models::{Journey, Pence};

use super::accumulator::CapAccumulator;

/// Which capping branch decided a journey's charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapOutcome {
    /// No cap applied; the base fare was charged in full.
    FullFare,
    /// The daily cap cut the fare short.
    DailyCapPartial,
    /// The weekly cap cut the fare short.
    WeeklyCapPartial,
    /// The daily cap was already reached; nothing charged.
    DailyCapReached,
    /// The weekly cap was already reached; nothing charged.
    WeeklyCapReached,
}

/// The charge decided for one journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapDecision {
    /// The amount to charge.
    pub charged_fare: Pence,
    /// The branch that produced the charge.
    pub outcome: CapOutcome,
    /// Human-readable reason for the charge.
    pub explanation: String,
    /// The daily cap in force for the journey's day.
    pub daily_cap: Pence,
    /// The weekly cap in force for the journey's week.
    pub weekly_cap: Pence,
}

/// Applies spending caps to a journey, updating the run's accumulator.
pub trait CapStrategy {
    /// Decides the charged fare for `journey` and records it in `accumulator`.
    fn apply_cap(
        &self,
        journey: &Journey,
        base_fare: Pence,
        accumulator: &mut CapAccumulator,
        rules: &FareRules,
    ) -> EngineResult<CapDecision>;
}

/// Caps spending per calendar day and per Monday–Sunday week.
///
/// The cap for a period is taken from the farthest zone pair travelled in
/// that period so far, including the journey being priced. When a farther
/// pair shows up mid-period the higher cap applies from then on; earlier
/// charges are left as they were.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::{CapAccumulator, CapOutcome, CapStrategy, DailyWeeklyCapStrategy};
/// use fare_engine::config::FareRules;
/// use fare_engine::models::Journey;
/// use chrono::NaiveDateTime;
///
/// let rules = FareRules::default();
/// let mut accumulator = CapAccumulator::new();
/// let ts = NaiveDateTime::parse_from_str("2025-11-03 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let journey = Journey::new(ts, 1, 1).unwrap();
///
/// let decision = DailyWeeklyCapStrategy
///     .apply_cap(&journey, 30, &mut accumulator, &rules)
///     .unwrap();
/// assert_eq!(decision.charged_fare, 30);
/// assert_eq!(decision.outcome, CapOutcome::FullFare);
/// assert_eq!(decision.explanation, "Peak hour fare");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyWeeklyCapStrategy;

impl CapStrategy for DailyWeeklyCapStrategy {
    fn apply_cap(
        &self,
        journey: &Journey,
        base_fare: Pence,
        accumulator: &mut CapAccumulator,
        rules: &FareRules,
    ) -> EngineResult<CapDecision> {
        let day_key = journey.calendar_day_key();
        let week_key = journey.week_key();
        let zone_pair = journey.zone_pair();

        // The journey's own zone pair takes part in choosing its caps.
        let day = accumulator.day_entry(day_key);
        day.visit(zone_pair);
        let daily_total = day.total();
        let daily_zone = rules.applicable_cap_zone(day.zone_pairs());

        let week = accumulator.week_entry(week_key);
        week.visit(zone_pair);
        let weekly_total = week.total();
        let weekly_zone = rules.applicable_cap_zone(week.zone_pairs());

        let daily_cap = rules.get_daily_cap(daily_zone)?;
        let weekly_cap = rules.get_weekly_cap(weekly_zone)?;

        let remaining_weekly = weekly_cap.saturating_sub(weekly_total);

        let (charged_fare, outcome) = if remaining_weekly == 0 {
            (0, CapOutcome::WeeklyCapReached)
        } else if daily_total >= daily_cap {
            (0, CapOutcome::DailyCapReached)
        } else {
            let max_daily_charge = (daily_cap - daily_total).min(base_fare);
            let charged = max_daily_charge.min(remaining_weekly);
            let outcome = if charged >= base_fare {
                CapOutcome::FullFare
            } else if charged == remaining_weekly {
                CapOutcome::WeeklyCapPartial
            } else {
                CapOutcome::DailyCapPartial
            };
            (charged, outcome)
        };

        accumulator.day_entry(day_key).charge(charged_fare);
        accumulator.week_entry(week_key).charge(charged_fare);

        let explanation = match outcome {
            CapOutcome::FullFare if journey.is_peak_hour() => "Peak hour fare".to_string(),
            CapOutcome::FullFare => "Off-peak fare".to_string(),
            CapOutcome::WeeklyCapReached => format!("Weekly cap ({}) reached", weekly_cap),
            CapOutcome::DailyCapReached => format!("Daily cap ({}) reached", daily_cap),
            CapOutcome::WeeklyCapPartial => format!(
                "Weekly cap ({}) reached; charged {} instead of {}",
                weekly_cap, charged_fare, base_fare
            ),
            CapOutcome::DailyCapPartial => format!(
                "Daily cap ({}) reached; charged {} instead of {}",
                daily_cap, charged_fare, base_fare
            ),
        };

        Ok(CapDecision {
            charged_fare,
            outcome,
            explanation,
            daily_cap,
            weekly_cap,
        })
    }
}
