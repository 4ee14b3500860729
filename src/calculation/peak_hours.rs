//! Day detection and peak-hour classification.
//!
//! This module provides utilities for determining the day type (weekday or
//! weekend) for any datetime and for deciding whether a journey starting at
//! that time falls inside one of the fixed peak windows.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Represents the type of day for peak-window selection.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(day_type.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday - commuter peak windows apply.
    Weekday,
    /// Saturday and Sunday - leisure peak windows apply.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day type for a given datetime.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDateTime;
///
/// // 2025-11-08 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2025-11-08 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Weekend);
///
/// // 2025-11-03 is a Monday
/// let monday = NaiveDateTime::parse_from_str("2025-11-03 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(datetime: NaiveDateTime) -> DayType {
    match datetime.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// A peak window expressed in minutes since local midnight.
///
/// Both bounds are inclusive: a journey at exactly `end` is still peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    /// First peak minute of the window.
    pub start: u32,
    /// Last peak minute of the window.
    pub end: u32,
}

impl PeakWindow {
    /// Creates a window from `start_hour:start_minute` to `end_hour:end_minute`.
    pub const fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            start: start_hour * 60 + start_minute,
            end: end_hour * 60 + end_minute,
        }
    }

    /// Returns true if the minute of the day falls inside the window.
    pub fn contains(&self, minute_of_day: u32) -> bool {
        (self.start..=self.end).contains(&minute_of_day)
    }
}

/// Weekday peaks: 07:00–10:30 and 17:00–20:00.
pub const WEEKDAY_PEAK_WINDOWS: [PeakWindow; 2] =
    [PeakWindow::new(7, 0, 10, 30), PeakWindow::new(17, 0, 20, 0)];

/// Weekend peaks: 09:00–11:00 and 18:00–22:00.
pub const WEEKEND_PEAK_WINDOWS: [PeakWindow; 2] =
    [PeakWindow::new(9, 0, 11, 0), PeakWindow::new(18, 0, 22, 0)];

/// Returns the peak windows for a day type.
pub fn peak_windows(day_type: DayType) -> &'static [PeakWindow] {
    match day_type {
        DayType::Weekday => &WEEKDAY_PEAK_WINDOWS,
        DayType::Weekend => &WEEKEND_PEAK_WINDOWS,
    }
}

/// Returns true if a journey starting at `datetime` pays the peak fare.
///
/// Only hours and minutes count; seconds are ignored, so 10:30:59 on a
/// weekday is still peak.
///
/// # Example
///
/// ```
/// use fare_engine::calculation::is_peak_time;
/// use chrono::NaiveDateTime;
///
/// let monday_morning = NaiveDateTime::parse_from_str("2025-11-03 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_peak_time(monday_morning));
///
/// let monday_late = NaiveDateTime::parse_from_str("2025-11-03 10:31:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!is_peak_time(monday_late));
/// ```
pub fn is_peak_time(datetime: NaiveDateTime) -> bool {
    let minute_of_day = datetime.hour() * 60 + datetime.minute();
    peak_windows(get_day_type(datetime))
        .iter()
        .any(|window| window.contains(minute_of_day))
}
