//! Error types for calendar conversion and pillar derivation.

use thiserror::Error;

/// Errors from civil/lunar validation or sexagenary derivation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Civil year outside the supported table range.
    #[error("year {0} outside supported range 1900-2100")]
    YearOutOfRange(i32),
    /// Month or day does not exist in the civil calendar.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute out of range.
    #[error("invalid clock time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Lunar month/day does not exist in the target year (including a
    /// leap flag naming a month that has no leap that year).
    #[error("invalid lunar date: year {year} month {month} day {day} leap {leap}")]
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    },
    /// Longitude outside [-180, 180] or not finite.
    #[error("malformed longitude {0}")]
    InvalidLongitude(f64),
}
