//! Plain-data input records shared by the calculators.

use serde::{Deserialize, Serialize};

use tianji_calendar::{
    ClockTime, LunarDate, MomentOptions, SexagenaryMoment, SolarDate, ZiHourMode, lunar_to_solar,
    sexagenary_moment,
};

use crate::error::ChartError;

/// Which calendar the input date is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar,
}

/// Gender, where a derivation needs it (Yun direction, decade luck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// A birth or query moment, as received from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Absent when the birth hour is unknown.
    pub hour: Option<u32>,
    pub minute: u32,
    pub calendar: CalendarType,
    /// Only meaningful for lunar dates: the date sits in the leap month.
    pub leap_month: bool,
    pub zi_hour: ZiHourMode,
    /// Birthplace longitude for true-solar-time correction.
    pub longitude: Option<f64>,
}

impl QueryMoment {
    /// A solar-calendar moment at a known hour.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: Some(hour),
            minute,
            calendar: CalendarType::Solar,
            leap_month: false,
            zi_hour: ZiHourMode::default(),
            longitude: None,
        }
    }

    /// A solar-calendar moment with an unknown hour.
    pub fn solar_hour_unknown(year: i32, month: u32, day: u32) -> Self {
        Self {
            hour: None,
            ..Self::solar(year, month, day, 0, 0)
        }
    }

    /// A lunar-calendar moment at a known hour.
    pub fn lunar(year: i32, month: u32, day: u32, leap: bool, hour: u32, minute: u32) -> Self {
        Self {
            calendar: CalendarType::Lunar,
            leap_month: leap,
            ..Self::solar(year, month, day, hour, minute)
        }
    }

    /// Resolve to sexagenary pillars, converting lunar input to solar
    /// first. All downstream derivation consumes the result.
    pub fn resolve(&self) -> Result<SexagenaryMoment, ChartError> {
        let solar = match self.calendar {
            CalendarType::Solar => SolarDate::new(self.year, self.month, self.day),
            CalendarType::Lunar => lunar_to_solar(LunarDate {
                year: self.year,
                month: self.month,
                day: self.day,
                leap: self.leap_month,
            })?,
        };
        let time = self.hour.map(|h| ClockTime::new(h, self.minute));
        let options = MomentOptions {
            zi_hour: self.zi_hour,
            longitude: self.longitude,
        };
        Ok(sexagenary_moment(solar, time, &options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_input_resolves_through_conversion() {
        // lunar 2000 正月初一 = solar 2000-02-05
        let moment = QueryMoment::lunar(2000, 1, 1, false, 12, 0)
            .resolve()
            .unwrap();
        assert_eq!(moment.solar, SolarDate::new(2000, 2, 5));
        assert_eq!(moment.year.name(), "庚辰");
    }

    #[test]
    fn out_of_range_fails_before_any_lookup() {
        let err = QueryMoment::solar(1899, 1, 1, 0, 0).resolve().unwrap_err();
        assert!(err.to_string().contains("1900-2100"));
    }
}
