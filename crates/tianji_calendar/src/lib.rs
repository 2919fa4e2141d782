//! Calendar adapter: civil and lunisolar dates to sexagenary pillars.
//!
//! This crate provides:
//! - Civil (Gregorian) day arithmetic for 1900-2100
//! - Chinese lunisolar conversion with leap-month handling
//! - Solar-term instants from a solar-longitude series + bisection
//! - Year/month/day/hour pillar derivation with solar-term boundaries,
//!   zi-hour policy, and true-solar-time longitude correction
//!
//! Every other crate in the workspace consumes pillars through
//! [`sexagenary_moment`]; nothing downstream touches civil dates again.

pub mod civil;
pub mod error;
pub mod lunar;
pub mod pillars;
pub mod solar_term;

pub use civil::{
    ClockTime, MAX_YEAR, MIN_YEAR, SolarDate, civil_from_days, days_from_civil, days_in_month,
    is_leap_year, jd_beijing, jd_utc_from_beijing,
};
pub use error::CalendarError;
pub use lunar::{
    LunarDate, leap_month, leap_month_days, lunar_day_name, lunar_month_days, lunar_month_name,
    lunar_to_solar, lunar_year_days, solar_to_lunar,
};
pub use pillars::{
    MomentOptions, SexagenaryMoment, ZiHourMode, first_month_stem, moment_jd, sexagenary_moment,
    zi_hour_stem,
};
pub use solar_term::{
    ALL_TERMS, SolarTerm, apparent_solar_longitude, jie_on_or_before, next_jie_after,
    term_jd_beijing, term_on_or_before, terms_of_year, zhongqi_on_or_before,
};
