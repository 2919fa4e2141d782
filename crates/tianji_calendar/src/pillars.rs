//! Sexagenary pillar derivation: year, month, day, and hour pillars
//! from a civil moment.
//!
//! Year and month pillars switch exactly at solar-term boundaries
//! (立春 for the year, the twelve jie for the month), never at civil
//! ones. The day pillar honors the zi-hour policy, the hour pillar the
//! optional true-solar-time longitude correction.

use serde::{Deserialize, Serialize};

use tianji_base::{Branch, Stem, StemBranch};

use crate::civil::{ClockTime, SolarDate, civil_from_days, jd_beijing};
use crate::error::CalendarError;
use crate::lunar::{LunarDate, solar_to_lunar};
use crate::solar_term::{SolarTerm, jie_on_or_before, term_jd_beijing};

/// Policy for the 23:00-01:00 zi hour's day-pillar assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZiHourMode {
    /// 23:00-00:59 belongs to the next day's pillar (晚子时).
    #[default]
    Late,
    /// 23:00-23:59 stays with the current day's pillar (早子时).
    Early,
}

/// Options for pillar derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentOptions {
    pub zi_hour: ZiHourMode,
    /// Birthplace longitude in degrees east; when set, wall-clock time
    /// is corrected by (longitude − 120) × 4 minutes before hour
    /// derivation (120°E is the CST reference meridian).
    pub longitude: Option<f64>,
}

/// The sexagenary rendering of one civil moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexagenaryMoment {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    /// Absent when the birth hour is unknown.
    pub hour: Option<StemBranch>,
    /// The civil date after true-solar-time correction.
    pub solar: SolarDate,
    /// The clock time after true-solar-time correction.
    pub time: Option<ClockTime>,
    /// Lunisolar equivalent of the (corrected) civil date.
    pub lunar: LunarDate,
    /// The jie governing the month pillar.
    pub month_term: SolarTerm,
}

/// First month (寅) stem for a year stem, by the five-tigers rule
/// (甲己之年丙作首 …).
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    tianji_base::ALL_STEMS[(((year_stem.index() % 5) * 2 + 2) % 10) as usize]
}

/// Zi-hour stem for a day stem, by the five-rats rule (甲己还加甲 …).
pub const fn zi_hour_stem(day_stem: Stem) -> Stem {
    tianji_base::ALL_STEMS[((day_stem.index() % 5) * 2) as usize]
}

/// Derive the sexagenary pillars for a civil moment (Beijing wall
/// clock). `time == None` marks an unknown birth hour: the hour pillar
/// and every hour-dependent adjustment are skipped, and day-level
/// boundaries are judged at local noon.
pub fn sexagenary_moment(
    date: SolarDate,
    time: Option<ClockTime>,
    options: &MomentOptions,
) -> Result<SexagenaryMoment, CalendarError> {
    date.validate()?;
    if let Some(t) = time {
        t.validate()?;
    }
    if let Some(lon) = options.longitude {
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CalendarError::InvalidLongitude(lon));
        }
    }

    // true solar time: shift the wall clock, possibly across midnight
    let (date, time) = match (time, options.longitude) {
        (Some(t), Some(lon)) => {
            let correction = ((lon - 120.0) * 4.0).round() as i64;
            let total = date.day_number() * 1440 + t.minutes() + correction;
            let shifted = civil_from_days(total.div_euclid(1440));
            let minutes = total.rem_euclid(1440);
            (
                shifted,
                Some(ClockTime::new(
                    (minutes / 60) as u32,
                    (minutes % 60) as u32,
                )),
            )
        }
        _ => (date, time),
    };
    // a correction may step past the table edge
    if date.year < crate::civil::MIN_YEAR || date.year > crate::civil::MAX_YEAR {
        return Err(CalendarError::YearOutOfRange(date.year));
    }

    let minutes_of_day = time.map_or(720, |t| t.minutes());
    let jd = jd_beijing(date, minutes_of_day);

    // year pillar: 立春 boundary
    let mut pillar_year = date.year;
    if jd < term_jd_beijing(date.year, SolarTerm::LiChun) {
        pillar_year -= 1;
    }
    let year = StemBranch::from_offset(pillar_year as i64 - 1984);

    // month pillar: governing jie + five-tigers stem
    let (month_term, _) = jie_on_or_before(jd);
    let month_branch = month_term.month_branch();
    let months_from_yin = (month_branch.index() as i32 - 2).rem_euclid(12);
    let month_stem = first_month_stem(year.stem()).shift(months_from_yin);
    let month = StemBranch::from_parts(month_stem, month_branch)
        .expect("five-tigers stems preserve stem/branch parity");

    // day pillar: cycle anchor + zi-hour policy
    let mut day_index = date.sexagenary_day_index();
    if let Some(t) = time {
        if t.hour == 23 && options.zi_hour == ZiHourMode::Late {
            day_index += 1;
        }
    }
    let day = StemBranch::from_offset(day_index);

    // hour pillar: branch from the double-hour, stem by five rats
    let hour = time.map(|t| {
        let branch = Branch::from_clock_hour(t.hour);
        let stem = zi_hour_stem(day.stem()).shift(branch.index() as i32);
        StemBranch::from_parts(stem, branch)
            .expect("five-rats stems preserve stem/branch parity")
    });

    let lunar = solar_to_lunar(date)?;

    Ok(SexagenaryMoment {
        year,
        month,
        day,
        hour,
        solar: date,
        time,
        lunar,
        month_term,
    })
}

/// Beijing wall-clock JD of a derived moment (noon when hour unknown).
pub fn moment_jd(moment: &SexagenaryMoment) -> f64 {
    jd_beijing(moment.solar, moment.time.map_or(720, |t| t.minutes()))
}
