//! The 24 solar terms (节气) and their exact boundary instants.
//!
//! Term instants come from a truncated series for the Sun's apparent
//! ecliptic longitude (good to ~0.01°, i.e. a few minutes of time)
//! refined by bisection on the longitude crossing, the same search
//! shape as any solar-ingress computation. All public instants are
//! Beijing wall-clock Julian Dates (UTC+8), matching the civil inputs
//! the engine receives.

use serde::{Deserialize, Serialize};

use tianji_base::Branch;

use crate::civil::{SolarDate, jd_utc_from_beijing};

/// The 24 solar terms, starting from 立春 (apparent solar longitude
/// 315°) and stepping 15° per term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SolarTerm {
    LiChun = 0,
    YuShui = 1,
    JingZhe = 2,
    ChunFen = 3,
    QingMing = 4,
    GuYu = 5,
    LiXia = 6,
    XiaoMan = 7,
    MangZhong = 8,
    XiaZhi = 9,
    XiaoShu = 10,
    DaShu = 11,
    LiQiu = 12,
    ChuShu = 13,
    BaiLu = 14,
    QiuFen = 15,
    HanLu = 16,
    ShuangJiang = 17,
    LiDong = 18,
    XiaoXue = 19,
    DaXue = 20,
    DongZhi = 21,
    XiaoHan = 22,
    DaHan = 23,
}

/// All 24 terms in longitude order (立春 first).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

impl SolarTerm {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_TERMS.len() {
            Some(ALL_TERMS[v as usize])
        } else {
            None
        }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
        }
    }

    /// Jie (节, month-opening) terms sit at even indices; the odd ones
    /// are the mid-month zhongqi (中气).
    pub const fn is_jie(self) -> bool {
        self as u8 % 2 == 0
    }

    /// Apparent solar longitude at which this term begins.
    pub const fn target_longitude(self) -> f64 {
        ((315 + 15 * self as u8 as u32) % 360) as f64
    }

    /// Month branch opened by a jie term (立春→寅 … 小寒→丑).
    /// Zhongqi terms return the branch of the month they fall in.
    pub const fn month_branch(self) -> Branch {
        let jie_ordinal = self as u8 / 2;
        tianji_base::ALL_BRANCHES[((2 + jie_ordinal) % 12) as usize]
    }
}

/// Normalize an angle difference into (-180, 180].
fn normalize_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Apparent geocentric solar longitude in degrees [0, 360).
///
/// Truncated series (mean longitude + equation of center + nutation and
/// aberration correction), accurate to about 0.01° over 1900-2100.
pub fn apparent_solar_longitude(jd_utc: f64) -> f64 {
    let t = (jd_utc - 2451545.0) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = l0 + c - 0.00569 - 0.00478 * omega.sin();
    apparent.rem_euclid(360.0)
}

/// Approximate day-of-year a term falls on, for search bracketing.
fn approximate_day_of_year(term: SolarTerm) -> f64 {
    // civil-order position: 小寒 opens the civil year around Jan 5
    let civil_position = (term as u8 + 2) % 24;
    5.0 + 15.22 * civil_position as f64
}

/// Exact instant of a term in a given civil year, as a Beijing
/// wall-clock Julian Date.
pub fn term_jd_beijing(year: i32, term: SolarTerm) -> f64 {
    let target = term.target_longitude();
    let guess = jd_utc_from_beijing(SolarDate::new(year, 1, 1), 0)
        + approximate_day_of_year(term)
        - 1.0;

    // walk forward from well before the guess until the longitude
    // difference crosses zero ascending, then bisect
    let mut lo = guess - 16.0;
    let mut f_lo = normalize_pm180(apparent_solar_longitude(lo) - target);
    let mut hi = lo;
    loop {
        hi += 1.0;
        let f_hi = normalize_pm180(apparent_solar_longitude(hi) - target);
        if f_lo < 0.0 && f_hi >= 0.0 {
            break;
        }
        lo = hi;
        f_lo = f_hi;
        debug_assert!(hi < guess + 32.0, "term bracket search ran away");
    }
    for _ in 0..40 {
        let mid = (lo + hi) / 2.0;
        if normalize_pm180(apparent_solar_longitude(mid) - target) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0 + 8.0 / 24.0
}

/// The 24 terms of a civil year in time order (小寒 first), with their
/// Beijing instants.
pub fn terms_of_year(year: i32) -> [(SolarTerm, f64); 24] {
    let mut out = [(SolarTerm::XiaoHan, 0.0); 24];
    for (i, slot) in out.iter_mut().enumerate() {
        let term = ALL_TERMS[(i + 22) % 24];
        *slot = (term, term_jd_beijing(year, term));
    }
    out
}

/// Most recent term boundary at or before a Beijing instant.
pub fn term_on_or_before(jd_beijing: f64) -> (SolarTerm, f64) {
    let year = crate::civil::civil_from_days((jd_beijing - 2440587.5).floor() as i64).year;
    for y in [year + 1, year, year - 1] {
        let terms = terms_of_year(y);
        for &(term, jd) in terms.iter().rev() {
            if jd <= jd_beijing {
                return (term, jd);
            }
        }
    }
    unreachable!("a term boundary always exists within the previous year")
}

/// Most recent jie (month-opening) boundary at or before an instant.
pub fn jie_on_or_before(jd_beijing: f64) -> (SolarTerm, f64) {
    let year = crate::civil::civil_from_days((jd_beijing - 2440587.5).floor() as i64).year;
    for y in [year + 1, year, year - 1] {
        let terms = terms_of_year(y);
        for &(term, jd) in terms.iter().rev() {
            if term.is_jie() && jd <= jd_beijing {
                return (term, jd);
            }
        }
    }
    unreachable!("a jie boundary always exists within the previous year")
}

/// Next jie (month-opening) boundary strictly after an instant.
pub fn next_jie_after(jd_beijing: f64) -> (SolarTerm, f64) {
    let year = crate::civil::civil_from_days((jd_beijing - 2440587.5).floor() as i64).year;
    for y in [year - 1, year, year + 1] {
        let terms = terms_of_year(y);
        for &(term, jd) in terms.iter() {
            if term.is_jie() && jd > jd_beijing {
                return (term, jd);
            }
        }
    }
    unreachable!("a jie boundary always exists within the following year")
}

/// Most recent zhongqi (中气) boundary at or before an instant.
pub fn zhongqi_on_or_before(jd_beijing: f64) -> (SolarTerm, f64) {
    let year = crate::civil::civil_from_days((jd_beijing - 2440587.5).floor() as i64).year;
    for y in [year + 1, year, year - 1] {
        let terms = terms_of_year(y);
        for &(term, jd) in terms.iter().rev() {
            if !term.is_jie() && jd <= jd_beijing {
                return (term, jd);
            }
        }
    }
    unreachable!("a zhongqi boundary always exists within the previous year")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::{civil_from_days, jd_beijing};

    fn beijing_date_of(jd_beijing: f64) -> SolarDate {
        civil_from_days((jd_beijing - 2440587.5).floor() as i64)
    }

    #[test]
    fn term_longitudes() {
        assert_eq!(SolarTerm::LiChun.target_longitude(), 315.0);
        assert_eq!(SolarTerm::ChunFen.target_longitude(), 0.0);
        assert_eq!(SolarTerm::XiaZhi.target_longitude(), 90.0);
        assert_eq!(SolarTerm::DongZhi.target_longitude(), 270.0);
    }

    #[test]
    fn jie_month_branches() {
        use tianji_base::Branch;
        assert_eq!(SolarTerm::LiChun.month_branch(), Branch::Yin);
        assert_eq!(SolarTerm::MangZhong.month_branch(), Branch::Wu);
        assert_eq!(SolarTerm::DaXue.month_branch(), Branch::Zi);
        assert_eq!(SolarTerm::XiaoHan.month_branch(), Branch::Chou);
    }

    #[test]
    fn known_term_dates() {
        for &(y, term, month, day) in &[
            (2000, SolarTerm::LiChun, 2, 4),
            (2000, SolarTerm::XiaZhi, 6, 21),
            (2000, SolarTerm::DongZhi, 12, 21),
            (2008, SolarTerm::QingMing, 4, 4),
            (1986, SolarTerm::LiXia, 5, 6),
            (2023, SolarTerm::DongZhi, 12, 22),
            (1900, SolarTerm::LiChun, 2, 4),
            (2100, SolarTerm::LiChun, 2, 3),
        ] {
            let jd = term_jd_beijing(y, term);
            let date = beijing_date_of(jd);
            assert_eq!(
                (date.month, date.day),
                (month, day),
                "{} {} expected {month}-{day} got {}-{}",
                y,
                term.name(),
                date.month,
                date.day
            );
        }
    }

    #[test]
    fn lichun_2000_falls_in_the_evening() {
        // 2000-02-04 ~20:3x Beijing
        let jd = term_jd_beijing(2000, SolarTerm::LiChun);
        let date = beijing_date_of(jd);
        assert_eq!((date.year, date.month, date.day), (2000, 2, 4));
        let frac = jd - 2440587.5 - date.day_number() as f64;
        let hours = frac * 24.0;
        assert!(
            (19.5..21.0).contains(&hours),
            "Li Chun 2000 at {hours:.2}h Beijing"
        );
    }

    #[test]
    fn terms_of_year_are_time_ordered() {
        let terms = terms_of_year(2024);
        for pair in terms.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
        assert_eq!(terms[0].0, SolarTerm::XiaoHan);
        assert_eq!(terms[23].0, SolarTerm::DongZhi);
    }

    #[test]
    fn boundary_queries_agree() {
        // mid-May 1986: governed by 立夏, next jie is 芒种
        let jd = jd_beijing(SolarDate::new(1986, 5, 29), 0);
        let (jie, jie_jd) = jie_on_or_before(jd);
        assert_eq!(jie, SolarTerm::LiXia);
        assert!(jie_jd <= jd);
        let (next, next_jd) = next_jie_after(jd);
        assert_eq!(next, SolarTerm::MangZhong);
        assert!(next_jd > jd);
    }

    #[test]
    fn early_january_is_zi_month() {
        // Jan 2 sits before 小寒: governing jie is the previous year's 大雪
        let jd = jd_beijing(SolarDate::new(2001, 1, 2), 720);
        let (jie, _) = jie_on_or_before(jd);
        assert_eq!(jie, SolarTerm::DaXue);
    }
}
