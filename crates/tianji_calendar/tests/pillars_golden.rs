//! Golden-value integration tests for pillar derivation: solar-term
//! boundaries, zi-hour policy, true solar time, and cycle continuity.

use tianji_calendar::{
    ClockTime, MomentOptions, SolarDate, SolarTerm, ZiHourMode, sexagenary_moment,
    term_jd_beijing,
};

fn pillars_at(
    date: (i32, u32, u32),
    time: (u32, u32),
) -> tianji_calendar::SexagenaryMoment {
    sexagenary_moment(
        SolarDate::new(date.0, date.1, date.2),
        Some(ClockTime::new(time.0, time.1)),
        &MomentOptions::default(),
    )
    .unwrap()
}

#[test]
fn jiazi_years_recur_every_sixty() {
    for year in [1924, 1984, 2044] {
        let m = pillars_at((year, 6, 1), (12, 0));
        assert_eq!(m.year.name(), "甲子", "mid-{year}");
    }
}

#[test]
fn year_pillar_flips_exactly_at_lichun() {
    // Li Chun 2000 fell in the evening of February 4
    assert_eq!(pillars_at((2000, 2, 4), (8, 0)).year.name(), "己卯");
    assert_eq!(pillars_at((2000, 2, 4), (21, 0)).year.name(), "庚辰");
    // and Jan 1 never flips it
    assert_eq!(pillars_at((2000, 1, 1), (12, 0)).year.name(), "己卯");
}

#[test]
fn month_pillar_flips_at_the_jie_not_the_civil_month() {
    // 芒种 2024 falls on June 5: May 31 and June 1 share the 巳 month
    let before = pillars_at((2024, 6, 1), (0, 0));
    let after = pillars_at((2024, 6, 10), (0, 0));
    assert_eq!(before.month_term, SolarTerm::LiXia);
    assert_eq!(after.month_term, SolarTerm::MangZhong);
    assert_eq!(
        before.month.branch().shift(1),
        after.month.branch(),
        "consecutive solar months"
    );
    assert_eq!(
        pillars_at((2024, 5, 31), (0, 0)).month,
        before.month,
        "civil month boundary does not move the pillar"
    );
}

#[test]
fn day_cycle_is_continuous_across_boundaries() {
    // month, year, and century boundaries all step the cycle by one
    for (a, b) in [
        ((1999, 12, 31), (2000, 1, 1)),
        ((2000, 2, 28), (2000, 2, 29)),
        ((2000, 2, 29), (2000, 3, 1)),
        ((2099, 12, 31), (2100, 1, 1)),
    ] {
        let first = pillars_at(a, (12, 0));
        let second = pillars_at(b, (12, 0));
        assert_eq!(first.day.shift(1), second.day, "{a:?} -> {b:?}");
    }
}

#[test]
fn stem_branch_parity_holds_across_the_range() {
    // sample the full supported range on a coarse grid
    let mut day_number = SolarDate::new(1900, 1, 15).day_number();
    let last = SolarDate::new(2100, 12, 15).day_number();
    while day_number <= last {
        let date = tianji_calendar::civil_from_days(day_number);
        let m = sexagenary_moment(
            date,
            Some(ClockTime::new(13, 30)),
            &MomentOptions::default(),
        )
        .unwrap();
        for sb in [m.year, m.month, m.day, m.hour.unwrap()] {
            assert_eq!(
                sb.stem().is_yang(),
                sb.branch().is_yang(),
                "parity at {date:?}"
            );
        }
        day_number += 997;
    }
}

#[test]
fn zi_hour_policy_changes_only_the_late_evening() {
    let late = MomentOptions::default();
    let early = MomentOptions {
        zi_hour: ZiHourMode::Early,
        ..MomentOptions::default()
    };
    let date = SolarDate::new(2010, 3, 8);

    let at = |time: (u32, u32), options: &MomentOptions| {
        sexagenary_moment(date, Some(ClockTime::new(time.0, time.1)), options).unwrap()
    };
    // 23:30: modes disagree on the day pillar, agree on the hour branch
    let a = at((23, 30), &late);
    let b = at((23, 30), &early);
    assert_ne!(a.day, b.day);
    assert_eq!(a.hour.unwrap().branch(), b.hour.unwrap().branch());
    // 14:00: identical
    assert_eq!(at((14, 0), &late).day, at((14, 0), &early).day);
}

#[test]
fn true_solar_time_only_matters_far_from_the_meridian() {
    let at = |longitude: Option<f64>| {
        sexagenary_moment(
            SolarDate::new(1992, 9, 20),
            Some(ClockTime::new(10, 0)),
            &MomentOptions {
                longitude,
                ..MomentOptions::default()
            },
        )
        .unwrap()
        .hour
        .unwrap()
    };
    let plain = at(None);
    // near the 120°E reference the hour pillar is unchanged
    assert_eq!(at(Some(116.4)), plain);
    // far west the correction crosses a double-hour boundary
    assert_ne!(at(Some(87.6)), plain);
}

#[test]
fn lichun_instants_stay_in_early_february_across_the_range() {
    for year in (1900..=2100).step_by(20) {
        let jd = term_jd_beijing(year, SolarTerm::LiChun);
        let date = tianji_calendar::civil_from_days((jd - 2440587.5).floor() as i64);
        assert_eq!(date.month, 2, "Li Chun {year}");
        assert!((3..=5).contains(&date.day), "Li Chun {year} on day {}", date.day);
    }
}
