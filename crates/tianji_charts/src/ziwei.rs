//! Zi Wei Dou Shu calculator.
//!
//! Lunar conversion → 命宫/身宫 placement → five-element bureau → main
//! star placement from the 紫微/天府 series → auxiliary stars →
//! brightness → Four Transformations → decade-luck sequencing.

use tracing::debug;

use tianji_base::{Branch, StemBranch, nayin_element};
use tianji_calendar::{first_month_stem, lunar_day_name, lunar_month_name};

use crate::error::ChartError;
use crate::input::Gender;
use crate::ziwei_data::{
    BRIGHTNESS, MING_ZHU, SHEN_ZHU, SI_HUA_ORDER, SI_HUA_TABLE, aux_positions,
    bureau_from_element, tianfu_branch, ziwei_branch, ZIWEI_SERIES, TIANFU_SERIES,
};
use crate::ziwei_types::{
    DecadeLuck, PALACE_NAMES, PalaceStar, ZiweiAnalysisContext, ZiweiChart, ZiweiInput,
    ZiweiPalace,
};

/// Number of decade-luck spans generated.
const DECADE_COUNT: usize = 10;

/// Compute a complete Zi Wei chart.
pub fn calculate_ziwei(input: &ZiweiInput) -> Result<ZiweiChart, ChartError> {
    let moment = input.moment.resolve()?;
    let lunar = moment.lunar;
    debug!(step = "resolve_moment", lunar_month = lunar.month, lunar_day = lunar.day);

    let hour_branch = moment
        .hour
        .map(|h| h.branch())
        .unwrap_or(Branch::Zi);
    let m = lunar.month as i32 - 1;
    let h = hour_branch.index() as i32;

    // 寅起正月顺数到生月，逆数生时 → 命宫; 顺数生时 → 身宫
    let ming_branch = Branch::Yin.shift(m - h);
    let shen_branch = Branch::Yin.shift(m + h);
    debug!(step = "ming_shen_gong", ming = %ming_branch.name(), shen = %shen_branch.name());

    // palace stems by the five-tigers rule from the year stem
    let stem_for = |branch: Branch| {
        first_month_stem(moment.year.stem())
            .shift((branch.index() as i32 - 2).rem_euclid(12))
    };

    // bureau from the 命宫 NaYin element
    let ming_sb = StemBranch::from_parts(stem_for(ming_branch), ming_branch)
        .expect("five-tigers stems preserve stem/branch parity");
    let bureau = bureau_from_element(nayin_element(ming_sb));
    debug!(step = "bureau", bureau = bureau.name());

    // star placement onto the twelve branches
    let mut stars_by_branch: [Vec<PalaceStar>; 12] = Default::default();

    let ziwei = ziwei_branch(bureau.divisor(), lunar.day);
    let tianfu = tianfu_branch(ziwei);
    for &(star, offset) in ZIWEI_SERIES.iter() {
        place_main(&mut stars_by_branch, star, ziwei.shift(offset));
    }
    for &(star, offset) in TIANFU_SERIES.iter() {
        place_main(&mut stars_by_branch, star, tianfu.shift(offset));
    }
    debug!(step = "main_stars", ziwei = %ziwei.name(), tianfu = %tianfu.name());

    for (name, branch) in aux_positions(
        moment.year.stem(),
        moment.year.branch(),
        lunar.month,
        hour_branch,
    ) {
        stars_by_branch[branch.index() as usize].push(PalaceStar {
            name: name.to_string(),
            main: false,
            brightness: None,
            si_hua: None,
        });
    }
    debug!(step = "aux_stars");

    // Four Transformations from the year stem
    let transforms = SI_HUA_TABLE[moment.year.stem().index() as usize];
    for branch_stars in stars_by_branch.iter_mut() {
        for star in branch_stars.iter_mut() {
            if let Some(slot) = transforms.iter().position(|&n| n == star.name) {
                star.si_hua = Some(SI_HUA_ORDER[slot]);
            }
        }
    }
    debug!(step = "si_hua", year_stem = %moment.year.stem().name());

    // palaces walk counterclockwise from 命宫
    let palaces: Vec<ZiweiPalace> = (0..12)
        .map(|i| {
            let branch = ming_branch.shift(-(i as i32));
            ZiweiPalace {
                name: PALACE_NAMES[i].to_string(),
                stem: stem_for(branch),
                branch,
                stars: std::mem::take(&mut stars_by_branch[branch.index() as usize]),
                is_shen_gong: branch == shen_branch,
            }
        })
        .collect();

    // decade luck: start at the bureau divisor, direction by gender ×
    // year-stem polarity, stepping one palace per decade
    let forward = matches!(
        (input.gender, moment.year.stem().is_yang()),
        (Gender::Male, true) | (Gender::Female, false)
    );
    let start = bureau.divisor() as u32;
    let decade_luck: Vec<DecadeLuck> = (0..DECADE_COUNT)
        .map(|i| {
            let dir = if forward { 1 } else { -1 };
            DecadeLuck {
                palace_branch: ming_branch.shift(dir * i as i32),
                start_age: start + 10 * i as u32,
                end_age: start + 10 * i as u32 + 9,
            }
        })
        .collect();
    debug!(step = "decade_luck", forward, start_age = start);

    let lunar_text = format!(
        "农历{}年{}{} {}时",
        lunar.year,
        lunar_month_name(lunar.month, lunar.leap),
        lunar_day_name(lunar.day),
        hour_branch.name(),
    );

    Ok(ZiweiChart {
        palaces,
        bureau,
        ming_gong_branch: ming_branch,
        shen_gong_branch: shen_branch,
        ming_zhu: MING_ZHU[ming_branch.index() as usize].to_string(),
        shen_zhu: SHEN_ZHU[moment.year.branch().index() as usize].to_string(),
        decade_luck,
        lunar_text,
    })
}

fn place_main(
    stars_by_branch: &mut [Vec<PalaceStar>; 12],
    star: crate::ziwei_types::MainStar,
    branch: Branch,
) {
    stars_by_branch[branch.index() as usize].push(PalaceStar {
        name: star.name().to_string(),
        main: true,
        brightness: Some(
            BRIGHTNESS[star as u8 as usize][branch.index() as usize],
        ),
        si_hua: None,
    });
}

/// Flatten a chart into the plain-text summary the prompt layer reads.
pub fn extract_ziwei_analysis_context(chart: &ZiweiChart) -> ZiweiAnalysisContext {
    let birth = format!("生辰：{}", chart.lunar_text);
    let bureau = format!("五行局：{}", chart.bureau.name());
    let ming_gong = format!(
        "命宫在{}，身宫在{}，命主{}，身主{}",
        chart.ming_gong_branch.name(),
        chart.shen_gong_branch.name(),
        chart.ming_zhu,
        chart.shen_zhu,
    );

    let palaces = chart
        .palaces
        .iter()
        .map(|p| {
            let stars = if p.stars.is_empty() {
                "无主星".to_string()
            } else {
                p.stars
                    .iter()
                    .map(|s| {
                        let mut text = s.name.clone();
                        if let Some(b) = s.brightness {
                            text.push_str(b.name());
                        }
                        if let Some(t) = s.si_hua {
                            text.push_str(t.name());
                        }
                        text
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            let shen = if p.is_shen_gong { "（身宫）" } else { "" };
            format!("{}{}（{}{}）：{}", p.name, shen, p.stem.name(), p.branch.name(), stars)
        })
        .collect();

    let si_hua = {
        let mut parts = Vec::new();
        for p in &chart.palaces {
            for s in &p.stars {
                if let Some(t) = s.si_hua {
                    parts.push(format!("{}{}在{}", s.name, t.name(), p.name));
                }
            }
        }
        format!("四化：{}", parts.join(" "))
    };

    let decade_luck = format!(
        "大限：{}",
        chart
            .decade_luck
            .iter()
            .take(4)
            .map(|d| format!("{}宫{}-{}岁", d.palace_branch.name(), d.start_age, d.end_age))
            .collect::<Vec<_>>()
            .join(" "),
    );

    ZiweiAnalysisContext {
        birth,
        bureau,
        ming_gong,
        palaces,
        si_hua,
        decade_luck,
    }
}
