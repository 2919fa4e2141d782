//! BaZi (Four Pillars) calculator.
//!
//! A single-pass pipeline over the sexagenary moment: pillars with
//! derived attributes, Ten Gods (with an independent cross-check),
//! five-element distribution, palaces, ShenSha stars, pattern, and the
//! DaYun/LiuNian fortune cycles.

use tracing::debug;

use tianji_base::{
    Branch, Stem, StemBranch, WuXing, hidden_stems, nayin_name,
};
use tianji_calendar::{
    SexagenaryMoment, jie_on_or_before, lunar_day_name, lunar_month_name, moment_jd,
    next_jie_after,
};

use crate::bazi_data::{
    self, TEN_GOD_TABLE, life_stage,
};
use crate::bazi_types::{
    BaziAnalysisContext, BaziChart, BaziInput, DaYunCycle, FiveElementCount, FourPillarGods,
    FourPillars, HiddenGod, LiuNianFortune, Palace, PalaceKind, Pillar, PillarGods, ShenSha,
    TenGod, YunInfo,
};
use crate::error::ChartError;
use crate::input::Gender;

/// Days of solar-term distance per year of fortune-cycle start age.
const YUN_DAYS_PER_YEAR: f64 = 3.0;

/// Number of DaYun cycles generated.
const YUN_CYCLES: usize = 8;

/// Compute a complete BaZi chart.
pub fn calculate_bazi(input: &BaziInput) -> Result<BaziChart, ChartError> {
    let moment = input.moment.resolve()?;
    debug!(step = "resolve_moment", year = %moment.year.name(), day = %moment.day.name());

    let day_master = moment.day.stem();
    let pillars = FourPillars {
        year: build_pillar(moment.year, day_master),
        month: build_pillar(moment.month, day_master),
        day: build_pillar(moment.day, day_master),
        hour: moment.hour.map(|h| build_pillar(h, day_master)),
    };
    debug!(step = "build_pillars", hour_known = pillars.hour.is_some());

    let five_elements = tally_five_elements(&pillars);
    debug!(step = "five_element_distribution", total = five_elements.total());

    let gods = FourPillarGods {
        year: pillar_gods(&pillars.year, day_master, false),
        month: pillar_gods(&pillars.month, day_master, false),
        day: pillar_gods(&pillars.day, day_master, true),
        hour: pillars.hour.as_ref().map(|p| pillar_gods(p, day_master, false)),
    };
    cross_check_ten_gods(&gods, day_master);

    let day_master_strong = day_master_is_strong(day_master, &five_elements);
    let ming_ge = determine_ming_ge(day_master, &pillars.month);
    debug!(step = "ming_ge", pattern = %ming_ge, strong = day_master_strong);

    let (ming_gong, shen_gong) = derive_ming_shen_gong(&moment);
    let tai_yuan = palace(
        PalaceKind::TaiYuan,
        StemBranch::from_parts(
            moment.month.stem().shift(1),
            moment.month.branch().shift(3),
        )
        .expect("one stem and three branch steps preserve parity"),
    );
    let tai_xi = palace(
        PalaceKind::TaiXi,
        StemBranch::from_parts(moment.day.stem().combine(), moment.day.branch().combine())
            .expect("stem and branch combination partners preserve parity"),
    );
    debug!(step = "palaces", tai_yuan = %tai_yuan.stem_branch.name());

    let shen_sha = extract_shen_sha(&moment);
    debug!(step = "shen_sha", count = shen_sha.len());

    let yun = compute_yun(&moment, input.gender);
    debug!(step = "yun", start_age = yun.start_age, forward = yun.forward);

    let lunar_text = format!(
        "农历{}年{}{}",
        moment.lunar.year,
        lunar_month_name(moment.lunar.month, moment.lunar.leap),
        lunar_day_name(moment.lunar.day),
    );

    Ok(BaziChart {
        pillars,
        day_master,
        gods,
        five_elements,
        ming_gong,
        shen_gong,
        tai_yuan,
        tai_xi,
        shen_sha,
        ming_ge,
        day_master_strong,
        yun,
        lunar_text,
    })
}

fn build_pillar(sb: StemBranch, day_master: Stem) -> Pillar {
    Pillar {
        stem_branch: sb,
        stem_element: sb.stem().element(),
        stem_yang: sb.stem().is_yang(),
        branch_element: sb.branch().element(),
        hidden_stems: hidden_stems(sb.branch()).to_vec(),
        nayin: nayin_name(sb).to_string(),
        dishi: life_stage(day_master, sb.branch()),
        xun: sb.xun_head().name(),
        xun_kong: sb.xun_kong(),
    }
}

fn tally_five_elements(pillars: &FourPillars) -> FiveElementCount {
    let mut count = FiveElementCount::default();
    let mut tally = |p: &Pillar| {
        count.add(p.stem_element);
        count.add(p.branch_element);
        for &h in &p.hidden_stems {
            count.add(h.element());
        }
    };
    tally(&pillars.year);
    tally(&pillars.month);
    tally(&pillars.day);
    if let Some(h) = &pillars.hour {
        tally(h);
    }
    count
}

fn pillar_gods(pillar: &Pillar, day_master: Stem, is_day_pillar: bool) -> PillarGods {
    PillarGods {
        stem_god: if is_day_pillar {
            None
        } else {
            Some(TenGod::classify(day_master, pillar.stem_branch.stem()))
        },
        hidden_gods: pillar
            .hidden_stems
            .iter()
            .map(|&stem| HiddenGod {
                stem,
                god: TenGod::classify(day_master, stem),
            })
            .collect(),
    }
}

/// Re-derive every Ten-God label through the pair table and compare
/// with the cycle-arithmetic classification. A divergence would mean a
/// defect in one of the two encodings.
fn cross_check_ten_gods(gods: &FourPillarGods, day_master: Stem) {
    let mut checked = 0usize;
    let mut verify = |g: &PillarGods| {
        for h in &g.hidden_gods {
            let from_table =
                TEN_GOD_TABLE[day_master.index() as usize][h.stem.index() as usize];
            debug_assert_eq!(from_table, h.god, "ten-god table drift on {}", h.stem.name());
            checked += 1;
        }
    };
    verify(&gods.year);
    verify(&gods.month);
    verify(&gods.day);
    if let Some(h) = &gods.hour {
        verify(h);
    }
    debug!(step = "shishen_cross_check", labels_checked = checked, consistent = true);
}

fn day_master_is_strong(day_master: Stem, counts: &FiveElementCount) -> bool {
    let element = day_master.element();
    let supports = counts.get(element)
        + counts.get(match element {
            WuXing::Wood => WuXing::Water,
            WuXing::Fire => WuXing::Wood,
            WuXing::Earth => WuXing::Fire,
            WuXing::Metal => WuXing::Earth,
            WuXing::Water => WuXing::Metal,
        });
    2 * supports >= counts.total()
}

/// Pattern (命格) from the month branch's primary qi.
fn determine_ming_ge(day_master: Stem, month: &Pillar) -> String {
    let primary = month.hidden_stems[0];
    match TenGod::classify(day_master, primary) {
        TenGod::BiJian => "建禄格".to_string(),
        TenGod::JieCai => "羊刃格".to_string(),
        god => format!("{}格", god.name()),
    }
}

fn palace(kind: PalaceKind, sb: StemBranch) -> Palace {
    Palace {
        kind,
        stem_branch: sb,
        nayin: nayin_name(sb).to_string(),
    }
}

/// 命宫 and 身宫 from month and hour branches; stems by the five-tigers
/// rule from the year stem. Both need the birth hour.
fn derive_ming_shen_gong(moment: &SexagenaryMoment) -> (Option<Palace>, Option<Palace>) {
    let Some(hour) = moment.hour else {
        return (None, None);
    };
    let mb = moment.month.branch().index() as i32;
    let hb = hour.branch().index() as i32;
    let ming_branch = Branch::from_u8((3 - mb - hb).rem_euclid(12) as u8)
        .expect("rem_euclid(12) yields a branch index");
    let shen_branch = Branch::from_u8(((mb + hb) % 12) as u8)
        .expect("mod 12 yields a branch index");

    let stem_for = |branch: Branch| {
        let months_from_yin = (branch.index() as i32 - 2).rem_euclid(12);
        tianji_calendar::first_month_stem(moment.year.stem()).shift(months_from_yin)
    };
    let make = |kind, branch: Branch| {
        palace(
            kind,
            StemBranch::from_parts(stem_for(branch), branch)
                .expect("five-tigers stems preserve stem/branch parity"),
        )
    };
    (
        Some(make(PalaceKind::MingGong, ming_branch)),
        Some(make(PalaceKind::ShenGong, shen_branch)),
    )
}

/// Evaluate the fixed ShenSha battery against the chart's branches.
fn extract_shen_sha(moment: &SexagenaryMoment) -> Vec<ShenSha> {
    let day_stem = moment.day.stem();
    let day_branch = moment.day.branch();
    let year_branch = moment.year.branch();

    let mut branches = vec![year_branch, moment.month.branch(), day_branch];
    if let Some(h) = moment.hour {
        branches.push(h.branch());
    }
    let other_branches: Vec<Branch> = branches
        .iter()
        .copied()
        .filter(|&b| b != day_branch)
        .collect();

    let mut stars = Vec::new();
    let mut push = |present: bool, name: &str, auspicious: bool| {
        if present {
            stars.push(ShenSha {
                name: name.to_string(),
                auspicious,
            });
        }
    };

    let gui_ren = bazi_data::TIAN_YI_GUI_REN[day_stem.index() as usize];
    push(
        branches.iter().any(|b| gui_ren.contains(b)),
        "天乙贵人",
        true,
    );
    push(
        branches.contains(&bazi_data::WEN_CHANG[day_stem.index() as usize]),
        "文昌贵人",
        true,
    );
    push(
        branches.contains(&bazi_data::LU_SHEN[day_stem.index() as usize]),
        "禄神",
        true,
    );
    push(
        branches.contains(&bazi_data::jin_yu(day_stem)),
        "金舆",
        true,
    );
    if let Some(ren) = bazi_data::yang_ren(day_stem) {
        push(branches.contains(&ren), "羊刃", false);
    }
    push(
        other_branches.contains(&bazi_data::tao_hua(day_branch)),
        "桃花",
        false,
    );
    push(
        other_branches.contains(&day_branch.post_horse()),
        "驿马",
        true,
    );
    push(
        other_branches.contains(&bazi_data::jiang_xing(day_branch)),
        "将星",
        true,
    );
    push(
        branches.contains(&bazi_data::hua_gai(day_branch)),
        "华盖",
        false,
    );
    push(
        branches.contains(&bazi_data::jie_sha(day_branch)),
        "劫煞",
        false,
    );
    let (gu_chen, gua_su) = bazi_data::gu_chen_gua_su(year_branch);
    push(branches.contains(&gu_chen), "孤辰", false);
    push(branches.contains(&gua_su), "寡宿", false);

    stars
}

/// Fortune cycles: start age from solar-term distance, direction from
/// gender × year-stem polarity, then a ten-year walk of the cycle from
/// the month pillar and the parallel annual sequence.
fn compute_yun(moment: &SexagenaryMoment, gender: Gender) -> YunInfo {
    let forward = matches!(
        (gender, moment.year.stem().is_yang()),
        (Gender::Male, true) | (Gender::Female, false)
    );

    let jd = moment_jd(moment);
    let days = if forward {
        let (_, next_jd) = next_jie_after(jd);
        next_jd - jd
    } else {
        let (_, prev_jd) = jie_on_or_before(jd);
        jd - prev_jd
    };
    let start_age = ((days / YUN_DAYS_PER_YEAR).round() as u32).max(1);

    let birth_year = moment.solar.year;
    let step: i64 = if forward { 1 } else { -1 };
    let cycles: Vec<DaYunCycle> = (0..YUN_CYCLES)
        .map(|i| {
            let cycle_start = start_age + 10 * i as u32;
            DaYunCycle {
                stem_branch: moment.month.shift(step * (i as i64 + 1)),
                start_age: cycle_start,
                end_age: cycle_start + 9,
                start_year: birth_year + cycle_start as i32,
                end_year: birth_year + cycle_start as i32 + 9,
            }
        })
        .collect();

    let first_year = cycles.first().map(|c| c.start_year).unwrap_or(birth_year);
    let last_year = cycles.last().map(|c| c.end_year).unwrap_or(birth_year);
    let annual: Vec<LiuNianFortune> = (first_year..=last_year)
        .map(|year| {
            let sb = StemBranch::from_offset(year as i64 - 1984);
            LiuNianFortune {
                year,
                age: (year - birth_year + 1) as u32,
                stem_branch: sb,
                nayin: nayin_name(sb).to_string(),
            }
        })
        .collect();

    YunInfo {
        start_age,
        forward,
        cycles,
        annual,
    }
}

/// Flatten a chart into the plain-text summary the prompt layer reads.
pub fn extract_bazi_analysis_context(chart: &BaziChart) -> BaziAnalysisContext {
    let hour_text = chart
        .pillars
        .hour
        .as_ref()
        .map(|h| format!(" {}时", h.stem_branch.name()))
        .unwrap_or_default();
    let pillars = format!(
        "四柱：{}年 {}月 {}日{}（{}）",
        chart.pillars.year.stem_branch.name(),
        chart.pillars.month.stem_branch.name(),
        chart.pillars.day.stem_branch.name(),
        hour_text,
        chart.lunar_text,
    );

    let day_master = format!(
        "日主{}{}（{}），{}",
        chart.day_master.name(),
        chart.day_master.element().name(),
        chart.day_master.polarity_name(),
        if chart.day_master_strong { "身强" } else { "身弱" },
    );

    let five_elements = format!(
        "五行分布：木{} 火{} 土{} 金{} 水{}",
        chart.five_elements.wood,
        chart.five_elements.fire,
        chart.five_elements.earth,
        chart.five_elements.metal,
        chart.five_elements.water,
    );

    let god_name = |g: &Option<TenGod>| g.map(|g| g.name()).unwrap_or("日主");
    let mut shi_shen = format!(
        "十神：年干{} 月干{} 日干{}",
        god_name(&chart.gods.year.stem_god),
        god_name(&chart.gods.month.stem_god),
        god_name(&chart.gods.day.stem_god),
    );
    if let Some(h) = &chart.gods.hour {
        shi_shen.push_str(&format!(" 时干{}", god_name(&h.stem_god)));
    }

    let mut palace_parts = Vec::new();
    for p in [&chart.ming_gong, &chart.shen_gong]
        .into_iter()
        .flatten()
        .chain([&chart.tai_yuan, &chart.tai_xi])
    {
        palace_parts.push(format!(
            "{}{}（{}）",
            p.kind.name(),
            p.stem_branch.name(),
            p.nayin
        ));
    }
    let palaces = palace_parts.join(" ");

    let shen_sha = if chart.shen_sha.is_empty() {
        "神煞：无".to_string()
    } else {
        format!(
            "神煞：{}",
            chart
                .shen_sha
                .iter()
                .map(|s| format!(
                    "{}（{}）",
                    s.name,
                    if s.auspicious { "吉神" } else { "凶煞" }
                ))
                .collect::<Vec<_>>()
                .join(" ")
        )
    };

    let ming_ge = format!("命格：{}", chart.ming_ge);

    let yun = format!(
        "大运：{}岁起运，{}行；{}",
        chart.yun.start_age,
        if chart.yun.forward { "顺" } else { "逆" },
        chart
            .yun
            .cycles
            .iter()
            .take(4)
            .map(|c| format!("{}({}-{}岁)", c.stem_branch.name(), c.start_age, c.end_age))
            .collect::<Vec<_>>()
            .join(" "),
    );

    BaziAnalysisContext {
        pillars,
        day_master,
        five_elements,
        shi_shen,
        palaces,
        shen_sha,
        ming_ge,
        yun,
    }
}
