//! Qi Men Dun Jia calculator (rotating-plate school, hour charts).
//!
//! Solar term → Dun type and Ju → Yuan from the day pillar's quindecad
//! → earth plate → 值符/值使 from the hour decade's hidden yi stem →
//! heaven plate and gate rotation → Eight Deities → pattern detection.

use tracing::debug;

use tianji_base::{Stem, StemBranch};
use tianji_calendar::{moment_jd, term_on_or_before};

use crate::error::ChartError;
use crate::qimen_data::{
    EARTH_SEQUENCE, ORIGINAL_GATES, ORIGINAL_STARS, PALACE_DIRECTIONS, PALACE_TRIGRAMS, RING,
    XUN_YI, step_palace, stem_pair_pattern, term_ju,
};
use crate::qimen_types::{
    Deity, DunType, Gate, QimenAnalysisContext, QimenBoard, QimenInput, QimenPalace,
};

/// The eight deities in placement order.
const DEITIES: [Deity; 8] = [
    Deity::ZhiFu,
    Deity::TengShe,
    Deity::TaiYin,
    Deity::LiuHe,
    Deity::BaiHu,
    Deity::XuanWu,
    Deity::JiuDi,
    Deity::JiuTian,
];

/// Compute a complete Qi Men board for the hour of the moment.
pub fn calculate_qimen(input: &QimenInput) -> Result<QimenBoard, ChartError> {
    let moment = input.moment.resolve()?;
    let hour = moment.hour.unwrap_or_else(|| {
        // unknown hour: the 子 hour of the day
        StemBranch::from_parts(
            tianji_calendar::zi_hour_stem(moment.day.stem()),
            tianji_base::Branch::Zi,
        )
        .expect("five-rats stems preserve stem/branch parity")
    });

    // solar term → dun type and the three Yuan Ju numbers
    let (term, _) = term_on_or_before(moment_jd(&moment));
    let (dun, jus) = term_ju(term);

    // Yuan from the day pillar's position in its quindecad
    let yuan_index = (moment.day.index() % 15) / 5;
    let ju = jus[yuan_index as usize];
    let yuan = ["上元", "中元", "下元"][yuan_index as usize];
    debug!(step = "ju", term = term.name(), dun = dun.name(), ju, yuan);

    // hour decade head and its hidden yi stem
    let xun_head = hour.xun_head();
    let xun_yi = XUN_YI[(xun_head.index() / 10) as usize];
    let xun_kong = hour.xun_kong();
    debug!(step = "xun_shou", head = %xun_head.name(), yi = xun_yi.name());

    // earth plate: walk the yi/qi sequence from the Ju palace
    let direction: i32 = match dun {
        DunType::Yang => 1,
        DunType::Yin => -1,
    };
    let mut earth_stems = [Stem::Wu; 9];
    for (i, &stem) in EARTH_SEQUENCE.iter().enumerate() {
        let palace = step_palace(ju, direction * i as i32);
        earth_stems[(palace - 1) as usize] = stem;
    }
    let palace_of_stem = |stem: Stem| -> u8 {
        earth_stems
            .iter()
            .position(|&s| s == stem)
            .map(|i| i as u8 + 1)
            .expect("earth plate holds every non-甲 stem")
    };

    // duty star and duty gate sit where the hidden yi stem fell
    let fu_home = palace_of_stem(xun_yi);
    let zhi_fu = ORIGINAL_STARS[(fu_home - 1) as usize];
    let zhi_shi = ORIGINAL_GATES[(fu_home - 1) as usize].unwrap_or(Gate::Death);
    debug!(step = "duty", zhi_fu = zhi_fu.name(), zhi_shi = zhi_shi.name());

    // heaven plate: the duty star flies to the hour stem's earth palace
    let hour_stem = if hour.stem() == Stem::Jia {
        xun_yi
    } else {
        hour.stem()
    };
    let target = fold_center(palace_of_stem(hour_stem));
    let fu_ring_home = ring_index(fold_center(fu_home));
    let fu_ring_target = ring_index(target);
    let star_shift = fu_ring_target as i32 - fu_ring_home as i32;

    let mut stars = [None; 9];
    let mut heaven_stems = [None; 9];
    for k in 0..8 {
        let home_palace = RING[k];
        let landed = RING[(k as i32 + star_shift).rem_euclid(8) as usize];
        stars[(landed - 1) as usize] = Some(ORIGINAL_STARS[(home_palace - 1) as usize]);
        heaven_stems[(landed - 1) as usize] =
            Some(earth_stems[(home_palace - 1) as usize]);
    }

    // duty gate flies by the hours elapsed since the decade head
    let hour_offset = (hour.index() as i32 - xun_head.index() as i32).rem_euclid(60);
    let gate_target = fold_center(step_palace(fu_home, direction * hour_offset));
    let shi_ring_home = ring_index(fold_center(fu_home));
    let gate_shift = ring_index(gate_target) as i32 - shi_ring_home as i32;
    let mut gates = [None; 9];
    for k in 0..8 {
        let home_palace = RING[k];
        let landed = RING[(k as i32 + gate_shift).rem_euclid(8) as usize];
        gates[(landed - 1) as usize] = ORIGINAL_GATES[(home_palace - 1) as usize];
    }

    // deities anchor at the landed duty star, walking the ring with the dun
    let mut deities = [None; 9];
    for (k, &deity) in DEITIES.iter().enumerate() {
        let pos = RING
            [(fu_ring_target as i32 + direction * k as i32).rem_euclid(8) as usize];
        deities[(pos - 1) as usize] = Some(deity);
    }
    debug!(step = "plates", target_palace = target);

    // assemble palaces and detect patterns
    let palaces: Vec<QimenPalace> = (1..=9u8)
        .map(|number| {
            let idx = (number - 1) as usize;
            let heaven = heaven_stems[idx];
            let earth = earth_stems[idx];
            let mut patterns = Vec::new();
            if let Some(h) = heaven {
                if h == earth {
                    patterns.push("伏吟".to_string());
                }
                if let Some(ring_pos) = RING.iter().position(|&p| p == number) {
                    let opposite = RING[(ring_pos + 4) % 8];
                    if h == earth_stems[(opposite - 1) as usize] {
                        patterns.push("反吟".to_string());
                    }
                }
                if let Some(name) = stem_pair_pattern(h, earth) {
                    patterns.push(name.to_string());
                }
            }
            QimenPalace {
                number,
                trigram: PALACE_TRIGRAMS[idx],
                direction: PALACE_DIRECTIONS[idx].to_string(),
                heaven_stem: heaven,
                earth_stem: earth,
                star: stars[idx],
                gate: gates[idx],
                deity: deities[idx],
                patterns,
            }
        })
        .collect();

    Ok(QimenBoard {
        palaces,
        dun,
        ju,
        solar_term: term.name().to_string(),
        yuan: yuan.to_string(),
        zhi_fu,
        zhi_shi,
        xun_shou: xun_head.name(),
        xun_yi,
        xun_kong,
        day_pillar: moment.day,
        hour_pillar: hour,
    })
}

/// The center palace lodges in 坤二 for ring arithmetic.
fn fold_center(palace: u8) -> u8 {
    if palace == 5 { 2 } else { palace }
}

fn ring_index(palace: u8) -> usize {
    RING.iter()
        .position(|&p| p == palace)
        .expect("outer palace number")
}

/// Flatten a board into the plain-text summary the prompt layer reads.
pub fn extract_qimen_analysis_context(board: &QimenBoard) -> QimenAnalysisContext {
    let board_line = format!(
        "{}{}局 {} {}，{}日{}时，旬首{}（遁{}），旬空{}{}",
        board.dun.name(),
        board.ju,
        board.solar_term,
        board.yuan,
        board.day_pillar.name(),
        board.hour_pillar.name(),
        board.xun_shou,
        board.xun_yi.name(),
        board.xun_kong[0].name(),
        board.xun_kong[1].name(),
    );
    let duty = format!("值符{}，值使{}", board.zhi_fu.name(), board.zhi_shi.name());

    let palaces = board
        .palaces
        .iter()
        .filter(|p| p.number != 5)
        .map(|p| {
            let mut parts = vec![format!(
                "{}宫（{}）",
                p.number,
                p.direction,
            )];
            if let Some(s) = p.star {
                parts.push(s.name().to_string());
            }
            if let Some(g) = p.gate {
                parts.push(g.name().to_string());
            }
            if let Some(d) = p.deity {
                parts.push(d.name().to_string());
            }
            if let Some(h) = p.heaven_stem {
                parts.push(format!("天盘{}", h.name()));
            }
            parts.push(format!("地盘{}", p.earth_stem.name()));
            if !p.patterns.is_empty() {
                parts.push(p.patterns.join("、"));
            }
            parts.join(" ")
        })
        .collect();

    let all_patterns: Vec<String> = board
        .palaces
        .iter()
        .flat_map(|p| {
            p.patterns
                .iter()
                .map(move |name| format!("{}宫{}", p.number, name))
        })
        .collect();
    let patterns = if all_patterns.is_empty() {
        "格局：无".to_string()
    } else {
        format!("格局：{}", all_patterns.join(" "))
    };

    QimenAnalysisContext {
        board: board_line,
        duty,
        palaces,
        patterns,
    }
}
