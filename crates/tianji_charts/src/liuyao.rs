//! Liu Yao calculator.
//!
//! Cast values → hexagram → palace affiliation → Na Jia stems/branches
//! → Shi/Ying → Six Relations and Six Spirits → changed hexagram for
//! moving lines → hidden gods for absent relations.

use rand::Rng;
use tracing::debug;

use tianji_base::{
    Hexagram, SHI_POSITIONS, najia_for_line, palace_affiliation, ying_position,
};

use crate::error::ChartError;
use crate::liuyao_types::{
    ALL_RELATIONS, ChangedLine, HexagramSummary, HiddenGodEntry, LiuyaoAnalysisContext,
    LiuyaoInput, LiuyaoLine, LiuyaoResult, SPIRIT_CYCLE, SixRelation, SixSpirit,
};

/// Compute a Liu Yao cast; a missing manual cast draws from the
/// thread-local generator.
pub fn calculate_liuyao(input: &LiuyaoInput) -> Result<LiuyaoResult, ChartError> {
    calculate_liuyao_with_rng(input, &mut rand::rng())
}

/// Na Jia stem and branch of one line, keyed by the hexagram's literal
/// lower trigram for lines 1-3 and upper trigram for lines 4-6.
fn line_najia(hex: Hexagram, position: u8) -> (tianji_base::Stem, tianji_base::Branch) {
    if position <= 3 {
        najia_for_line(hex.lower(), position)
    } else {
        najia_for_line(hex.upper(), position)
    }
}

/// Compute a Liu Yao cast with an injectable randomness source for the
/// random-cast path.
pub fn calculate_liuyao_with_rng<R: Rng + ?Sized>(
    input: &LiuyaoInput,
    rng: &mut R,
) -> Result<LiuyaoResult, ChartError> {
    // validate the cast before resolving anything else
    let cast: [u8; 6] = match &input.lines {
        Some(values) => {
            let values: &[u8] = values;
            let arr: [u8; 6] = values
                .try_into()
                .map_err(|_| ChartError::WrongLineCount(values.len()))?;
            if let Some(&bad) = arr.iter().find(|v| !(6..=9).contains(*v)) {
                return Err(ChartError::InvalidLineValue(bad));
            }
            arr
        }
        None => {
            let mut arr = [0u8; 6];
            for slot in &mut arr {
                *slot = 6 + rng.random_range(0..4u8);
            }
            arr
        }
    };
    debug!(step = "cast", values = ?cast);

    let moment = input.moment.resolve()?;
    let day = moment.day;

    let lines_yang: [bool; 6] = cast.map(|v| v == 7 || v == 9);
    let hex = Hexagram { lines: lines_yang };
    let affiliation = palace_affiliation(hex);
    let palace = affiliation.palace;
    let palace_element = palace.element();
    let shi = SHI_POSITIONS[affiliation.generation as usize];
    let ying = ying_position(shi);
    debug!(step = "palace", hexagram = hex.name(), palace = palace.name(), shi, ying);

    // changed hexagram from the moving lines
    let moving_positions: Vec<u8> = (1..=6u8)
        .filter(|&p| matches!(cast[(p - 1) as usize], 6 | 9))
        .collect();
    let changed_hex = if moving_positions.is_empty() {
        None
    } else {
        let mut lines = lines_yang;
        for &p in &moving_positions {
            lines[(p - 1) as usize] = !lines[(p - 1) as usize];
        }
        Some(Hexagram { lines })
    };

    let first_spirit = SixSpirit::first_for_day(day.stem());
    let lines: Vec<LiuyaoLine> = (1..=6u8)
        .map(|position| {
            let value = cast[(position - 1) as usize];
            let (stem, branch) = line_najia(hex, position);
            let element = branch.element();
            let moving = matches!(value, 6 | 9);
            let changed = if moving {
                let changed_hex =
                    changed_hex.expect("moving lines imply a changed hexagram");
                let (_, changed_branch) = line_najia(changed_hex, position);
                Some(ChangedLine {
                    branch: changed_branch,
                    element: changed_branch.element(),
                    relation: SixRelation::classify(palace_element, changed_branch.element()),
                })
            } else {
                None
            };
            LiuyaoLine {
                position,
                cast_value: value,
                yang: lines_yang[(position - 1) as usize],
                moving,
                stem,
                branch,
                element,
                relation: SixRelation::classify(palace_element, element),
                spirit: SPIRIT_CYCLE
                    [(first_spirit as u8 as usize + position as usize - 1) % 6],
                shi: position == shi,
                ying: position == ying,
                changed,
            }
        })
        .collect();

    // hidden gods: any relation absent from the visible lines hides in
    // the palace's pure hexagram
    let hidden_gods: Vec<HiddenGodEntry> = ALL_RELATIONS
        .iter()
        .filter(|&&relation| lines.iter().all(|l| l.relation != relation))
        .filter_map(|&relation| {
            (1..=6u8).find_map(|position| {
                let (stem, branch) = najia_for_line(palace, position);
                let element = branch.element();
                (SixRelation::classify(palace_element, element) == relation).then(|| {
                    HiddenGodEntry {
                        relation,
                        stem,
                        branch,
                        element,
                        position,
                    }
                })
            })
        })
        .collect();
    debug!(step = "hidden_gods", count = hidden_gods.len());

    let summarize = |h: Hexagram| {
        let aff = palace_affiliation(h);
        HexagramSummary {
            name: h.name().to_string(),
            king_wen: h.king_wen(),
            palace: aff.palace.name().to_string(),
            palace_element: aff.palace.element(),
        }
    };

    Ok(LiuyaoResult {
        original: summarize(hex),
        changed: changed_hex.map(summarize),
        lines,
        moving_positions,
        hidden_gods,
        shi_position: shi,
        ying_position: ying,
        day_pillar: day,
        month_pillar: moment.month,
        xun_kong: day.xun_kong(),
    })
}

/// Flatten a cast into the plain-text summary the prompt layer reads.
pub fn extract_liuyao_analysis_context(result: &LiuyaoResult) -> LiuyaoAnalysisContext {
    let cast = format!(
        "起卦：{}月 {}日，旬空{}{}",
        result.month_pillar.name(),
        result.day_pillar.name(),
        result.xun_kong[0].name(),
        result.xun_kong[1].name(),
    );

    let hexagram = match &result.changed {
        Some(changed) => format!(
            "主卦{}（{}宫，属{}），变卦{}，世爻{}爻，应爻{}爻",
            result.original.name,
            result.original.palace,
            result.original.palace_element.name(),
            changed.name,
            result.shi_position,
            result.ying_position,
        ),
        None => format!(
            "主卦{}（{}宫，属{}），世爻{}爻，应爻{}爻，六爻安静",
            result.original.name,
            result.original.palace,
            result.original.palace_element.name(),
            result.shi_position,
            result.ying_position,
        ),
    };

    let lines = result
        .lines
        .iter()
        .rev()
        .map(|l| {
            let mut text = format!(
                "{}爻 {} {}{}{} {}",
                l.position,
                l.spirit.name(),
                l.relation.name(),
                l.stem.name(),
                l.branch.name(),
                l.element.name(),
            );
            if l.shi {
                text.push_str(" 世");
            }
            if l.ying {
                text.push_str(" 应");
            }
            if let Some(c) = &l.changed {
                text.push_str(&format!(
                    " 动，变{}{}（{}）",
                    c.relation.name(),
                    c.branch.name(),
                    c.element.name(),
                ));
            }
            text
        })
        .collect();

    let moving = if result.moving_positions.is_empty() {
        "动爻：无".to_string()
    } else {
        format!(
            "动爻：{}",
            result
                .moving_positions
                .iter()
                .map(|p| format!("{p}爻"))
                .collect::<Vec<_>>()
                .join("、"),
        )
    };

    let hidden = if result.hidden_gods.is_empty() {
        "伏神：无".to_string()
    } else {
        format!(
            "伏神：{}",
            result
                .hidden_gods
                .iter()
                .map(|h| format!(
                    "{}{}{}伏{}爻下",
                    h.relation.name(),
                    h.stem.name(),
                    h.branch.name(),
                    h.position,
                ))
                .collect::<Vec<_>>()
                .join(" "),
        )
    };

    LiuyaoAnalysisContext {
        cast,
        hexagram,
        lines,
        moving,
        hidden,
    }
}
