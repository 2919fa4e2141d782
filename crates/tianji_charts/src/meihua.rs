//! Mei Hua Yi Shu calculator.
//!
//! Number (or time-derived) casting → original hexagram and changing
//! line → mutual and changed hexagrams → Ti/Yong roles and their
//! five-element relation.

use tracing::debug;

use tianji_base::{ElementRelation, Hexagram, Trigram};

use crate::error::ChartError;
use crate::meihua_types::{
    MeihuaAnalysisContext, MeihuaCast, MeihuaHexagram, MeihuaInput, MeihuaResult, TiYongAnalysis,
};

/// Compute a complete Meihua cast.
pub fn calculate_meihua(input: &MeihuaInput) -> Result<MeihuaResult, ChartError> {
    let (upper_number, lower_number) = match &input.cast {
        MeihuaCast::Numbers { upper, lower } => {
            if *upper == 0 {
                return Err(ChartError::InvalidCastNumber(*upper));
            }
            if *lower == 0 {
                return Err(ChartError::InvalidCastNumber(*lower));
            }
            (*upper, *lower)
        }
        MeihuaCast::Time { moment } => {
            // 年支数 + 月数 + 日数 folds the upper trigram; adding the
            // 时支数 folds the lower and the changing line
            let resolved = moment.resolve()?;
            let year_number = resolved.year.branch().index() as u64 + 1;
            let hour_number = resolved
                .hour
                .map(|h| h.branch().index() as u64 + 1)
                .unwrap_or(1);
            let date_sum =
                year_number + resolved.lunar.month as u64 + resolved.lunar.day as u64;
            (date_sum, date_sum + hour_number)
        }
    };
    debug!(step = "cast_numbers", upper_number, lower_number);

    let upper = trigram_from_number(upper_number);
    let lower = trigram_from_number(lower_number);
    let moving_line = ((upper_number + lower_number - 1) % 6) as u8 + 1;
    debug!(
        step = "trigrams",
        upper = upper.name(),
        lower = lower.name(),
        moving_line
    );

    let original = Hexagram::from_trigrams(upper, lower);
    let mutual = original.mutual();
    let changed = original.with_line_flipped(moving_line);

    // Yong is the trigram holding the changing line; Ti is the other
    let (ti, yong) = if moving_line <= 3 {
        (original.upper(), original.lower())
    } else {
        (original.lower(), original.upper())
    };
    let relation = ti.element().relation_to(yong.element());
    let ti_yong = TiYongAnalysis {
        ti: ti.name().to_string(),
        ti_element: ti.element(),
        yong: yong.name().to_string(),
        yong_element: yong.element(),
        relation,
        summary: ti_yong_summary(ti, yong, relation),
    };
    debug!(step = "ti_yong", relation = relation.name());

    Ok(MeihuaResult {
        upper_number,
        lower_number,
        original: describe(original),
        mutual: describe(mutual),
        changed: describe(changed),
        moving_line,
        ti_yong,
    })
}

/// Fold a cast number onto the early-heaven trigram ring (remainder 0
/// wraps to 坤 8).
fn trigram_from_number(n: u64) -> Trigram {
    Trigram::from_number(((n - 1) % 8) as u8 + 1).expect("folded number lies in 1-8")
}

fn describe(hex: Hexagram) -> MeihuaHexagram {
    MeihuaHexagram {
        name: hex.name().to_string(),
        king_wen: hex.king_wen(),
        upper: hex.upper().name().to_string(),
        lower: hex.lower().name().to_string(),
    }
}

fn ti_yong_summary(ti: Trigram, yong: Trigram, relation: ElementRelation) -> String {
    let reading = match relation {
        ElementRelation::Same => "体用比和，谋事顺遂",
        ElementRelation::GeneratedBy => "用生体，事易成而有助力",
        ElementRelation::Controls => "体克用，谋为可成但费力",
        ElementRelation::Generates => "体生用，耗泄之象，成事多劳",
        ElementRelation::ControlledBy => "用克体，事多阻难，不宜强求",
    };
    format!(
        "体卦{}{}，用卦{}{}，{}",
        ti.name(),
        ti.element().name(),
        yong.name(),
        yong.element().name(),
        reading,
    )
}

/// Flatten a cast into the plain-text summary the prompt layer reads.
pub fn extract_meihua_analysis_context(result: &MeihuaResult) -> MeihuaAnalysisContext {
    let cast = format!(
        "起卦数：上{} 下{}，动爻第{}爻",
        result.upper_number, result.lower_number, result.moving_line,
    );
    let hexagrams = format!(
        "本卦{}（{}上{}下），互卦{}，变卦{}",
        result.original.name,
        result.original.upper,
        result.original.lower,
        result.mutual.name,
        result.changed.name,
    );
    let ti_yong = result.ti_yong.summary.clone();
    MeihuaAnalysisContext {
        cast,
        hexagrams,
        ti_yong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::QueryMoment;
    use tianji_base::{ALL_TRIGRAMS, WuXing};

    fn numbers(upper: u64, lower: u64) -> MeihuaInput {
        MeihuaInput {
            cast: MeihuaCast::Numbers { upper, lower },
        }
    }

    #[test]
    fn five_ten_casts_zhong_fu() {
        let result = calculate_meihua(&numbers(5, 10)).unwrap();
        assert_eq!(result.original.upper, "巽");
        assert_eq!(result.original.lower, "兑");
        assert_eq!(result.moving_line, 3);
        assert_eq!(result.original.name, "风泽中孚");
        // line 3 sits in the lower trigram: Yong = 兑, Ti = 巽
        assert_eq!(result.ti_yong.ti, "巽");
        assert_eq!(result.ti_yong.yong, "兑");
        assert_eq!(result.ti_yong.relation, ElementRelation::ControlledBy);
        // mutual and changed follow the folding rules
        assert_eq!(result.mutual.name, "山雷颐");
        assert_eq!(result.changed.name, "风天小畜");
    }

    #[test]
    fn remainder_zero_wraps_to_kun_and_line_six() {
        let result = calculate_meihua(&numbers(16, 8)).unwrap();
        assert_eq!(result.original.upper, "坤");
        assert_eq!(result.original.lower, "坤");
        assert_eq!(result.moving_line, 6);
        assert_eq!(result.original.name, "坤为地");
        // line 6 sits in the upper trigram: Ti = lower
        assert_eq!(result.ti_yong.ti, "坤");
        assert_eq!(result.ti_yong.relation, ElementRelation::Same);
    }

    #[test]
    fn all_sixty_four_pairs_are_total() {
        for u in 1..=8u64 {
            for l in 1..=8u64 {
                for extra in 0..6u64 {
                    let result =
                        calculate_meihua(&numbers(u + extra * 8, l)).unwrap();
                    assert!(!result.original.name.is_empty());
                    assert!((1..=64).contains(&result.original.king_wen));
                    assert!((1..=64).contains(&result.mutual.king_wen));
                    assert!((1..=64).contains(&result.changed.king_wen));
                    assert!((1..=6).contains(&result.moving_line));
                    // changed differs from original in exactly one line
                    assert_ne!(result.changed.name, result.original.name);
                }
            }
        }
    }

    #[test]
    fn trigram_elements_cover_the_ring() {
        for &t in &ALL_TRIGRAMS {
            let _ = t.element();
        }
        assert_eq!(Trigram::Dui.element(), WuXing::Metal);
    }

    #[test]
    fn time_cast_folds_through_the_lunar_date() {
        // 2000-02-05 12:00 is lunar 2000 正月初一, 庚辰 year, 午 hour:
        // (5+1+1)=7→艮 above, (7+7)=14→坎 below, line 2 → 山水蒙
        let result = calculate_meihua(&MeihuaInput {
            cast: MeihuaCast::Time {
                moment: QueryMoment::solar(2000, 2, 5, 12, 0),
            },
        })
        .unwrap();
        assert_eq!(result.upper_number, 7);
        assert_eq!(result.lower_number, 14);
        assert_eq!(result.original.name, "山水蒙");
        assert_eq!(result.moving_line, 2);
    }

    #[test]
    fn rejects_zero_cast_numbers() {
        assert!(matches!(
            calculate_meihua(&numbers(0, 5)).unwrap_err(),
            ChartError::InvalidCastNumber(0)
        ));
        assert!(matches!(
            calculate_meihua(&numbers(5, 0)).unwrap_err(),
            ChartError::InvalidCastNumber(0)
        ));
    }

    #[test]
    fn analysis_context_reads_the_relation() {
        let result = calculate_meihua(&numbers(5, 10)).unwrap();
        let ctx = extract_meihua_analysis_context(&result);
        assert!(ctx.cast.contains("动爻第3爻"));
        assert!(ctx.hexagrams.contains("风泽中孚"));
        assert!(ctx.ti_yong.contains("体卦巽木"));
    }
}
