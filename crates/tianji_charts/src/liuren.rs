//! Da Liu Ren calculator.
//!
//! Month general from the governing zhongqi → heaven plate rotation →
//! Four Lessons → Three Transmissions by the classical priority of
//! extraction methods → Twelve Generals → Xun Kong.
//!
//! Every method selects only the initial transmission; middle and last
//! always chain through the heaven plate (the branch above the
//! previous transmission's seat).

use tracing::debug;

use tianji_base::{Branch, ElementRelation, StemBranch};
use tianji_calendar::{moment_jd, zhongqi_on_or_before};

use crate::error::ChartError;
use crate::liuren_data::{
    MONTH_GENERAL_NAMES, STEM_PALACE, is_daytime, month_general_for, noble_person,
};
use crate::liuren_types::{
    GENERAL_SEQUENCE, LiurenAnalysisContext, LiurenBoard, LiurenInput, LiurenLesson,
    LiurenPosition, LiurenTransmission, TwelveGeneral,
};

/// Compute a complete Da Liu Ren board for the hour of the moment.
pub fn calculate_liuren(input: &LiurenInput) -> Result<LiurenBoard, ChartError> {
    let moment = input.moment.resolve()?;
    let hour = moment.hour.unwrap_or_else(|| {
        StemBranch::from_parts(
            tianji_calendar::zi_hour_stem(moment.day.stem()),
            Branch::Zi,
        )
        .expect("five-rats stems preserve stem/branch parity")
    });
    let day = moment.day;
    let hour_branch = hour.branch();

    // month general from the governing zhongqi
    let (zhongqi, _) = zhongqi_on_or_before(moment_jd(&moment));
    let month_general = month_general_for(zhongqi);
    debug!(
        step = "month_general",
        zhongqi = zhongqi.name(),
        general = %month_general.name()
    );

    // heaven plate: the month general rides the hour branch's seat and
    // propagates uniformly around the ring
    let rotation = month_general.index() as i32 - hour_branch.index() as i32;
    let heaven_above = |earth: Branch| earth.shift(rotation);
    // the earth seat beneath a heaven branch inverts the rotation
    let seat_of = |heaven: Branch| heaven.shift(-rotation);

    // Four Lessons
    let stem_seat = STEM_PALACE[day.stem().index() as usize];
    let l1_top = heaven_above(stem_seat);
    let l2_top = heaven_above(l1_top);
    let l3_top = heaven_above(day.branch());
    let l4_top = heaven_above(l3_top);
    let lesson = |index: u8, top: Branch, bottom: Branch| LiurenLesson {
        index,
        top,
        bottom,
        relation: top.element().relation_to(bottom.element()),
    };
    let lessons = vec![
        lesson(1, l1_top, stem_seat),
        lesson(2, l2_top, l1_top),
        lesson(3, l3_top, day.branch()),
        lesson(4, l4_top, l3_top),
    ];
    debug!(step = "lessons", tops = ?[l1_top.name(), l2_top.name(), l3_top.name(), l4_top.name()]);

    // Three Transmissions
    let (initial, method) = select_initial(&lessons, day, &seat_of, month_general, hour_branch);
    let middle = heaven_above(initial);
    let last = heaven_above(middle);
    debug!(step = "transmissions", method, initial = %initial.name());

    // Twelve Generals: anchor 贵人 on its heaven branch, walk forward
    // when its seat sits in the 亥-辰 half of the earth ring
    let daytime = is_daytime(hour_branch);
    let noble = noble_person(day.stem(), daytime);
    let noble_seat = seat_of(noble);
    let forward = matches!(noble_seat.index(), 11 | 0..=4);
    let mut generals = [TwelveGeneral::GuiRen; 12];
    for (k, &general) in GENERAL_SEQUENCE.iter().enumerate() {
        let step = if forward { k as i32 } else { -(k as i32) };
        generals[noble_seat.shift(step).index() as usize] = general;
    }
    debug!(step = "generals", noble = %noble.name(), forward);

    let positions: Vec<LiurenPosition> = tianji_base::ALL_BRANCHES
        .iter()
        .map(|&earth| LiurenPosition {
            earth,
            heaven: heaven_above(earth),
            general: generals[earth.index() as usize],
        })
        .collect();

    let general_on = |heaven: Branch| generals[seat_of(heaven).index() as usize];

    Ok(LiurenBoard {
        positions,
        lessons,
        transmission: LiurenTransmission {
            initial,
            middle,
            last,
            initial_general: general_on(initial),
            middle_general: general_on(middle),
            last_general: general_on(last),
            method: method.to_string(),
        },
        month_general,
        month_general_name: MONTH_GENERAL_NAMES[month_general.index() as usize].to_string(),
        daytime,
        day_pillar: day,
        hour_pillar: hour,
        xun_kong: day.xun_kong(),
    })
}

/// Ordered selection of the initial transmission: 贼克 (with 比用 and
/// 涉害 as tiebreaks), then the degenerate 伏吟/返吟 boards, then 遥克,
/// then 昴星.
fn select_initial(
    lessons: &[LiurenLesson],
    day: StemBranch,
    seat_of: &dyn Fn(Branch) -> Branch,
    month_general: Branch,
    hour_branch: Branch,
) -> (Branch, &'static str) {
    // distinct lessons only: duplicated pairs count once
    let mut distinct: Vec<&LiurenLesson> = Vec::new();
    for l in lessons {
        if !distinct.iter().any(|d| d.top == l.top && d.bottom == l.bottom) {
            distinct.push(l);
        }
    }

    // lower controls upper (下贼上) takes priority over upper controls
    // lower (上克下)
    let zei: Vec<Branch> = distinct
        .iter()
        .filter(|l| l.relation == ElementRelation::ControlledBy)
        .map(|l| l.top)
        .collect();
    let ke: Vec<Branch> = distinct
        .iter()
        .filter(|l| l.relation == ElementRelation::Controls)
        .map(|l| l.top)
        .collect();
    let candidates = if !zei.is_empty() { zei } else { ke };

    match candidates.len() {
        1 => return (candidates[0], "贼克法"),
        n if n > 1 => {
            // 比用: keep tops sharing the day stem's polarity
            let matched: Vec<Branch> = candidates
                .iter()
                .copied()
                .filter(|b| b.is_yang() == day.stem().is_yang())
                .collect();
            if matched.len() == 1 {
                return (matched[0], "比用法");
            }
            let pool = if matched.is_empty() { candidates } else { matched };
            // 涉害 (simplified): prefer a top seated on a 孟 branch
            // (寅申巳亥), then on a 仲 branch (子午卯酉)
            for class in [[2u8, 8, 5, 11], [0, 6, 3, 9]] {
                if let Some(&b) = pool
                    .iter()
                    .find(|&&b| class.contains(&seat_of(b).index()))
                {
                    return (b, "涉害法");
                }
            }
            return (pool[0], "涉害法");
        }
        _ => {}
    }

    // no ke among the lessons: degenerate boards first
    if month_general == hour_branch {
        // 伏吟: heaven mirrors earth; yang days take the stem seat's
        // rider, yin days the day branch's
        let initial = if day.stem().is_yang() {
            STEM_PALACE[day.stem().index() as usize]
        } else {
            day.branch()
        };
        return (initial, "伏吟");
    }
    if month_general == hour_branch.clash() {
        // 返吟: heaven opposes earth; the post horse of the day branch
        return (day.branch().post_horse(), "返吟");
    }

    // 遥克: lesson tops controlling the day stem's element, else tops
    // the day stem controls
    let day_element = day.stem().element();
    let shooting: Vec<Branch> = distinct
        .iter()
        .filter(|l| l.top.element().controls() == day_element)
        .map(|l| l.top)
        .collect();
    let shot: Vec<Branch> = distinct
        .iter()
        .filter(|l| day_element.controls() == l.top.element())
        .map(|l| l.top)
        .collect();
    let remote = if !shooting.is_empty() { shooting } else { shot };
    if !remote.is_empty() {
        let matched = remote
            .iter()
            .copied()
            .find(|b| b.is_yang() == day.stem().is_yang());
        return (matched.unwrap_or(remote[0]), "遥克法");
    }

    // 昴星: yang days take the rider above earth 酉, yin days the seat
    // beneath heaven 酉
    let initial = if day.stem().is_yang() {
        // heaven above earth 酉
        Branch::You.shift(month_general.index() as i32 - hour_branch.index() as i32)
    } else {
        seat_of(Branch::You)
    };
    (initial, "昴星法")
}

/// Flatten a board into the plain-text summary the prompt layer reads.
pub fn extract_liuren_analysis_context(board: &LiurenBoard) -> LiurenAnalysisContext {
    let board_line = format!(
        "{}日{}时，月将{}（{}），{}贵，旬空{}{}",
        board.day_pillar.name(),
        board.hour_pillar.name(),
        board.month_general.name(),
        board.month_general_name,
        if board.daytime { "昼" } else { "夜" },
        board.xun_kong[0].name(),
        board.xun_kong[1].name(),
    );

    let lessons = board
        .lessons
        .iter()
        .map(|l| {
            format!(
                "第{}课：{}加{}（{}）",
                l.index,
                l.top.name(),
                l.bottom.name(),
                l.relation.name(),
            )
        })
        .collect();

    let t = &board.transmission;
    let transmission = format!(
        "三传（{}）：初传{}{} 中传{}{} 末传{}{}",
        t.method,
        t.initial.name(),
        t.initial_general.name(),
        t.middle.name(),
        t.middle_general.name(),
        t.last.name(),
        t.last_general.name(),
    );

    let positions = format!(
        "天地盘：{}",
        board
            .positions
            .iter()
            .map(|p| format!("{}上{}{}", p.earth.name(), p.heaven.name(), p.general.name()))
            .collect::<Vec<_>>()
            .join(" "),
    );

    LiurenAnalysisContext {
        board: board_line,
        lessons,
        transmission,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::QueryMoment;

    fn board_for(year: i32, month: u32, day: u32, hour: u32) -> LiurenBoard {
        calculate_liuren(&LiurenInput {
            moment: QueryMoment::solar(year, month, day, hour, 0),
        })
        .unwrap()
    }

    const KNOWN_METHODS: [&str; 7] = [
        "贼克法", "比用法", "涉害法", "遥克法", "昴星法", "伏吟", "返吟",
    ];

    #[test]
    fn month_general_rides_the_hour_seat() {
        for &(y, m, d, h) in &[
            (2024, 6, 15, 10),
            (1986, 5, 29, 0),
            (2000, 2, 4, 21),
            (2023, 12, 25, 14),
        ] {
            let board = board_for(y, m, d, h);
            let hour_seat = board
                .positions
                .iter()
                .find(|p| p.earth == board.hour_pillar.branch())
                .unwrap();
            assert_eq!(hour_seat.heaven, board.month_general);
        }
    }

    #[test]
    fn heaven_branches_are_a_permutation() {
        let board = board_for(2024, 6, 15, 10);
        let mut heavens: Vec<Branch> = board.positions.iter().map(|p| p.heaven).collect();
        heavens.sort_by_key(|b| b.index());
        heavens.dedup();
        assert_eq!(heavens.len(), 12);
    }

    #[test]
    fn all_twelve_generals_placed_once() {
        for &(y, m, d, h) in &[(2024, 6, 15, 10), (1986, 5, 29, 12), (2000, 8, 8, 20)] {
            let board = board_for(y, m, d, h);
            let mut gs: Vec<TwelveGeneral> =
                board.positions.iter().map(|p| p.general).collect();
            gs.sort_by_key(|g| *g as u8);
            gs.dedup();
            assert_eq!(gs.len(), 12);
        }
    }

    #[test]
    fn transmissions_chain_through_the_heaven_plate() {
        for &(y, m, d, h) in &[
            (2024, 6, 15, 10),
            (1986, 5, 29, 0),
            (2023, 12, 25, 2),
            (2000, 8, 8, 20),
        ] {
            let board = board_for(y, m, d, h);
            let heaven_above = |b: Branch| {
                board.positions.iter().find(|p| p.earth == b).unwrap().heaven
            };
            let t = &board.transmission;
            assert_eq!(t.middle, heaven_above(t.initial));
            assert_eq!(t.last, heaven_above(t.middle));
            assert!(KNOWN_METHODS.contains(&t.method.as_str()), "{}", t.method);
        }
    }

    #[test]
    fn four_lessons_follow_the_chaining_rule() {
        let board = board_for(2024, 6, 15, 10);
        assert_eq!(board.lessons.len(), 4);
        let heaven_above =
            |b: Branch| board.positions.iter().find(|p| p.earth == b).unwrap().heaven;
        let l = &board.lessons;
        assert_eq!(l[0].top, heaven_above(l[0].bottom));
        assert_eq!(l[1].bottom, l[0].top);
        assert_eq!(l[2].bottom, board.day_pillar.branch());
        assert_eq!(l[3].bottom, l[2].top);
    }

    #[test]
    fn winter_chou_hour_is_fu_yin() {
        // after 冬至 the month general is 丑; at the 丑 hour the heaven
        // plate mirrors the earth plate
        let board = board_for(2023, 12, 25, 2);
        assert_eq!(board.month_general, Branch::Chou);
        assert_eq!(board.hour_pillar.branch(), Branch::Chou);
        for p in &board.positions {
            assert_eq!(p.earth, p.heaven);
        }
        assert_eq!(board.transmission.method, "伏吟");
    }

    #[test]
    fn analysis_context_names_the_method() {
        let board = board_for(2024, 6, 15, 10);
        let ctx = extract_liuren_analysis_context(&board);
        assert!(ctx.board.contains("月将"));
        assert_eq!(ctx.lessons.len(), 4);
        assert!(ctx.transmission.contains(&board.transmission.method));
    }
}
