//! Golden-value integration tests across the six calculators: the 1986
//! reference chart, board invariants over a date sweep, and serde
//! round trips of the public result types.

use tianji_base::Branch;
use tianji_charts::{
    BaziInput, Gender, LifeStage, LiurenInput, LiuyaoInput, QimenInput, QueryMoment, SiHua,
    ZiweiInput, calculate_bazi, calculate_liuren, calculate_liuyao, calculate_qimen,
    calculate_ziwei,
};

fn sweep_moments() -> Vec<QueryMoment> {
    let dates = [
        (1900, 3, 15, 6),
        (1924, 8, 2, 14),
        (1949, 10, 1, 10),
        (1986, 5, 29, 0),
        (2000, 2, 4, 21),
        (2008, 8, 8, 20),
        (2023, 12, 22, 2),
        (2044, 4, 30, 18),
        (2077, 7, 7, 12),
        (2100, 11, 11, 22),
    ];
    dates
        .iter()
        .map(|&(y, m, d, h)| QueryMoment::solar(y, m, d, h, 0))
        .collect()
}

#[test]
fn reference_bazi_chart_end_to_end() {
    let chart = calculate_bazi(&BaziInput {
        moment: QueryMoment::solar(1986, 5, 29, 0, 0),
        gender: Gender::Male,
    })
    .unwrap();

    // pillars and element tally (total 16 with two three-stem branches)
    assert_eq!(chart.pillars.year.stem_branch.name(), "丙寅");
    assert_eq!(chart.pillars.month.stem_branch.name(), "癸巳");
    assert_eq!(chart.pillars.day.stem_branch.name(), "癸酉");
    assert_eq!(chart.pillars.hour.as_ref().unwrap().stem_branch.name(), "壬子");
    assert_eq!(chart.five_elements.total(), 16);
    assert_eq!(chart.five_elements.water, 5);

    // hidden stems of the reference branches
    assert_eq!(chart.pillars.year.hidden_stems.len(), 3); // 寅
    assert_eq!(chart.pillars.hour.as_ref().unwrap().hidden_stems.len(), 1); // 子

    // life-cycle stages relative to the 癸 day master
    assert_eq!(chart.pillars.year.dishi, LifeStage::MuYu); // 寅
    assert_eq!(chart.pillars.month.dishi, LifeStage::Tai); // 巳
    assert_eq!(chart.pillars.day.dishi, LifeStage::Bing); // 酉
    assert_eq!(chart.pillars.hour.as_ref().unwrap().dishi, LifeStage::LinGuan); // 子

    // NaYin of the four pillars
    assert_eq!(chart.pillars.year.nayin, "炉中火");
    assert_eq!(chart.pillars.month.nayin, "长流水");
    assert_eq!(chart.pillars.day.nayin, "剑锋金");
    assert_eq!(chart.pillars.hour.as_ref().unwrap().nayin, "桑柘木");

    // ShenSha battery against the reference branches
    let names: Vec<&str> = chart.shen_sha.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"天乙贵人")); // 癸 meets 巳
    assert!(names.contains(&"禄神")); // 癸 meets 子
    assert!(names.contains(&"劫煞")); // 酉 trine meets 寅
    assert!(!names.contains(&"羊刃")); // yin day master has none
    for s in &chart.shen_sha {
        if s.name == "天乙贵人" {
            assert!(s.auspicious);
        }
        if s.name == "劫煞" {
            assert!(!s.auspicious);
        }
    }
}

#[test]
fn hidden_stem_rows_for_single_and_triple_branches() {
    use tianji_base::{Stem, hidden_stems};
    assert_eq!(hidden_stems(Branch::Yin), &[Stem::Jia, Stem::Bing, Stem::Wu]);
    assert_eq!(hidden_stems(Branch::Zi), &[Stem::Gui]);
}

#[test]
fn ziwei_invariants_hold_across_the_sweep() {
    for (i, moment) in sweep_moments().into_iter().enumerate() {
        let chart = calculate_ziwei(&ZiweiInput {
            moment,
            gender: if i % 2 == 0 { Gender::Male } else { Gender::Female },
        })
        .unwrap();

        assert_eq!(chart.palaces.len(), 12, "case {i}");
        let mut branches: Vec<Branch> = chart.palaces.iter().map(|p| p.branch).collect();
        branches.sort_by_key(|b| b.index());
        branches.dedup();
        assert_eq!(branches.len(), 12, "case {i}");

        let main: usize = chart
            .palaces
            .iter()
            .map(|p| p.stars.iter().filter(|s| s.main).count())
            .sum();
        assert_eq!(main, 14, "case {i}");
        let aux: usize = chart
            .palaces
            .iter()
            .map(|p| p.stars.iter().filter(|s| !s.main).count())
            .sum();
        assert!(aux >= 14, "case {i}: {aux} aux stars");

        let tags: Vec<SiHua> = chart
            .palaces
            .iter()
            .flat_map(|p| &p.stars)
            .filter_map(|s| s.si_hua)
            .collect();
        assert_eq!(tags.len(), 4, "case {i}");
        for t in [SiHua::Lu, SiHua::Quan, SiHua::Ke, SiHua::Ji] {
            assert_eq!(tags.iter().filter(|&&x| x == t).count(), 1, "case {i}");
        }

        let shen_marked = chart.palaces.iter().filter(|p| p.is_shen_gong).count();
        assert_eq!(shen_marked, 1, "case {i}");
    }
}

#[test]
fn qimen_invariants_hold_across_the_sweep() {
    for (i, moment) in sweep_moments().into_iter().enumerate() {
        let board = calculate_qimen(&QimenInput { moment }).unwrap();
        assert_eq!(board.palaces.len(), 9, "case {i}");
        assert!((1..=9).contains(&board.ju), "case {i}");

        let mut earth: Vec<_> = board.palaces.iter().map(|p| p.earth_stem).collect();
        earth.sort_by_key(|s| s.index());
        earth.dedup();
        assert_eq!(earth.len(), 9, "case {i}: earth stems collide");

        let outer: Vec<_> = board.palaces.iter().filter(|p| p.number != 5).collect();
        let mut deities: Vec<_> = outer.iter().map(|p| p.deity.unwrap()).collect();
        deities.sort_by_key(|d| *d as u8);
        deities.dedup();
        assert_eq!(deities.len(), 8, "case {i}: deities collide");

        for p in &outer {
            if p.heaven_stem == Some(p.earth_stem) {
                assert!(
                    p.patterns.iter().any(|s| s == "伏吟"),
                    "case {i} palace {} misses 伏吟",
                    p.number
                );
            }
        }
    }
}

#[test]
fn liuren_board_properties_hold_across_the_sweep() {
    for (i, moment) in sweep_moments().into_iter().enumerate() {
        let board = calculate_liuren(&LiurenInput { moment }).unwrap();

        // the heaven branch over the hour seat is the month general
        let hour_seat = board
            .positions
            .iter()
            .find(|p| p.earth == board.hour_pillar.branch())
            .unwrap();
        assert_eq!(hour_seat.heaven, board.month_general, "case {i}");

        // transmissions chain through the heaven plate
        let heaven_above =
            |b: Branch| board.positions.iter().find(|p| p.earth == b).unwrap().heaven;
        assert_eq!(
            board.transmission.middle,
            heaven_above(board.transmission.initial),
            "case {i}"
        );
        assert_eq!(
            board.transmission.last,
            heaven_above(board.transmission.middle),
            "case {i}"
        );

        // both rings are permutations of the twelve branches
        let mut heavens: Vec<Branch> = board.positions.iter().map(|p| p.heaven).collect();
        heavens.sort_by_key(|b| b.index());
        heavens.dedup();
        assert_eq!(heavens.len(), 12, "case {i}");
    }
}

#[test]
fn results_survive_a_serde_round_trip() {
    let bazi = calculate_bazi(&BaziInput {
        moment: QueryMoment::solar(1986, 5, 29, 0, 0),
        gender: Gender::Male,
    })
    .unwrap();
    let json = serde_json::to_string(&bazi).unwrap();
    let back: tianji_charts::BaziChart = serde_json::from_str(&json).unwrap();
    assert_eq!(bazi, back);

    let liuyao = calculate_liuyao(&LiuyaoInput {
        moment: QueryMoment::solar(2024, 6, 15, 10, 0),
        lines: Some(vec![9, 7, 8, 6, 7, 7]),
    })
    .unwrap();
    let json = serde_json::to_string(&liuyao).unwrap();
    let back: tianji_charts::LiuyaoResult = serde_json::from_str(&json).unwrap();
    assert_eq!(liuyao, back);
}
