use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use tianji_charts::{
    BaziInput, Gender, LiurenInput, LiuyaoInput, MeihuaCast, MeihuaInput, QimenInput,
    QueryMoment, ZiweiInput, calculate_bazi, calculate_liuren, calculate_liuyao,
    calculate_meihua, calculate_qimen, calculate_ziwei,
};

fn reference_moment() -> QueryMoment {
    QueryMoment::solar(1986, 5, 29, 10, 0)
}

fn bench_calculators(c: &mut Criterion) {
    c.bench_function("bazi_full_chart", |b| {
        let input = BaziInput {
            moment: reference_moment(),
            gender: Gender::Male,
        };
        b.iter(|| calculate_bazi(black_box(&input)).unwrap());
    });

    c.bench_function("ziwei_full_chart", |b| {
        let input = ZiweiInput {
            moment: reference_moment(),
            gender: Gender::Male,
        };
        b.iter(|| calculate_ziwei(black_box(&input)).unwrap());
    });

    c.bench_function("qimen_board", |b| {
        let input = QimenInput {
            moment: reference_moment(),
        };
        b.iter(|| calculate_qimen(black_box(&input)).unwrap());
    });

    c.bench_function("liuyao_manual_cast", |b| {
        let input = LiuyaoInput {
            moment: reference_moment(),
            lines: Some(vec![7, 8, 9, 6, 7, 8]),
        };
        b.iter(|| calculate_liuyao(black_box(&input)).unwrap());
    });

    c.bench_function("liuren_board", |b| {
        let input = LiurenInput {
            moment: reference_moment(),
        };
        b.iter(|| calculate_liuren(black_box(&input)).unwrap());
    });

    c.bench_function("meihua_numbers", |b| {
        let input = MeihuaInput {
            cast: MeihuaCast::Numbers { upper: 5, lower: 10 },
        };
        b.iter(|| calculate_meihua(black_box(&input)).unwrap());
    });
}

criterion_group!(benches, bench_calculators);
criterion_main!(benches);
