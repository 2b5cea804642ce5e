// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use wze_collision::{classify, Rect, Vec2};

/// `(prev, current, other)` triples covering every classifier branch.
#[allow(clippy::cast_precision_loss)]
fn cases() -> Vec<(Rect, Rect, Rect)> {
    let other = Rect::from_center_size(Vec2::ZERO, 10.0, 10.0);
    let moves: [([f64; 2], [f64; 2]); 10] = [
        ([0.0, 15.0], [0.0, 8.0]),
        ([0.0, -15.0], [0.0, -8.0]),
        ([15.0, 0.0], [8.0, 0.0]),
        ([-15.0, 0.0], [-8.0, 0.0]),
        ([12.0, -12.0], [8.0, -8.0]),
        ([-12.0, -12.0], [-8.0, -8.0]),
        ([12.0, 12.0], [7.0, 8.0]),
        ([-12.0, 12.0], [-8.0, 7.0]),
        ([0.0, 9.0], [0.0, 8.0]),
        ([0.0, 40.0], [0.0, 30.0]),
    ];
    (0..100)
        .flat_map(|i| {
            let shift = Vec2::new(i as f64 * 0.001, 0.0);
            moves.iter().map(move |&(prev, cur)| {
                (
                    Rect::from_center_size(Vec2::from(prev) + shift, 10.0, 10.0),
                    Rect::from_center_size(Vec2::from(cur) + shift, 10.0, 10.0),
                    other,
                )
            })
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let cases = cases();
    let mut group = c.benchmark_group("direction_classify");
    group.throughput(Throughput::Elements(cases.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| {
            for (prev, cur, other) in &cases {
                black_box(classify(black_box(prev), black_box(cur), black_box(other)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
