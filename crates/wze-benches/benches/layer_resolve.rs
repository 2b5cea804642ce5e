// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Layer pass throughput.
//!
//! - `layer_push_row/N`: the first of N boxes moved into its neighbour with
//!   enough force to push the whole row; exercises branch propagation.
//! - `layer_idle_grid/N`: N resting boxes on a spaced grid; exercises the
//!   requirement scans when nothing is in contact.
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::{hint::black_box, time::Duration};
use wze_dry_tests::{box_row, ActorBuilder, LayerFixture, DEFAULT_LAYER};

fn push_row(n: usize) -> LayerFixture {
    let mut fx = LayerFixture::new();
    box_row(&mut fx, DEFAULT_LAYER, n, 0.05, 3.0, 1_000_000, 1);
    fx
}

#[allow(clippy::cast_precision_loss)]
fn idle_grid(side: usize) -> LayerFixture {
    let mut fx = LayerFixture::new();
    for row in 0..side {
        for col in 0..side {
            fx.spawn(ActorBuilder::at(col as f64 * 12.0, row as f64 * 12.0).resistance(5));
        }
    }
    fx
}

fn bench_layer_resolve(c: &mut Criterion) {
    let mut push_group = c.benchmark_group("layer_push_row");
    push_group.sample_size(50);
    push_group.warm_up_time(Duration::from_secs(2));
    push_group.measurement_time(Duration::from_secs(5));
    for &n in &[4usize, 16, 64] {
        push_group.throughput(Throughput::Elements(n as u64));
        push_group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            // Fixture setup is not timed; each iteration resolves a fresh row.
            b.iter_batched(
                || push_row(n),
                |mut fx| {
                    let report = fx.resolve(DEFAULT_LAYER);
                    debug_assert!(report.branch_pushes > 0);
                    black_box(report);
                },
                BatchSize::SmallInput,
            );
        });
    }
    push_group.finish();

    let mut idle_group = c.benchmark_group("layer_idle_grid");
    idle_group.sample_size(50);
    idle_group.warm_up_time(Duration::from_secs(2));
    idle_group.measurement_time(Duration::from_secs(5));
    for &side in &[4usize, 8, 16] {
        let n = side * side;
        idle_group.throughput(Throughput::Elements(n as u64));
        idle_group.bench_with_input(BenchmarkId::from_parameter(n), &side, |b, &side| {
            let mut fx = idle_grid(side);
            // Nothing moves, so the same fixture can be reused across iterations.
            b.iter(|| black_box(fx.resolve(DEFAULT_LAYER)));
        });
    }
    idle_group.finish();
}

criterion_group!(benches, bench_layer_resolve);
criterion_main!(benches);
