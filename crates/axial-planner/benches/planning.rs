//! Benchmarks for swap, move and pack planning.
//!
//! Planning runs on every axis operation, ahead of the array library call, so
//! it should stay negligible next to the transpose it drives.
//!
//! Run with:
//! ```bash
//! cargo bench --bench planning
//! ```

use axial_core::{shape_from_sizes, Dim};
use axial_planner::{plan_move, plan_pack, plan_swap, plan_unpack, PlanHints};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Benchmark permutation planning for increasing ranks
fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");

    for rank in [2usize, 4, 6, 12] {
        group.bench_with_input(BenchmarkId::new("swap", rank), &rank, |b, &rank| {
            b.iter(|| plan_swap(black_box(rank), 0, -1).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("move", rank), &rank, |b, &rank| {
            b.iter(|| plan_move(black_box(rank), 0, -1).unwrap());
        });
    }

    group.finish();
}

/// Benchmark pack and unpack planning on static and dynamic shapes
fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    let hints = PlanHints::default();

    let test_cases = vec![
        ("4d_front", shape_from_sizes(&[32, 64, 64, 3]), 0isize, 1isize),
        ("4d_back", shape_from_sizes(&[32, 64, 64, 3]), -2, -1),
        ("4d_reverse", shape_from_sizes(&[32, 64, 64, 3]), 3, 0),
        ("8d_spread", shape_from_sizes(&[2, 3, 4, 5, 6, 7, 8, 9]), 1, 6),
    ];

    for (name, shape, a, b) in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &shape, |bench, shape| {
            bench.iter(|| plan_pack(black_box(shape), a, b, &hints).unwrap());
        });
    }

    let dynamic = [Dim::Dynamic, Dim::Known(128), Dim::Known(64)];
    group.bench_function("dynamic_batch", |bench| {
        bench.iter(|| plan_pack(black_box(&dynamic), 1, 2, &hints).unwrap());
    });
    group.bench_function("unpack", |bench| {
        bench.iter(|| plan_unpack(black_box(&dynamic), -1, 8, &hints).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_permutations, bench_pack);
criterion_main!(benches);
