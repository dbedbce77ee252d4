//! Criterion micro-benchmarks for single and batch append.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sliver_bench::{filled, with_headroom, LARGE, SMALL};
use sliver_store::SliceView;

/// Benchmark: LARGE one-at-a-time appends from empty (amortised growth).
fn bench_push_from_empty(c: &mut Criterion) {
    c.bench_function("push_from_empty_100k", |b| {
        b.iter(|| {
            let mut v = SliceView::<u64>::new();
            for i in 0..LARGE as u64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: in-place append into spare capacity (no allocation).
fn bench_append_in_place(c: &mut Criterion) {
    let v = with_headroom(SMALL);
    c.bench_function("append_in_place", |b| {
        b.iter(|| black_box(v.append(black_box(7))));
    });
}

/// Benchmark: append on a full view (reallocate + copy every time).
fn bench_append_detach(c: &mut Criterion) {
    let v = filled(SMALL);
    c.bench_function("append_detach_512", |b| {
        b.iter(|| black_box(v.append(black_box(7))));
    });
}

/// Benchmark: one batch of SMALL elements vs SMALL single appends.
fn bench_batch_vs_single(c: &mut Criterion) {
    let src = filled(SMALL);
    c.bench_function("extend_batch_512", |b| {
        b.iter(|| black_box(SliceView::<u64>::new().append_view(&src)));
    });
    c.bench_function("append_single_512", |b| {
        b.iter(|| {
            let mut v = SliceView::<u64>::new();
            for x in &src {
                v.push(x);
            }
            black_box(v)
        });
    });
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_append_in_place,
    bench_append_detach,
    bench_batch_vs_single
);
criterion_main!(benches);
