//! Criterion micro-benchmarks for sequence append, indexed reads, and
//! mixed stack workloads.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gapless::GrowSeq;
use gapless_bench::{mixed_workload, run_stack};

/// Append throughput starting from a cold, capacity-1 sequence.
///
/// Covers the full doubling schedule, so growth cost is included.
fn bench_append_cold(c: &mut Criterion) {
    c.bench_function("append_64k_cold", |b| {
        b.iter(|| {
            let mut seq = GrowSeq::new();
            for v in 0..65_536u64 {
                seq.append(black_box(v)).unwrap();
            }
            black_box(seq.len())
        })
    });
}

/// Append throughput with the capacity pre-reserved (no growth steps).
fn bench_append_reserved(c: &mut Criterion) {
    c.bench_function("append_64k_reserved", |b| {
        b.iter(|| {
            let mut seq = GrowSeq::with_capacity(65_536);
            for v in 0..65_536u64 {
                seq.append(black_box(v)).unwrap();
            }
            black_box(seq.len())
        })
    });
}

/// Sequential indexed reads over a pre-built sequence.
fn bench_get_sequential(c: &mut Criterion) {
    let mut seq = GrowSeq::new();
    for v in 0..65_536u64 {
        seq.append(v).unwrap();
    }

    c.bench_function("get_64k_sequential", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..seq.len() {
                sum = sum.wrapping_add(*seq.get(black_box(i)).unwrap());
            }
            black_box(sum)
        })
    });
}

/// Deterministic mixed push/pop workload on the stack adapter.
fn bench_stack_mixed(c: &mut Criterion) {
    let ops = mixed_workload(42, 100_000);

    c.bench_function("stack_mixed_100k", |b| {
        b.iter(|| black_box(run_stack(black_box(&ops))))
    });
}

criterion_group!(
    benches,
    bench_append_cold,
    bench_append_reserved,
    bench_get_sequential,
    bench_stack_mixed
);
criterion_main!(benches);
