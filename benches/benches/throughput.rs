//! Nocturne Criterion Benchmark
//!
//! Hashrate measurements for both variants. Throughput here is hashes per
//! second, not bytes: the input is a fixed-size proof-of-work blob and the
//! cost lives in the scratchpad loop.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use nocturne::{Scratchpad, Variant};
use rand::prelude::*;
use std::hint::black_box;

/// Typical block-template blob size.
const BLOB_SIZE: usize = 76;

// =============================================================================
// BENCHMARK 1: ONE-SHOT
// =============================================================================

/// Cost of a cold hash, scratchpad allocation included.
fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Oneshot");
    group.sample_size(10);

    let mut blob = vec![0u8; BLOB_SIZE];
    rand::rng().fill(&mut blob[..]);

    for variant in [Variant::Full, Variant::Light] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{variant:?}")),
            &blob,
            |b, data| b.iter(|| nocturne::hash(black_box(data), variant)),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: MINING LOOP
// =============================================================================

/// Steady-state hashrate with a reused scratchpad and a rolling nonce.
fn bench_mining_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Mining-Loop");
    group.sample_size(10);

    let mut blob = vec![0u8; BLOB_SIZE];
    rand::rng().fill(&mut blob[..]);

    for variant in [Variant::Full, Variant::Light] {
        let mut pad = Scratchpad::new(variant).unwrap();
        let mut nonce = 0u32;

        group.bench_function(
            criterion::BenchmarkId::from_parameter(format!("{variant:?}")),
            |b| {
                b.iter(|| {
                    blob[BLOB_SIZE - 4..].copy_from_slice(&nonce.to_le_bytes());
                    nonce = nonce.wrapping_add(1);
                    nocturne::hash_with_scratchpad(black_box(&blob), &mut pad)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_oneshot, bench_mining_loop);
criterion_main!(benches);
