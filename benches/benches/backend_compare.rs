//! Backend Comparison Benchmark
//!
//! Pits the dispatcher-selected kernel against the forced portable kernel on
//! the same inputs. On AES-NI machines this shows the hardware speedup; on
//! anything else the two series coincide.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use nocturne::{hash_with_kernel, kernels, Scratchpad, Variant};
use rand::prelude::*;
use std::hint::black_box;

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Backend");
    group.sample_size(10);

    let mut blob = vec![0u8; 76];
    rand::rng().fill(&mut blob[..]);

    let mut pad = Scratchpad::new(Variant::Light).unwrap();

    group.bench_function("auto", |b| {
        b.iter(|| nocturne::hash_with_scratchpad(black_box(&blob), &mut pad));
    });

    group.bench_function("portable", |b| {
        b.iter(|| hash_with_kernel(black_box(&blob), &mut pad, kernels::portable::transform));
    });

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
