//! ButterKnife Criterion Benchmark
//!
//! One-shot eval latency plus a backend comparison (dispatched vs forced
//! portable vs forced AES-NI).

#![allow(unsafe_code)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

fn random_block() -> [u8; 16] {
    let mut block = [0u8; 16];
    rand::rng().fill(&mut block[..]);
    block
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot-path latency of a single evaluation (128 bytes out per call).
fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Eval");
    group.throughput(Throughput::Bytes(128));

    let message = random_block();
    let tweak = random_block();
    let key = random_block();

    group.bench_function("dispatched", |b| {
        b.iter(|| butterknife::eval(black_box(&message), black_box(&tweak), black_box(&key)));
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BACKEND COMPARE
// =============================================================================

/// Forced-backend comparison; the AES-NI entry only runs where supported.
fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Backends");
    group.throughput(Throughput::Bytes(128));

    let message = random_block();
    let tweak = random_block();
    let key = random_block();

    group.bench_function("portable", |b| {
        b.iter(|| {
            let mut out = [0u8; 128];
            butterknife::kernels::portable::eval(
                black_box(&message),
                black_box(&tweak),
                black_box(&key),
                &mut out,
            );
            out
        });
    });

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
        group.bench_function("aesni", |b| {
            b.iter(|| {
                let mut out = [0u8; 128];
                unsafe {
                    butterknife::kernels::aesni::eval(
                        black_box(&message),
                        black_box(&tweak),
                        black_box(&key),
                        &mut out,
                    );
                }
                out
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_eval, bench_backends);
criterion_main!(benches);
