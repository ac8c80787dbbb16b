//! Benchmarks for the sine-minus-triangle overshoot wrap.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multiwt::ClipMode;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        // Overshooting signal in [-2, 2] so both branches are taken
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin() * 2.0).collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("upper_only", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = ClipMode::UpperOnly.apply(black_box(x));
                }
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("symmetric", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = ClipMode::Symmetric.apply(black_box(x));
                }
            })
        });
    }

    group.finish();
}
