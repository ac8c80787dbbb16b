//! Benchmarks for table construction and per-waveform lookup.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multiwt::{dsp::PhaseAccumulator, ClipMode, Waveform, WavetableBank};
use rand::{rngs::StdRng, SeedableRng};

use crate::BLOCK_SIZES;

/// Bank build runs on every `configure`, never on the audio thread
pub fn bench_wavetable_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/wavetable_build");

    for &size in &[256usize, 1024, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                WavetableBank::build_with_rng(black_box(size), &mut rng)
            })
        });
    }

    group.finish();
}

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/waveform");
    let mut rng = StdRng::seed_from_u64(7);
    let Ok(bank) = WavetableBank::build_with_rng(1024, &mut rng) else {
        return;
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for waveform in Waveform::ALL {
            let mut phase = PhaseAccumulator::new(bank.size());
            group.bench_with_input(BenchmarkId::new(waveform.label(), size), &size, |b, _| {
                b.iter(|| {
                    for out in buffer.iter_mut() {
                        *out = waveform.sample(&bank, phase.index(), black_box(0.5), ClipMode::UpperOnly);
                        phase.advance(440.0, 48_000.0);
                    }
                    black_box(&buffer);
                })
            });
        }
    }

    group.finish();
}
