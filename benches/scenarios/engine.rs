//! Benchmarks for complete engine blocks.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use multiwt::{EngineConfig, GlideMode, PlaybackState, SynthesisEngine, Waveform};

use crate::BLOCK_SIZES;

fn engine(glide: GlideMode, waveform: Waveform) -> Option<SynthesisEngine> {
    let state = Arc::new(PlaybackState::new(440.0, 0.5, waveform));
    let config = EngineConfig::default().with_glide(glide).with_seed(7);
    let mut engine = SynthesisEngine::new(config, state).ok()?;
    engine.configure(48_000.0, 512).ok()?;
    Some(engine)
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        // Steady tone, frequency already at target
        if let Some(mut engine) = engine(GlideMode::Literal, Waveform::Sine) {
            group.bench_with_input(BenchmarkId::new("steady_sine", size), &size, |b, _| {
                b.iter(|| {
                    engine.render_block(black_box(&mut left), black_box(&mut right));
                })
            });
        }

        // Target moves every block, literal glide
        if let Some(mut engine) = engine(GlideMode::Literal, Waveform::SineMinusTriangle) {
            let mut flip = false;
            group.bench_with_input(BenchmarkId::new("literal_sweep", size), &size, |b, _| {
                b.iter(|| {
                    flip = !flip;
                    engine.state().set_target_frequency(if flip { 880.0 } else { 220.0 });
                    engine.render_block(black_box(&mut left), black_box(&mut right));
                })
            });
        }

        // Target moves every block, converging glide writes back each sample
        if let Some(mut engine) = engine(GlideMode::Converging, Waveform::Saw) {
            let mut flip = false;
            group.bench_with_input(BenchmarkId::new("converging_sweep", size), &size, |b, _| {
                b.iter(|| {
                    flip = !flip;
                    engine.state().set_target_frequency(if flip { 880.0 } else { 220.0 });
                    engine.render_block(black_box(&mut left), black_box(&mut right));
                })
            });
        }

        // Render plus scope delivery
        if let Some(mut engine) = engine(GlideMode::Literal, Waveform::Grind) {
            let mut scope: Vec<f32> = Vec::with_capacity(size * 4);
            group.bench_with_input(BenchmarkId::new("render_into_scope", size), &size, |b, _| {
                b.iter(|| {
                    scope.clear();
                    engine.render_into(black_box(&mut left), black_box(&mut right), &mut scope);
                })
            });
        }
    }

    group.finish();
}
