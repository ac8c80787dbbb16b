//! Benchmarks for low-level DSP primitives.

mod distortion;
mod wavetable;

pub use distortion::bench_distortion;
pub use wavetable::{bench_waveform, bench_wavetable_build};
