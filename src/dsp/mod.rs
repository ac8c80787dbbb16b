//! Low-level DSP primitives used by the synthesis engine.
//!
//! Tables are built off the audio thread; everything that runs per sample
//! here is allocation-free and realtime-safe.

/// Wrap clipping for overshooting waveforms.
pub mod distortion;
/// Phase accumulator and glide step.
pub mod phase;
/// The nine selectable waveforms and their sample formulas.
pub mod waveform;
/// Wavetable storage and the seven-table bank.
pub mod wavetable;

pub use phase::PhaseAccumulator;
pub use waveform::Waveform;
pub use wavetable::{TableShape, WaveTable, WavetableBank};
