pub mod config; // Engine options and configuration errors
pub mod dsp; // Wavetables and per-sample primitives
pub mod io; // Device buffers and visualiser delivery
pub mod synth; // Playback state, rendering, control surface

pub use config::{ClipMode, ConfigError, EngineConfig, GlideMode};
pub use dsp::{TableShape, WaveTable, Waveform, WavetableBank};
pub use synth::{ControlSurface, PlaybackState, SynthesisEngine};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub const DEFAULT_TABLE_SIZE: usize = 1024;
