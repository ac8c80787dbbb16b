// Purpose: playback state, the block renderer, and the control-side adapter
// This layer sits above the dsp primitives and owns everything stateful

pub mod control;
pub mod engine;
pub mod state;

pub use control::{ControlSnapshot, ControlSurface};
pub use engine::SynthesisEngine;
pub use state::PlaybackState;
