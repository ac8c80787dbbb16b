//! Control-surface adapter.
//!
//! Sits between whatever UI exists and the shared [`PlaybackState`]. All
//! range checking happens here, so the engine can trust every value it
//! reads.

use log::debug;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::{config::GlideMode, dsp::Waveform, synth::state::PlaybackState};

/// Frequency control range (Hz).
pub const FREQUENCY_RANGE: RangeInclusive<f64> = 10.0..=1000.0;
/// Amplitude control range; the stored gain is half the control level.
pub const LEVEL_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// What a UI needs to draw the current settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    pub frequency: f64,
    pub target_frequency: f64,
    /// Control level in [0, 1] (twice the gain)
    pub level: f64,
    pub waveform: Waveform,
}

impl ControlSnapshot {
    pub fn label(&self) -> &'static str {
        self.waveform.label()
    }
}

#[derive(Debug, Clone)]
pub struct ControlSurface {
    state: Arc<PlaybackState>,
    glide: GlideMode,
}

impl ControlSurface {
    pub fn new(state: Arc<PlaybackState>, glide: GlideMode) -> Self {
        Self { state, glide }
    }

    pub fn state(&self) -> &Arc<PlaybackState> {
        &self.state
    }

    /// Frequency slider.
    ///
    /// With [`GlideMode::Literal`] the renderer never walks `current` towards
    /// the target, so the slider writes `current` directly. With
    /// [`GlideMode::Converging`] it sets the target and the renderer ramps.
    pub fn set_frequency(&self, hz: f64) {
        let hz = clamp(hz, FREQUENCY_RANGE);
        match self.glide {
            GlideMode::Literal => self.state.set_current_frequency(hz),
            GlideMode::Converging => self.state.set_target_frequency(hz),
        }
        debug!("frequency -> {hz:.1} Hz");
    }

    pub fn set_target_frequency(&self, hz: f64) {
        let hz = clamp(hz, FREQUENCY_RANGE);
        self.state.set_target_frequency(hz);
        debug!("target frequency -> {hz:.1} Hz");
    }

    /// Amplitude slider, level in [0, 1].
    pub fn set_amplitude_level(&self, level: f64) {
        let level = clamp(level, LEVEL_RANGE);
        self.state.set_amplitude(level / 2.0);
        debug!("amplitude level -> {level:.2}");
    }

    /// Waveform selector, 1..=9. Anything else is ignored.
    pub fn select(&self, selector: u8) -> bool {
        match Waveform::from_selector(selector) {
            Some(waveform) => {
                self.state.select_waveform(waveform);
                debug!("waveform -> {}", waveform.label());
                true
            }
            None => false,
        }
    }

    /// Frequency the slider currently shows.
    pub fn frequency(&self) -> f64 {
        match self.glide {
            GlideMode::Literal => self.state.current_frequency(),
            GlideMode::Converging => self.state.target_frequency(),
        }
    }

    pub fn level(&self) -> f64 {
        self.state.amplitude() * 2.0
    }

    pub fn step_frequency(&self, delta_hz: f64) {
        self.set_frequency(self.frequency() + delta_hz);
    }

    pub fn step_amplitude(&self, delta: f64) {
        self.set_amplitude_level(self.level() + delta);
    }

    /// Move `steps` positions through the selector, wrapping at both ends.
    pub fn cycle_waveform(&self, steps: i32) {
        let count = Waveform::ALL.len() as i32;
        let current = self.state.waveform().selector() as i32 - 1;
        let next = (current + steps).rem_euclid(count);
        self.select(next as u8 + 1);
    }

    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            frequency: self.state.current_frequency(),
            target_frequency: self.state.target_frequency(),
            level: self.level(),
            waveform: self.state.waveform(),
        }
    }
}

fn clamp(value: f64, range: RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}
