//! Playback parameters shared between the control thread and the audio thread.
//!
//! Every field is its own atomic. There is no lock and no multi-field
//! consistency: the renderer reads each value independently per sample, so a
//! change may land mid-block but can never tear.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use crate::dsp::Waveform;

/// Frequency the control surface starts at (Hz).
pub const DEFAULT_FREQUENCY: f64 = 90.0;

/// `f64` stored as raw bits.
#[derive(Debug)]
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

#[derive(Debug)]
pub struct PlaybackState {
    current_frequency: AtomicF64,
    target_frequency: AtomicF64,
    amplitude: AtomicF64,
    waveform: AtomicU8,
}

impl PlaybackState {
    pub fn new(frequency: f64, amplitude: f64, waveform: Waveform) -> Self {
        Self {
            current_frequency: AtomicF64::new(frequency),
            target_frequency: AtomicF64::new(frequency),
            amplitude: AtomicF64::new(amplitude),
            waveform: AtomicU8::new(waveform.selector()),
        }
    }

    /// Set the frequency the renderer glides towards. `current` is untouched.
    pub fn set_target_frequency(&self, hz: f64) {
        self.target_frequency.store(hz);
    }

    pub fn target_frequency(&self) -> f64 {
        self.target_frequency.load()
    }

    /// Overwrite the frequency the renderer is playing right now.
    pub fn set_current_frequency(&self, hz: f64) {
        self.current_frequency.store(hz);
    }

    pub fn current_frequency(&self) -> f64 {
        self.current_frequency.load()
    }

    /// Jump straight to the target, ending any glide.
    pub fn snap_to_target(&self) {
        self.current_frequency.store(self.target_frequency.load());
    }

    /// Make the current frequency the target, ending any glide where it is.
    pub fn settle_on_current(&self) {
        self.target_frequency.store(self.current_frequency.load());
    }

    /// Output gain, applied from the next sample on. Not smoothed.
    pub fn set_amplitude(&self, gain: f64) {
        self.amplitude.store(gain);
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude.load()
    }

    pub fn select_waveform(&self, waveform: Waveform) {
        self.waveform.store(waveform.selector(), Ordering::Relaxed);
    }

    pub fn waveform(&self) -> Waveform {
        // Only `select_waveform` writes here, so the selector is always valid
        Waveform::from_selector(self.waveform.load(Ordering::Relaxed)).unwrap_or_default()
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY, 0.0, Waveform::Sine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn defaults_match_control_surface() {
        let state = PlaybackState::default();
        assert_eq!(state.current_frequency(), 90.0);
        assert_eq!(state.target_frequency(), 90.0);
        assert_eq!(state.amplitude(), 0.0);
        assert_eq!(state.waveform(), Waveform::Sine);
    }

    #[test]
    fn target_does_not_move_current() {
        let state = PlaybackState::default();
        state.set_target_frequency(440.0);
        assert_eq!(state.target_frequency(), 440.0);
        assert_eq!(state.current_frequency(), 90.0);
        state.snap_to_target();
        assert_eq!(state.current_frequency(), 440.0);
    }

    #[test]
    fn settle_keeps_current() {
        let state = PlaybackState::default();
        state.set_current_frequency(330.0);
        state.settle_on_current();
        assert_eq!(state.target_frequency(), 330.0);
        assert_eq!(state.current_frequency(), 330.0);
    }

    #[test]
    fn every_waveform_survives_the_atomic() {
        let state = PlaybackState::default();
        for waveform in Waveform::ALL {
            state.select_waveform(waveform);
            assert_eq!(state.waveform(), waveform);
        }
    }

    #[test]
    fn updates_are_visible_across_threads() {
        let state = Arc::new(PlaybackState::default());
        let writer = {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                state.set_amplitude(0.25);
                state.set_target_frequency(123.5);
                state.select_waveform(Waveform::Saw);
            })
        };
        writer.join().unwrap();
        assert_eq!(state.amplitude(), 0.25);
        assert_eq!(state.target_frequency(), 123.5);
        assert_eq!(state.waveform(), Waveform::Saw);
    }
}
