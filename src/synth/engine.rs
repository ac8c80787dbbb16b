use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

use crate::{
    config::{validate_device, ConfigError, EngineConfig, GlideMode},
    dsp::{phase::glide_frequency, PhaseAccumulator, WavetableBank},
    io::BlockSink,
    synth::state::PlaybackState,
};

/// Monophonic wavetable renderer.
///
/// Owns the table bank and the phase; reads frequency, amplitude and
/// waveform from a [`PlaybackState`] shared with the control side.
///
/// Lifecycle: [`new`](Self::new) on any thread, then
/// [`configure`](Self::configure) whenever the device sample rate or block
/// size changes (this is where tables get built), then
/// [`render_block`](Self::render_block) from the audio callback.
pub struct SynthesisEngine {
    config: EngineConfig,
    state: Arc<PlaybackState>,
    bank: Option<WavetableBank>,
    phase: PhaseAccumulator,
    sample_rate: f64,
    block_size_hint: usize,
}

impl SynthesisEngine {
    pub fn new(config: EngineConfig, state: Arc<PlaybackState>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            phase: PhaseAccumulator::new(config.table_size),
            config,
            state,
            bank: None,
            sample_rate: 0.0,
            block_size_hint: 0,
        })
    }

    /// Prepare for playback at `sample_rate`.
    ///
    /// Resets the phase, sets current and target frequency to the slider
    /// value (current under [`GlideMode::Literal`], target under
    /// [`GlideMode::Converging`]) and rebuilds every table. Safe to call again on a device change. Nothing
    /// is modified if the parameters are rejected.
    pub fn configure(&mut self, sample_rate: f64, block_size_hint: usize) -> Result<(), ConfigError> {
        validate_device(sample_rate, block_size_hint)?;

        let bank = match self.config.seed {
            Some(seed) => WavetableBank::build_with_rng(self.config.table_size, &mut StdRng::seed_from_u64(seed))?,
            None => WavetableBank::build(self.config.table_size)?,
        };

        self.bank = Some(bank);
        self.phase = PhaseAccumulator::new(self.config.table_size);
        self.sample_rate = sample_rate;
        self.block_size_hint = block_size_hint;
        // Keep whichever field the frequency slider writes in this mode
        match self.config.glide {
            GlideMode::Literal => self.state.settle_on_current(),
            GlideMode::Converging => self.state.snap_to_target(),
        }

        info!(
            "wavetable engine configured: {} Hz, block hint {}, table size {}, glide {:?}, clip {:?}",
            sample_rate, block_size_hint, self.config.table_size, self.config.glide, self.config.clip
        );
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.bank.is_some()
    }

    /// Fill `left` and `right` with the next block.
    ///
    /// Both channels get the same mono signal. Every sample of both buffers
    /// is written: silence before `configure`, and zeros past the end of the
    /// shorter buffer if the lengths differ.
    pub fn render_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        let frames = left.len().min(right.len());
        left[frames..].fill(0.0);
        right[frames..].fill(0.0);

        let Some(bank) = self.bank.as_ref() else {
            left.fill(0.0);
            right.fill(0.0);
            return;
        };
        if frames == 0 {
            return;
        }

        let block_len = frames as f64;
        let state = &*self.state;
        let clip = self.config.clip;

        for (n, (l, r)) in left.iter_mut().zip(right.iter_mut()).enumerate() {
            let value = state
                .waveform()
                .sample(bank, self.phase.index(), state.amplitude(), clip);
            *l = value;
            *r = value;

            let divisor = match self.config.glide {
                GlideMode::Literal => block_len,
                GlideMode::Converging => (frames - n) as f64,
            };
            step(&mut self.phase, state, self.config.glide, self.sample_rate, divisor);
        }
    }

    /// Render a block, then hand it to `sink` (visualiser, meter, ...).
    pub fn render_into<S: BlockSink + ?Sized>(&mut self, left: &mut [f32], right: &mut [f32], sink: &mut S) {
        self.render_block(left, right);
        sink.push_block(left, right);
    }

    /// Advance one sample outside of `render_block`, with `block_len` as the
    /// glide divisor.
    pub fn advance(&mut self, block_len: f64) {
        // NaN fails both checks
        let usable = block_len.is_finite() && block_len > 0.0;
        if self.bank.is_none() || !usable {
            return;
        }
        step(&mut self.phase, &self.state, self.config.glide, self.sample_rate, block_len);
    }

    pub fn state(&self) -> &Arc<PlaybackState> {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tables from the last `configure`, if any.
    pub fn bank(&self) -> Option<&WavetableBank> {
        self.bank.as_ref()
    }

    pub fn phase(&self) -> &PhaseAccumulator {
        &self.phase
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn block_size_hint(&self) -> usize {
        self.block_size_hint
    }
}

/// One sample of frequency glide and phase advance.
#[inline]
fn step(phase: &mut PhaseAccumulator, state: &PlaybackState, glide: GlideMode, sample_rate: f64, divisor: f64) {
    let current = state.current_frequency();
    let target = state.target_frequency();
    let frequency = match glide {
        GlideMode::Literal => glide_frequency(current, target, divisor),
        GlideMode::Converging => {
            let next = if divisor <= 1.0 {
                target
            } else {
                glide_frequency(current, target, divisor)
            };
            if next != current {
                state.set_current_frequency(next);
            }
            next
        }
    };
    phase.advance(frequency, sample_rate);
}
