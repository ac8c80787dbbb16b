//! Engine configuration.
//!
//! Everything here is decided once, before audio starts, and validated up
//! front so the render path never has to deal with a bad value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DEFAULT_TABLE_SIZE;

/// How the phase advance treats a pending frequency change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlideMode {
    /// Every sample uses `current + (target - current) / block_len` as its
    /// frequency and never moves `current`. The glide never completes: the
    /// pitch sits one block-length fraction of the way towards the target
    /// until `current` is changed from outside.
    #[default]
    Literal,
    /// Linear ramp that writes the stepped frequency back as `current`,
    /// dividing by the samples left in the block, so the target is reached
    /// exactly on the last sample of the block.
    Converging,
}

/// Overflow handling for the `SINE - TRIANGLE` waveform.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipMode {
    /// Values above 1.0 are wrapped and halved; values below -1.0 pass
    /// through untouched.
    #[default]
    UpperOnly,
    /// Same wrap applied to both bounds.
    Symmetric,
}

/// Static engine configuration.
///
/// Sample rate and block size are not part of this struct; they come from the
/// audio device and are handed to [`SynthesisEngine::configure`].
///
/// [`SynthesisEngine::configure`]: crate::synth::SynthesisEngine::configure
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Length of every table in the bank.
    pub table_size: usize,
    pub glide: GlideMode,
    pub clip: ClipMode,
    /// Seed for the noise in the `GRIND` table. `None` seeds from the OS, so
    /// every rebuild sounds slightly different.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            glide: GlideMode::default(),
            clip: ClipMode::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    pub fn with_glide(mut self, glide: GlideMode) -> Self {
        self.glide = glide;
        self
    }

    pub fn with_clip(mut self, clip: ClipMode) -> Self {
        self.clip = clip;
        self
    }

    /// Make the `GRIND` table reproducible across builds.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        Ok(())
    }
}

/// Check the device-provided half of the configuration.
pub(crate) fn validate_device(sample_rate: f64, block_size_hint: usize) -> Result<(), ConfigError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(ConfigError::InvalidSampleRate(sample_rate));
    }
    if block_size_hint == 0 {
        return Err(ConfigError::ZeroBlockSize);
    }
    Ok(())
}

/// Errors raised while configuring tables or the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Wavetables need at least one sample
    ZeroTableSize,
    /// Sample rate must be finite and positive
    InvalidSampleRate(f64),
    /// Block size hint must be at least one sample
    ZeroBlockSize,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroTableSize => write!(f, "wavetable size must be greater than zero"),
            ConfigError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be finite and positive, got {}", rate)
            }
            ConfigError::ZeroBlockSize => write!(f, "block size hint must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
