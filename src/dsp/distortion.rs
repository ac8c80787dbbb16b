//! Wrap clipping for the `SINE - TRIANGLE` waveform.
//!
//! Doubling the difference of a sine and a triangle pushes peaks past unity.
//! Instead of clamping, the overshoot is wrapped: the integer part is dropped
//! and what remains is halved.
//!
//!   f(x) = fmod(x, 1.0) * 0.5     when x > 1.0
//!
//!   1.4  ->  0.2
//!   1.9  ->  0.45
//!   2.0  ->  0.0
//!
//! The result drops abruptly as the input crosses 1.0, which gives the
//! waveform its buzzy edge. Only the upper bound is wrapped by default;
//! the negative half of the waveform is left to overshoot.

use crate::config::ClipMode;

/// Wrap values above 1.0; everything else passes through.
#[inline]
pub fn wrap_upper(sample: f32) -> f32 {
    if sample > 1.0 {
        (sample % 1.0) * 0.5
    } else {
        sample
    }
}

/// Wrap values beyond either bound. `%` keeps the sign of the input, so the
/// negative side mirrors the positive one.
#[inline]
pub fn wrap_symmetric(sample: f32) -> f32 {
    if sample > 1.0 || sample < -1.0 {
        (sample % 1.0) * 0.5
    } else {
        sample
    }
}

impl ClipMode {
    #[inline]
    pub fn apply(self, sample: f32) -> f32 {
        match self {
            ClipMode::UpperOnly => wrap_upper(sample),
            ClipMode::Symmetric => wrap_symmetric(sample),
        }
    }
}
