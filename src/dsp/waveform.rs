#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ClipMode;
use crate::dsp::wavetable::{TableShape, WavetableBank};

/*
Selectable Waveforms
====================

Nine sounds are built from the seven tables. Most are a single table scaled
by the amplitude; two combine the sine and triangle tables at the same index.

  #  Name              Output
  -  ----------------  -------------------------------------------------
  1  SINE              sine[i] * amp
  2  TRIANGLE          triangle[i] * amp
  3  SQUARE            square[i] * amp / 2.5
  4  SINE * TRIANGLE   sine[i] * triangle[i] * amp
  5  SINE - TRIANGLE   wrap((sine[i] - triangle[i]) * amp * 2)
  6  GRIND             grind[i] * amp
  7  SINE, %3 = 0      sine_mod_three[i] * amp
  8  SINE, %7 = 0      sine_mod_seven[i] * amp
  9  SAW               saw[i] * amp

The square is attenuated because at equal peak level it sounds much louder
than the others.

SINE * TRIANGLE is ring modulation of two signals in phase: both cross zero
together, so the product stays positive-heavy and doubles the fundamental.

SINE - TRIANGLE is close to zero over most of the cycle (the two shapes
nearly agree) and bulges where they diverge. The x2 gain pushes the bulge over
unity; see `dsp/distortion.rs` for how that overshoot is wrapped.

Every variant is its own branch. Selecting SINE - TRIANGLE never leaks into
GRIND.
*/

/// One of the nine selectable waveforms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    Square,
    SineTimesTriangle,
    SineMinusTriangle,
    Grind,
    SineModThree,
    SineModSeven,
    Saw,
}

impl Waveform {
    /// All variants in selector order (1..=9).
    pub const ALL: [Waveform; 9] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Square,
        Waveform::SineTimesTriangle,
        Waveform::SineMinusTriangle,
        Waveform::Grind,
        Waveform::SineModThree,
        Waveform::SineModSeven,
        Waveform::Saw,
    ];

    /// Map a 1-based selector to a waveform.
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1..=9 => Some(Self::ALL[selector as usize - 1]),
            _ => None,
        }
    }

    /// 1-based selector for this waveform.
    pub fn selector(self) -> u8 {
        match self {
            Waveform::Sine => 1,
            Waveform::Triangle => 2,
            Waveform::Square => 3,
            Waveform::SineTimesTriangle => 4,
            Waveform::SineMinusTriangle => 5,
            Waveform::Grind => 6,
            Waveform::SineModThree => 7,
            Waveform::SineModSeven => 8,
            Waveform::Saw => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Waveform::Sine => "SINE",
            Waveform::Triangle => "TRIANGLE",
            Waveform::Square => "SQUARE",
            Waveform::SineTimesTriangle => "SINE * TRIANGLE",
            Waveform::SineMinusTriangle => "SINE - TRIANGLE",
            Waveform::Grind => "GRIND",
            Waveform::SineModThree => "SINE, %3 = 0",
            Waveform::SineModSeven => "SINE, %7 = 0",
            Waveform::Saw => "SAW",
        }
    }

    /// Output sample at table index `index` (already truncated from the
    /// phase; wrapped here).
    #[inline]
    pub fn sample(self, bank: &WavetableBank, index: usize, amplitude: f64, clip: ClipMode) -> f32 {
        let read = |shape: TableShape| bank.table(shape).at(index);
        match self {
            Waveform::Sine => (read(TableShape::Sine) * amplitude) as f32,
            Waveform::Triangle => (read(TableShape::Triangle) * amplitude) as f32,
            Waveform::Square => (read(TableShape::Square) * (amplitude / 2.5)) as f32,
            Waveform::SineTimesTriangle => {
                (read(TableShape::Sine) * read(TableShape::Triangle) * amplitude) as f32
            }
            Waveform::SineMinusTriangle => {
                let raw = (read(TableShape::Sine) - read(TableShape::Triangle)) * (amplitude * 2.0);
                clip.apply(raw as f32)
            }
            Waveform::Grind => (read(TableShape::Grind) * amplitude) as f32,
            Waveform::SineModThree => (read(TableShape::SineModThree) * amplitude) as f32,
            Waveform::SineModSeven => (read(TableShape::SineModSeven) * amplitude) as f32,
            Waveform::Saw => (read(TableShape::Saw) * amplitude) as f32,
        }
    }
}
