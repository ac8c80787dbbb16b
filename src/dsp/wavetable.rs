use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::config::ConfigError;

/*
Wavetables
==========

A wavetable is one period of a waveform, sampled once and stored. Playing a
tone means walking through the table over and over; the faster you walk, the
higher the pitch.

Vocabulary
----------

  table size  Number of samples in one period (N). Every table in a bank
              has the same N, so index k always means "k/N of the way
              through the cycle", whichever table you read.

  phase       Position in the table, in samples. Fractional while it
              accumulates, truncated to an integer when read.

  increment   How far the phase moves per output sample:
                  increment = frequency * N / sample_rate
              440 Hz with N = 1024 at 48 kHz moves ~9.39 samples per step.


The Bank
--------

    SINE            sin(2*pi*k/N)
    TRIANGLE        running sum, +4/N, then -4/N, then +4/N again
    SQUARE          +1 for the first half, -1 for the second
    SAW             -1 rising by 2/N per sample
    GRIND           sine on every third sample, noise in [0,1) in between
    SINE %3         sine on every third sample, silence in between
    SINE %7         sine on every seventh sample, silence in between

The last three are not band-limited in any sense. Gating a sine on an index
modulus produces a comb of partials whose spacing depends on the table size,
so their timbre shifts a lot as the pitch moves. That is the point.

Reading
-------

No interpolation: the phase is truncated (never rounded) and wrapped modulo N.
Aliasing is audible on the bright tables and accepted.
*/

/// The seven tables held by a [`WavetableBank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableShape {
    Sine,
    Triangle,
    Square,
    Saw,
    /// Noise-gated sine
    Grind,
    SineModThree,
    SineModSeven,
}

impl TableShape {
    pub const ALL: [TableShape; 7] = [
        TableShape::Sine,
        TableShape::Triangle,
        TableShape::Square,
        TableShape::Saw,
        TableShape::Grind,
        TableShape::SineModThree,
        TableShape::SineModSeven,
    ];
}

/// One period of a waveform. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveTable {
    samples: Box<[f64]>,
}

impl WaveTable {
    fn from_fn(size: usize, f: impl FnMut(usize) -> f64) -> Self {
        Self {
            samples: (0..size).map(f).collect(),
        }
    }

    /// Build a table from a running total: `value` is written first, then
    /// `step(k)` is added for the next index.
    fn accumulate(size: usize, start: f64, mut step: impl FnMut(usize) -> f64) -> Self {
        let mut running = start;
        Self::from_fn(size, |k| {
            let value = running;
            running += step(k);
            value
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, wrapped modulo the table length.
    #[inline]
    pub fn at(&self, index: usize) -> f64 {
        self.samples[index % self.samples.len()]
    }

    /// Sample at a fractional phase: truncated towards zero, then wrapped.
    #[inline]
    pub fn lookup(&self, phase: f64) -> f64 {
        self.at(phase as usize)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

#[inline]
fn sine_at(k: usize, size: usize) -> f64 {
    (TAU * k as f64 / size as f64).sin()
}

/// Fixed set of index-aligned tables sharing one length.
#[derive(Debug, Clone)]
pub struct WavetableBank {
    size: usize,
    sine: WaveTable,
    triangle: WaveTable,
    square: WaveTable,
    saw: WaveTable,
    grind: WaveTable,
    sine_mod_three: WaveTable,
    sine_mod_seven: WaveTable,
}

impl WavetableBank {
    /// Build all seven tables, drawing the `GRIND` noise from an OS-seeded
    /// generator.
    pub fn build(size: usize) -> Result<Self, ConfigError> {
        Self::build_with_rng(size, &mut StdRng::from_os_rng())
    }

    /// Build all seven tables with a caller-supplied noise source.
    pub fn build_with_rng<R: Rng>(size: usize, rng: &mut R) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }

        let n = size as f64;
        // Segment edges are integer quarters; only the step is fractional
        let quarter = size / 4;
        let half = size / 2;
        let three_quarters = half + quarter;

        let sine = WaveTable::from_fn(size, |k| sine_at(k, size));

        let tri_step = 4.0 / n;
        let triangle = WaveTable::accumulate(size, 0.0, |k| {
            if k < quarter || k >= three_quarters {
                tri_step
            } else {
                -tri_step
            }
        });

        let square = WaveTable::from_fn(size, |k| if k < half { 1.0 } else { -1.0 });

        let saw_step = 2.0 / n;
        let saw = WaveTable::accumulate(size, -1.0, |_| saw_step);

        let grind = WaveTable::from_fn(size, |k| {
            if k % 3 != 0 {
                rng.random::<f32>() as f64
            } else {
                sine_at(k, size)
            }
        });

        let sine_mod_three = WaveTable::from_fn(size, |k| if k % 3 == 0 { sine_at(k, size) } else { 0.0 });
        let sine_mod_seven = WaveTable::from_fn(size, |k| if k % 7 == 0 { sine_at(k, size) } else { 0.0 });

        Ok(Self {
            size,
            sine,
            triangle,
            square,
            saw,
            grind,
            sine_mod_three,
            sine_mod_seven,
        })
    }

    /// Table length shared by every table in the bank.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn table(&self, shape: TableShape) -> &WaveTable {
        match shape {
            TableShape::Sine => &self.sine,
            TableShape::Triangle => &self.triangle,
            TableShape::Square => &self.square,
            TableShape::Saw => &self.saw,
            TableShape::Grind => &self.grind,
            TableShape::SineModThree => &self.sine_mod_three,
            TableShape::SineModSeven => &self.sine_mod_seven,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn bank(size: usize) -> WavetableBank {
        WavetableBank::build_with_rng(size, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn zero_size_fails_fast() {
        assert_eq!(
            WavetableBank::build(0).unwrap_err(),
            ConfigError::ZeroTableSize
        );
    }

    #[test]
    fn all_tables_share_length() {
        for size in [1, 3, 64, 1000, 1024] {
            let bank = bank(size);
            assert_eq!(bank.size(), size);
            for shape in TableShape::ALL {
                assert_eq!(bank.table(shape).len(), size, "{shape:?} at size {size}");
            }
        }
    }

    #[test]
    fn sine_hits_quadrature_points() {
        for size in [64, 256, 1024, 4096] {
            let sine = bank(size).table(TableShape::Sine).clone();
            assert_eq!(sine.at(0), 0.0);
            assert!((sine.at(size / 4) - 1.0).abs() < EPS);
            assert!(sine.at(size / 2).abs() < EPS);
            assert!((sine.at(3 * size / 4) + 1.0).abs() < EPS);
        }
    }

    #[test]
    fn triangle_peaks_and_is_monotonic_per_quarter() {
        let size = 1024;
        let bank = bank(size);
        let tri = bank.table(TableShape::Triangle).as_slice();

        assert_eq!(tri[0], 0.0);
        assert!((tri[size / 4] - 1.0).abs() < 1e-9);
        assert!((tri[3 * size / 4] + 1.0).abs() < 1e-9);

        let q = size / 4;
        assert!(tri[..=q].windows(2).all(|w| w[1] > w[0]));
        assert!(tri[q..=3 * q].windows(2).all(|w| w[1] < w[0]));
        assert!(tri[3 * q..].windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn triangle_turns_on_integer_quarters() {
        // 10 / 4 = 2 and 10 / 2 + 10 / 4 = 7, step 4 / 10
        let bank = bank(10);
        let tri = bank.table(TableShape::Triangle).as_slice();
        let expected = [0.0, 0.4, 0.8, 0.4, 0.0, -0.4, -0.8, -1.2, -0.8, -0.4];
        for (k, (&got, &want)) in tri.iter().zip(&expected).enumerate() {
            assert!((got - want).abs() < 1e-9, "triangle[{k}] = {got}, expected {want}");
        }

        // 6 / 4 = 1, 6 / 2 + 6 / 4 = 4
        let bank = self::bank(6);
        let tri = bank.table(TableShape::Triangle).as_slice();
        let step = 4.0 / 6.0;
        let expected = [0.0, step, 0.0, -step, -2.0 * step, -step];
        for (k, (&got, &want)) in tri.iter().zip(&expected).enumerate() {
            assert!((got - want).abs() < 1e-9, "triangle[{k}] = {got}, expected {want}");
        }
    }

    #[test]
    fn square_splits_at_half() {
        for size in [2, 5, 10, 1024] {
            let bank = bank(size);
            let square = bank.table(TableShape::Square).as_slice();
            assert!(square[..size / 2].iter().all(|&s| s == 1.0));
            assert!(square[size / 2..].iter().all(|&s| s == -1.0));
        }
    }

    #[test]
    fn saw_rises_strictly() {
        let size = 1024;
        let bank = bank(size);
        let saw = bank.table(TableShape::Saw).as_slice();
        assert_eq!(saw[0], -1.0);
        assert!(saw.windows(2).all(|w| w[1] > w[0]));
        let expected_last = 1.0 - 2.0 / size as f64;
        assert!((saw[size - 1] - expected_last).abs() < 1e-9);
    }

    #[test]
    fn modulus_tables_gate_the_sine() {
        let size = 1024;
        let bank = bank(size);
        let sine = bank.table(TableShape::Sine);
        for (shape, modulus) in [(TableShape::SineModThree, 3), (TableShape::SineModSeven, 7)] {
            let table = bank.table(shape);
            for k in 0..size {
                if k % modulus == 0 {
                    assert_eq!(table.at(k), sine.at(k), "{shape:?}[{k}]");
                } else {
                    assert_eq!(table.at(k), 0.0, "{shape:?}[{k}]");
                }
            }
        }
    }

    #[test]
    fn grind_mixes_sine_and_unit_noise() {
        let size = 1024;
        let bank = bank(size);
        let sine = bank.table(TableShape::Sine);
        let grind = bank.table(TableShape::Grind);
        for k in 0..size {
            let value = grind.at(k);
            if k % 3 == 0 {
                assert_eq!(value, sine.at(k));
            } else {
                assert!((0.0..1.0).contains(&value), "grind[{k}] = {value}");
            }
        }
    }

    #[test]
    fn seeded_builds_are_identical() {
        let a = bank(512);
        let b = bank(512);
        for shape in TableShape::ALL {
            assert_eq!(a.table(shape), b.table(shape));
        }
    }

    #[test]
    fn lookup_truncates_and_wraps() {
        let bank = bank(8);
        let saw = bank.table(TableShape::Saw);
        assert_eq!(saw.lookup(2.99), saw.at(2));
        assert_eq!(saw.lookup(8.5), saw.at(0));
        assert_eq!(saw.at(17), saw.at(1));
    }
}
