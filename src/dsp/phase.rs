//! Phase accumulator and per-sample glide.

/*
Phase Accumulation
==================

The accumulator holds a position in the table (in samples) and moves it
forward by `increment` every output sample, wrapping at the table length:

    increment = frequency * table_size / sample_rate
    phase     = (phase + increment) mod table_size

Reading truncates the phase, so the index is always an integer in
[0, table_size).

Glide
-----

When the target frequency differs from the current one, the frequency used
for the step is pushed part of the way towards the target:

    frequency = current + (target - current) / divisor

With the divisor held at the block length and `current` never updated, this
lands 1/block_len of the way to the target and stays there. Using the number
of samples left in the block as the divisor, and feeding the result back as
`current`, turns it into a linear ramp that arrives on the last sample.
*/

/// Frequency for one step of a glide from `current` towards `target`.
#[inline]
pub fn glide_frequency(current: f64, target: f64, divisor: f64) -> f64 {
    if target != current {
        current + (target - current) / divisor
    } else {
        current
    }
}

/// Running table position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseAccumulator {
    phase: f64,
    increment: f64,
    table_size: usize,
}

impl PhaseAccumulator {
    pub fn new(table_size: usize) -> Self {
        debug_assert!(table_size > 0);
        Self {
            phase: 0.0,
            increment: 0.0,
            table_size,
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.increment = 0.0;
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase delta applied by the last [`advance`](Self::advance).
    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Integer table index for the current phase.
    #[inline]
    pub fn index(&self) -> usize {
        self.phase as usize % self.table_size
    }

    /// Step forward one sample at `frequency`.
    #[inline]
    pub fn advance(&mut self, frequency: f64, sample_rate: f64) {
        let size = self.table_size as f64;
        self.increment = frequency * size / sample_rate;
        self.phase = (self.phase + self.increment) % size;
    }
}
