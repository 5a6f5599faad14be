//! Oscillator primitives: phase accumulation and waveform shapes.
//!
//! Phases are accumulated sample by sample and never recomputed from `t`, so
//! frequency changes (slides, vibrato, modulation) stay continuous.

use std::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Running phase in radians, wrapped to `[0, 2π)`.
#[derive(Debug, Clone, Copy)]
pub struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    /// Creates an accumulator at phase zero.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Current phase in radians.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Current phase as a fraction of a cycle in `[0, 1)`.
    #[inline]
    pub fn normalized(&self) -> f64 {
        self.phase / TWO_PI
    }

    /// Returns the current phase, then advances by one sample at `frequency`.
    #[inline]
    pub fn advance(&mut self, frequency: f64) -> f64 {
        let current = self.phase;
        self.phase = (self.phase + TWO_PI * frequency / self.sample_rate).rem_euclid(TWO_PI);
        current
    }
}

/// Sine of a phase in radians.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Triangle from a normalized phase: -1 at 0, 1 at 0.5.
#[inline]
pub fn triangle(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p - 1.0
    } else {
        3.0 - 4.0 * p
    }
}

/// Rising ramp from -1 to 1 over a normalized phase.
#[inline]
pub fn sawtooth(p: f64) -> f64 {
    2.0 * p - 1.0
}

/// 1 for the first `duty` of the cycle, -1 after.
#[inline]
pub fn square(p: f64, duty: f64) -> f64 {
    if p < duty {
        1.0
    } else {
        -1.0
    }
}
