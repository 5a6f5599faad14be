//! Noise synthesis.
//!
//! White noise is uniform per sample. Pink noise runs white noise through
//! Paul Kellet's six-state filter, a parallel bank of one-pole sections whose
//! poles are spread so the sum falls at about -3 dB/octave. A single leaky
//! integrator would give -6 dB/octave (red noise) instead.

use rand_pcg::Pcg32;
use sfxforge_spec::NoiseType;

use crate::rng::bipolar;

use super::Synthesizer;

/// Output scale of the pink filter.
const PINK_GAIN: f64 = 0.11;

/// Paul Kellet's pink noise filter.
#[derive(Debug, Clone, Default)]
pub struct PinkFilter {
    b0: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    b5: f64,
}

impl PinkFilter {
    /// Creates a filter with zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters one white sample.
    #[inline]
    pub fn process(&mut self, white: f64) -> f64 {
        self.b0 = 0.99886 * self.b0 + white * 0.0555179;
        self.b1 = 0.99332 * self.b1 + white * 0.0750759;
        self.b2 = 0.96900 * self.b2 + white * 0.1538520;
        self.b3 = 0.86650 * self.b3 + white * 0.3104856;
        self.b4 = 0.55000 * self.b4 + white * 0.5329522;
        self.b5 = -0.7616 * self.b5 - white * 0.0168980;
        (self.b0 + self.b1 + self.b2 + self.b3 + self.b4 + self.b5) * PINK_GAIN
    }
}

/// Noise synthesizer.
#[derive(Debug, Clone)]
pub struct NoiseSynth {
    /// Noise coloration.
    pub noise_type: NoiseType,
}

impl NoiseSynth {
    /// Creates a noise synthesizer.
    pub fn new(noise_type: NoiseType) -> Self {
        Self { noise_type }
    }
}

impl Synthesizer for NoiseSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        match self.noise_type {
            NoiseType::White => (0..num_samples).map(|_| bipolar(rng)).collect(),
            NoiseType::Pink => {
                let mut filter = PinkFilter::new();
                (0..num_samples)
                    .map(|_| filter.process(bipolar(rng)))
                    .collect()
            }
        }
    }
}
