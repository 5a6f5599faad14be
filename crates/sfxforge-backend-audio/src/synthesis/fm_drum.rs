//! Pitch-swept FM for kicks and toms.
//!
//! The carrier frequency falls exponentially from `frequency` toward
//! `frequency * 0.08`, giving the drop of a drum hit. The modulation index
//! decays faster than the pitch, so the tone is bright only at the transient.

use rand_pcg::Pcg32;
use sfxforge_spec::ResolvedParameters;

use crate::oscillator::PhaseAccumulator;

use super::Synthesizer;

/// End frequency as a fraction of the start frequency.
pub const END_RATIO: f64 = 0.08;
/// Pitch sweep rate in 1/s.
pub const PITCH_DECAY: f64 = 25.0;
/// Modulation index decay rate in 1/s.
pub const DEPTH_DECAY: f64 = 15.0;

/// FM drum parameters.
#[derive(Debug, Clone)]
pub struct FmDrum {
    /// Start frequency in Hz.
    pub frequency: f64,
    /// Modulator/carrier frequency ratio.
    pub ratio: f64,
    /// Initial modulation index.
    pub depth: f64,
}

impl FmDrum {
    /// Creates a new FM drum.
    pub fn new(frequency: f64, ratio: f64, depth: f64) -> Self {
        Self {
            frequency,
            ratio,
            depth,
        }
    }

    /// Builds the drum from resolved parameters.
    pub fn from_params(params: &ResolvedParameters) -> Self {
        Self::new(params.frequency, params.fm_ratio, params.fm_depth)
    }

    /// Carrier frequency at `t` seconds.
    pub fn frequency_at(&self, t: f64) -> f64 {
        let end = self.frequency * END_RATIO;
        end + (self.frequency - end) * (-t * PITCH_DECAY).exp()
    }
}

impl Synthesizer for FmDrum {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let mut output = Vec::with_capacity(num_samples);
        let mut carrier = PhaseAccumulator::new(sample_rate);
        let mut modulator = PhaseAccumulator::new(sample_rate);

        for i in 0..num_samples {
            let t = i as f64 / sample_rate;
            let freq = self.frequency_at(t);
            let modulator_freq = freq * self.ratio;
            let depth = self.depth * (-t * DEPTH_DECAY).exp();

            output.push(carrier.phase().sin());

            let modulation = modulator.advance(modulator_freq).sin();
            carrier.advance(freq + modulation * depth * modulator_freq);
        }

        output
    }
}
