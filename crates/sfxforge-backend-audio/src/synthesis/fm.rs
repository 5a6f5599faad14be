//! FM (Frequency Modulation) synthesis.
//!
//! One carrier, one modulator, both with continuously accumulated phase. The
//! modulator output, scaled by `depth * modulator_freq`, offsets the carrier's
//! instantaneous frequency before the carrier phase advances. The output sums
//! sine partials of the modulated carrier phase.

use rand_pcg::Pcg32;
use sfxforge_spec::ResolvedParameters;

use crate::oscillator::PhaseAccumulator;

use super::Synthesizer;

/// FM synthesis parameters.
#[derive(Debug, Clone)]
pub struct FmSynth {
    /// Carrier frequency in Hz.
    pub frequency: f64,
    /// Modulator/carrier frequency ratio.
    pub ratio: f64,
    /// Modulation index.
    pub depth: f64,
    /// Gains of the carrier partials, index 0 is the fundamental.
    pub harmonics: Vec<f64>,
}

impl FmSynth {
    /// Creates an FM synthesizer with a single carrier partial.
    pub fn new(frequency: f64, ratio: f64, depth: f64) -> Self {
        Self {
            frequency,
            ratio,
            depth,
            harmonics: vec![1.0],
        }
    }

    /// Builds the synthesizer from resolved parameters.
    pub fn from_params(params: &ResolvedParameters) -> Self {
        Self {
            frequency: params.frequency,
            ratio: params.fm_ratio,
            depth: params.fm_depth,
            harmonics: params.harmonics.clone(),
        }
    }
}

impl Synthesizer for FmSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let mut output = Vec::with_capacity(num_samples);
        let mut carrier = PhaseAccumulator::new(sample_rate);
        let mut modulator = PhaseAccumulator::new(sample_rate);

        let modulator_freq = self.frequency * self.ratio;
        let deviation = self.depth * modulator_freq;
        let norm = harmonic_norm(&self.harmonics);

        for _ in 0..num_samples {
            let phase = carrier.phase();
            let sample: f64 = self
                .harmonics
                .iter()
                .enumerate()
                .map(|(k, &gain)| ((k + 1) as f64 * phase).sin() * gain)
                .sum();
            output.push(sample / norm);

            let modulation = modulator.advance(modulator_freq).sin();
            carrier.advance(self.frequency + modulation * deviation);
        }

        output
    }
}

/// Sum of absolute gains, 1.0 when zero.
pub(crate) fn harmonic_norm(harmonics: &[f64]) -> f64 {
    let sum: f64 = harmonics.iter().map(|h| h.abs()).sum();
    if sum > 0.0 {
        sum
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_zero_depth_is_pure_sine() {
        let synth = FmSynth::new(441.0, 2.0, 0.0);
        let mut rng = create_rng(0);
        let out = synth.synthesize(1000, 44100.0, &mut rng);
        for (i, s) in out.iter().enumerate() {
            let expected = (std::f64::consts::TAU * 441.0 * i as f64 / 44100.0).sin();
            assert!((s - expected).abs() < 1e-6, "sample {}", i);
        }
    }

    #[test]
    fn test_harmonic_stack_normalized() {
        let synth = FmSynth {
            harmonics: vec![1.0, 0.5, 0.25, 0.125],
            ..FmSynth::new(440.0, 2.0, 0.5)
        };
        let mut rng = create_rng(0);
        let out = synth.synthesize(44100, 44100.0, &mut rng);
        assert!(out.iter().all(|s| s.is_finite() && s.abs() <= 1.0 + 1e-12));
        assert!(out.iter().any(|s| s.abs() > 0.3));
    }

    #[test]
    fn test_modulation_changes_output() {
        let mut rng = create_rng(0);
        let plain = FmSynth::new(220.0, 2.0, 0.0).synthesize(2000, 44100.0, &mut rng);
        let modulated = FmSynth::new(220.0, 2.0, 2.0).synthesize(2000, 44100.0, &mut rng);
        assert_ne!(plain, modulated);
    }

    #[test]
    fn test_harmonic_norm_guard() {
        assert_eq!(harmonic_norm(&[]), 1.0);
        assert_eq!(harmonic_norm(&[0.0]), 1.0);
        assert_eq!(harmonic_norm(&[1.0, -1.0]), 2.0);
    }
}
