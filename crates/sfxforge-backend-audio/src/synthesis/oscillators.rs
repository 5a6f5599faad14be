//! Basic waveform generator with pitch slide.

use rand_pcg::Pcg32;
use sfxforge_spec::{ResolvedParameters, Waveform};

use crate::oscillator::{self, PhaseAccumulator};
use crate::rng::bipolar;

use super::Synthesizer;

/// Basic waveform oscillator.
///
/// The frequency moves by `slide` Hz per second, and `slide` itself moves by
/// `delta_slide` Hz per second, giving linear or quadratic pitch glides. The
/// frequency never drops below `min_freq`.
#[derive(Debug, Clone)]
pub struct WaveformSynth {
    /// Waveform shape.
    pub waveform: Waveform,
    /// Start frequency in Hz.
    pub frequency: f64,
    /// Floor for the slid frequency in Hz.
    pub min_freq: f64,
    /// Pitch change in Hz per second.
    pub slide: f64,
    /// Change of `slide` per second.
    pub delta_slide: f64,
    /// Square wave duty cycle.
    pub duty: f64,
    /// Pulse wave width.
    pub pulse_width: f64,
    /// Gains of extra sine partials at (k + 1) times the phase.
    pub harmonics: Vec<f64>,
}

impl WaveformSynth {
    /// Creates a plain oscillator without slide or harmonics.
    pub fn new(waveform: Waveform, frequency: f64) -> Self {
        Self {
            waveform,
            frequency,
            min_freq: 0.0,
            slide: 0.0,
            delta_slide: 0.0,
            duty: 0.5,
            pulse_width: 0.25,
            harmonics: Vec::new(),
        }
    }

    /// Builds the oscillator from resolved parameters.
    pub fn from_params(params: &ResolvedParameters) -> Self {
        Self {
            waveform: params.waveform,
            frequency: params.frequency,
            min_freq: params.min_freq,
            slide: params.slide,
            delta_slide: params.delta_slide,
            duty: params.duty,
            pulse_width: params.pulse_width,
            harmonics: params.harmonics.clone(),
        }
    }

    fn shape(&self, phase: &PhaseAccumulator, rng: &mut Pcg32) -> f64 {
        let p = phase.normalized();
        match self.waveform {
            Waveform::Sine => oscillator::sine(phase.phase()),
            Waveform::Triangle => oscillator::triangle(p),
            Waveform::Sawtooth => oscillator::sawtooth(p),
            Waveform::Square => oscillator::square(p, self.duty),
            Waveform::Pulse => oscillator::square(p, self.pulse_width),
            Waveform::Noise => bipolar(rng),
        }
    }
}

impl Synthesizer for WaveformSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let mut output = Vec::with_capacity(num_samples);
        let mut phase = PhaseAccumulator::new(sample_rate);
        let mut freq = self.frequency;
        let mut slide = self.slide;

        let norm = 1.0 + self.harmonics.iter().map(|h| h.abs()).sum::<f64>();

        for _ in 0..num_samples {
            let mut sample = self.shape(&phase, rng);

            if !self.harmonics.is_empty() {
                let base = phase.phase();
                for (k, &gain) in self.harmonics.iter().enumerate() {
                    sample += ((k + 1) as f64 * base).sin() * gain;
                }
                sample /= norm;
            }
            output.push(sample);

            phase.advance(freq);
            slide += self.delta_slide / sample_rate;
            freq = (freq + slide / sample_rate).max(self.min_freq);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn zero_crossings(samples: &[f64]) -> usize {
        samples
            .windows(2)
            .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
            .count()
    }

    #[test]
    fn test_sine_frequency() {
        let synth = WaveformSynth::new(Waveform::Sine, 100.0);
        let mut rng = create_rng(1);
        let out = synth.synthesize(8000, 8000.0, &mut rng);
        // One upward crossing per cycle, minus the start at phase zero.
        assert!((99..=100).contains(&zero_crossings(&out)));
    }

    #[test]
    fn test_shapes_bounded() {
        let mut rng = create_rng(1);
        for wf in Waveform::ALL {
            let synth = WaveformSynth::new(*wf, 440.0);
            let out = synth.synthesize(2000, 44100.0, &mut rng);
            assert!(out.iter().all(|s| s.abs() <= 1.0), "{} out of range", wf);
        }
    }

    #[test]
    fn test_square_duty() {
        let synth = WaveformSynth {
            duty: 0.25,
            ..WaveformSynth::new(Waveform::Square, 10.0)
        };
        let mut rng = create_rng(1);
        let out = synth.synthesize(1000, 1000.0, &mut rng);
        let high = out.iter().filter(|&&s| s > 0.0).count();
        assert!((240..=260).contains(&high));
    }

    #[test]
    fn test_slide_respects_min_freq() {
        let synth = WaveformSynth {
            slide: -10_000.0,
            min_freq: 50.0,
            ..WaveformSynth::new(Waveform::Sine, 1000.0)
        };
        let mut rng = create_rng(1);
        let out = synth.synthesize(44100, 44100.0, &mut rng);
        // The last half second sits at the 50 Hz floor.
        let tail = &out[22050..];
        let crossings = zero_crossings(tail);
        assert!((24..=26).contains(&crossings), "got {}", crossings);
    }

    #[test]
    fn test_harmonics_normalized() {
        let synth = WaveformSynth {
            harmonics: vec![1.0, 0.5, 0.25],
            ..WaveformSynth::new(Waveform::Sawtooth, 220.0)
        };
        let mut rng = create_rng(1);
        let out = synth.synthesize(4410, 44100.0, &mut rng);
        assert!(out.iter().all(|s| s.abs() <= 1.0 + 1e-12));
    }
}
