//! Karplus-Strong synthesis for plucked string sounds.
//!
//! A delay line one period long is filled with a noise burst. Each sample
//! outputs the value at the cursor, writes back the damped average of it and
//! its neighbour, and advances. The averaging is a one-pole lowpass, so high
//! partials die first. An explicit `exp(-t * (2 + f * 0.003))` decay shapes
//! the output on top of the loop's natural decay, shortening high notes.

use rand_pcg::Pcg32;
use sfxforge_spec::ResolvedParameters;

use crate::delay_line::DelayLine;
use crate::rng::bipolar;

use super::Synthesizer;

/// Karplus-Strong synthesis parameters.
#[derive(Debug, Clone)]
pub struct KarplusStrong {
    /// Base frequency in Hz.
    pub frequency: f64,
}

impl KarplusStrong {
    /// Creates a new Karplus-Strong synthesizer.
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }

    /// Builds the synthesizer from resolved parameters.
    pub fn from_params(params: &ResolvedParameters) -> Self {
        Self::new(params.frequency)
    }

    /// Delay line length in samples: one period, at least two.
    pub fn period_samples(&self, sample_rate: f64) -> usize {
        let period = (sample_rate / self.frequency).round();
        if period.is_finite() && period >= DelayLine::MIN_LEN as f64 {
            period as usize
        } else {
            DelayLine::MIN_LEN
        }
    }

    /// Loop averaging gain; slightly lower for higher notes.
    pub fn damping(&self, sample_rate: f64) -> f64 {
        0.5 - (self.frequency / sample_rate) * 0.1
    }

    /// Noise burst with its mean removed so the loop carries no DC.
    fn excitation(&self, len: usize, rng: &mut Pcg32) -> Vec<f64> {
        let mut burst: Vec<f64> = (0..len).map(|_| bipolar(rng)).collect();
        let mean = burst.iter().sum::<f64>() / len as f64;
        for s in &mut burst {
            *s -= mean;
        }
        burst
    }
}

impl Synthesizer for KarplusStrong {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let len = self.period_samples(sample_rate);
        let mut line = DelayLine::from_samples(self.excitation(len, rng));
        let damping = self.damping(sample_rate);
        let decay_rate = 2.0 + self.frequency * 0.003;

        let mut output = Vec::with_capacity(num_samples);
        for i in 0..num_samples {
            let current = line.current();
            let filtered = (current + line.next()) * damping;
            line.write_and_advance(filtered);

            let t = i as f64 / sample_rate;
            output.push(current * (-t * decay_rate).exp());
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_period_samples() {
        assert_eq!(KarplusStrong::new(441.0).period_samples(44100.0), 100);
        assert_eq!(KarplusStrong::new(440.0).period_samples(44100.0), 100);
        // Above Nyquist the line bottoms out at two samples.
        assert_eq!(KarplusStrong::new(30000.0).period_samples(44100.0), 2);
    }

    #[test]
    fn test_damping() {
        let ks = KarplusStrong::new(4410.0);
        assert!((ks.damping(44100.0) - 0.49).abs() < 1e-12);
    }

    #[test]
    fn test_excitation_has_no_dc() {
        let ks = KarplusStrong::new(220.0);
        let burst = ks.excitation(200, &mut create_rng(5));
        let mean: f64 = burst.iter().sum::<f64>() / burst.len() as f64;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_first_period_is_excitation() {
        let ks = KarplusStrong::new(441.0);
        let out = ks.synthesize(100, 44100.0, &mut create_rng(5));
        let burst = ks.excitation(100, &mut create_rng(5));
        for (i, (o, b)) in out.iter().zip(&burst).enumerate() {
            let decay = (-(i as f64 / 44100.0) * (2.0 + 441.0 * 0.003)).exp();
            assert!((o - b * decay).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_seed_same_pluck() {
        let ks = KarplusStrong::new(330.0);
        let a = ks.synthesize(4000, 44100.0, &mut create_rng(11));
        let b = ks.synthesize(4000, 44100.0, &mut create_rng(11));
        let c = ks.synthesize(4000, 44100.0, &mut create_rng(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
