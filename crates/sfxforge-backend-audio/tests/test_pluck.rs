//! Karplus-Strong pitch and decay behaviour.

use sfxforge_backend_audio::rng::create_rng;
use sfxforge_backend_audio::synthesis::{KarplusStrong, Synthesizer};

const SR: f64 = 22050.0;
const FREQ: f64 = 880.0;

fn pluck(seed: u32) -> Vec<f64> {
    KarplusStrong::new(FREQ).synthesize(SR as usize, SR, &mut create_rng(seed))
}

fn rising_crossings(samples: &[f64]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count()
}

#[test]
fn zero_crossing_rate_matches_frequency() {
    for seed in [1, 2, 3] {
        let out = pluck(seed);
        let start = (0.25 * SR) as usize;
        let end = (0.5 * SR) as usize;
        let rate = rising_crossings(&out[start..end]) as f64 / 0.25;
        let error = (rate - FREQ).abs() / FREQ;
        assert!(error < 0.05, "seed {}: {} Hz", seed, rate);
    }
}

#[test]
fn amplitude_decays_after_transient() {
    let out = pluck(7);
    let block = 1024;
    let start = (0.1 * SR) as usize;
    let peaks: Vec<f64> = out[start..]
        .chunks_exact(block)
        .map(|b| b.iter().fold(0.0_f64, |a, s| a.max(s.abs())))
        .collect();

    for (i, pair) in peaks.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0] * 1.02,
            "block {} grew: {} -> {}",
            i + 1,
            pair[0],
            pair[1]
        );
    }
    assert!(peaks[peaks.len() - 1] < peaks[0] * 0.01);
}

#[test]
fn output_is_finite_across_range() {
    for freq in [20.0, 110.0, 440.0, 3000.0, 11000.0, 20000.0] {
        let out = KarplusStrong::new(freq).synthesize(4410, SR, &mut create_rng(0));
        assert!(out.iter().all(|s| s.is_finite() && s.abs() <= 1.0), "{} Hz", freq);
    }
}
