//! Property tests for the amplitude envelope.

use proptest::prelude::*;
use sfxforge_backend_audio::calculate_envelope;
use sfxforge_spec::EnvelopeParams;

fn envelope_strategy() -> impl Strategy<Value = EnvelopeParams> {
    (
        0.001..2.0f64,
        0.0..1.0f64,
        0.001..2.0f64,
        0.0..3.0f64,
        0.0..=1.0f64,
        0.001..3.0f64,
        0.0..=100.0f64,
    )
        .prop_map(
            |(attack, hold, decay, sustain, sustain_level, release, punch)| EnvelopeParams {
                attack,
                hold,
                decay,
                sustain,
                sustain_level,
                release,
                punch,
            },
        )
}

proptest! {
    #[test]
    fn envelope_stays_in_unit_range(env in envelope_strategy(), t in -1.0..20.0f64) {
        let value = calculate_envelope(t, &env);
        prop_assert!((0.0..=1.0).contains(&value), "env({}) = {}", t, value);
    }

    #[test]
    fn envelope_has_no_jumps_without_punch(
        env in envelope_strategy(),
        fraction in 0.0..1.0f64,
    ) {
        let env = EnvelopeParams { punch: 0.0, ..env };
        let t = fraction * env.duration();
        let dt = 1e-7;
        let a = calculate_envelope(t, &env);
        let b = calculate_envelope(t + dt, &env);
        // The decay curve lands within (1 - level) * e^-4 of the sustain level.
        prop_assert!((a - b).abs() < 0.021, "jump {} -> {} at t={}", a, b, t);
    }

    #[test]
    fn envelope_continuous_at_phase_boundaries(env in envelope_strategy()) {
        let env = EnvelopeParams { punch: 0.0, ..env };
        let eps = 1e-9;
        let boundaries = [
            env.attack,
            env.attack + env.hold,
            env.attack + env.hold + env.decay,
            env.release_start(),
        ];
        for boundary in boundaries {
            let before = calculate_envelope(boundary - eps, &env);
            let after = calculate_envelope(boundary + eps, &env);
            prop_assert!(
                (before - after).abs() < 0.02,
                "jump at {}: {} -> {}",
                boundary,
                before,
                after
            );
        }
    }

    #[test]
    fn attack_rises_monotonically(env in envelope_strategy(), a in 0.0..1.0f64, b in 0.0..1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let early = calculate_envelope(lo * env.attack, &env);
        let late = calculate_envelope(hi * env.attack, &env);
        prop_assert!(early <= late);
    }

    #[test]
    fn release_fades_out(env in envelope_strategy()) {
        let end = env.release_start() + env.release * 10.0;
        prop_assert!(calculate_envelope(end, &env) < 1e-12);
    }
}
