//! Property tests for default resolution.

use proptest::prelude::*;
use sfxforge_spec::{validate_parameters, SynthesisParameters, SynthesisType};

fn any_f64() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        Just(Some(f64::NEG_INFINITY)),
        (-1.0e4..1.0e4f64).prop_map(Some),
    ]
}

fn any_type() -> impl Strategy<Value = Option<SynthesisType>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(SynthesisType::ALL.to_vec()).prop_map(Some),
    ]
}

prop_compose! {
    fn any_params()(
        synthesis_type in any_type(),
        frequency in any_f64(),
        min_freq in any_f64(),
        attack in any_f64(),
        hold in any_f64(),
        decay in any_f64(),
        sustain in any_f64(),
        sustain_level in any_f64(),
        release in any_f64(),
        punch in any_f64(),
        pan in any_f64(),
        reverb_mix in any_f64(),
        stereo_width in any_f64(),
        gain in any_f64(),
        duty in any_f64(),
    ) -> SynthesisParameters {
        SynthesisParameters {
            synthesis_type,
            frequency,
            min_freq,
            attack,
            hold,
            decay,
            sustain,
            sustain_level,
            release,
            punch,
            pan,
            reverb_mix,
            stereo_width,
            gain,
            duty,
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn resolved_values_are_finite_and_in_range(params in any_params()) {
        let r = params.resolve();
        let env = r.envelope;

        prop_assert!(r.frequency.is_finite() && r.frequency >= r.min_freq);
        prop_assert!(env.attack >= 0.001 && env.attack.is_finite());
        prop_assert!(env.decay >= 0.001 && env.decay.is_finite());
        prop_assert!(env.release >= 0.001 && env.release.is_finite());
        prop_assert!(env.hold >= 0.0 && env.sustain >= 0.0);
        prop_assert!((0.0..=1.0).contains(&env.sustain_level));
        prop_assert!((0.0..=100.0).contains(&env.punch));
        prop_assert!((-1.0..=1.0).contains(&r.pan));
        prop_assert!((0.0..=1.0).contains(&r.reverb_mix));
        prop_assert!((0.0..=1.0).contains(&r.stereo_width));
        prop_assert!((0.01..=0.99).contains(&r.duty));
        prop_assert!(r.gain.is_finite() && r.gain > 0.0);
        prop_assert!(r.total_duration().is_finite());
    }

    #[test]
    fn validation_errors_only_on_sample_rate_or_budget(params in any_params()) {
        let result = validate_parameters(&params, 44100.0);
        let duration = params.resolve().total_duration();
        prop_assert_eq!(result.is_ok(), duration <= 120.0);
    }
}
