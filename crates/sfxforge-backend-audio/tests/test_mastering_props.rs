//! Property tests for the output limiter.

use proptest::prelude::*;
use sfxforge_backend_audio::{apply_mastering, StereoBuffer, CEILING};

fn sample_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -10.0..10.0f64,
        2 => -1e12..1e12f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn mastered_peak_never_exceeds_ceiling(
        left in prop::collection::vec(sample_strategy(), 1..256),
        right in prop::collection::vec(sample_strategy(), 1..256),
        gain in 0.0..16.0f64,
    ) {
        let len = left.len().min(right.len());
        let mut buffer = StereoBuffer {
            left: left[..len].to_vec(),
            right: right[..len].to_vec(),
        };
        apply_mastering(&mut buffer, gain);

        prop_assert!(buffer.is_finite());
        prop_assert!(buffer.peak() <= CEILING + 1e-12, "peak {}", buffer.peak());
    }

    #[test]
    fn mastering_preserves_sign_and_order(x in -5.0..5.0f64, y in -5.0..5.0f64) {
        let mut buffer = StereoBuffer {
            left: vec![x],
            right: vec![y],
        };
        apply_mastering(&mut buffer, 1.0);
        prop_assert!(buffer.left[0] * x >= 0.0);
        if x < y {
            prop_assert!(buffer.left[0] <= buffer.right[0]);
        }
    }
}
