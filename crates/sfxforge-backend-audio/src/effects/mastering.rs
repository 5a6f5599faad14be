//! Output gain and soft limiting.

use crate::mixer::StereoBuffer;

/// Asymptotic peak of the limiter.
pub const CEILING: f64 = 0.95;

/// Soft-limits one sample: `tanh(x / CEILING) * CEILING`.
///
/// Non-finite input maps to silence.
#[inline]
pub fn limit(sample: f64) -> f64 {
    if sample.is_finite() {
        (sample / CEILING).tanh() * CEILING
    } else {
        0.0
    }
}

/// Applies linear `gain` and the soft limiter in place.
///
/// Every output sample satisfies `|s| <= CEILING` for any input.
pub fn apply(buffer: &mut StereoBuffer, gain: f64) {
    for s in buffer.left.iter_mut().chain(buffer.right.iter_mut()) {
        *s = limit(*s * gain);
    }
}
