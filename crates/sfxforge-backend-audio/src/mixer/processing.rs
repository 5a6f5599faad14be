//! Post-mix normalization and clipping.

use super::types::StereoBuffer;

/// Scales both channels so the peak sits `headroom_db` below 0 dBFS.
///
/// Silent buffers are left untouched.
pub fn normalize_stereo(stereo: &mut StereoBuffer, headroom_db: f64) {
    let target_peak = 10.0_f64.powf(headroom_db / 20.0);
    let current_peak = stereo.peak();

    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in stereo.left.iter_mut().chain(stereo.right.iter_mut()) {
            *sample *= gain;
        }
    }
}

/// Soft clips one sample above `threshold`, approaching 1.0.
#[inline]
pub fn soft_clip(sample: f64, threshold: f64) -> f64 {
    let abs = sample.abs();
    if abs <= threshold {
        sample
    } else {
        let excess = abs - threshold;
        let compressed = threshold + (1.0 - threshold) * (1.0 - (-excess * 3.0).exp());
        sample.signum() * compressed
    }
}

/// Soft clips both channels.
pub fn soft_clip_stereo(stereo: &mut StereoBuffer, threshold: f64) {
    for sample in stereo.left.iter_mut().chain(stereo.right.iter_mut()) {
        *sample = soft_clip(*sample, threshold);
    }
}
