//! Post-generation stages: reverb, stereo width and mastering.
//!
//! The stages run in a fixed order on the panned stereo buffer. Each one
//! mutates the buffer in place and owns no state between calls.

pub mod mastering;
pub mod reverb;
pub mod stereo;

use sfxforge_spec::ResolvedParameters;
use tracing::debug;

use crate::mixer::StereoBuffer;

pub use mastering::{apply as apply_mastering, CEILING};
pub use reverb::{apply as apply_reverb, ConvolutionMethod};
pub use stereo::apply_width as apply_stereo_width;

/// Runs reverb, stereo width and mastering with the resolved settings.
pub fn apply_post_chain(
    buffer: &mut StereoBuffer,
    params: &ResolvedParameters,
    sample_rate: f64,
    seed: u32,
    method: ConvolutionMethod,
) {
    if params.reverb_mix > 0.0 {
        debug!(mix = params.reverb_mix, ?method, "applying reverb");
        apply_reverb(buffer, params.reverb_mix, sample_rate, seed, method);
    }
    if params.stereo_width != 0.0 {
        debug!(width = params.stereo_width, "applying stereo width");
        apply_stereo_width(buffer, params.stereo_width);
    }
    apply_mastering(buffer, params.gain);
}
