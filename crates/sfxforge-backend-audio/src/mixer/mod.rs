//! Stereo buffers and mixdown of several rendered sounds.
//!
//! A mixdown sums stereo buffers at sample offsets with per-layer volume.
//! The result can then be normalized or soft clipped before export.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixer;
#[cfg(test)]
mod tests_processing;
#[cfg(test)]
mod tests_stereo_buffer;

pub use mixer::Mixer;
pub use processing::{normalize_stereo, soft_clip, soft_clip_stereo};
pub use types::{Layer, StereoBuffer};
