//! Raw signal generators.
//!
//! Each module implements one generator:
//! - `oscillators` - Basic waveforms with slide and optional harmonics
//! - `fm` - Two-operator FM with a harmonic stack on the carrier
//! - `harmonics` - Partial banks for additive and pad synthesis
//! - `karplus` - Karplus-Strong plucked string
//! - `fm_drum` - Pitch-swept FM for kicks and toms
//! - `noise` - White and pink noise
//!
//! Generators produce the mono signal before the envelope; the envelope and
//! pan are applied by [`crate::generate`].

pub mod fm;
pub mod fm_drum;
pub mod harmonics;
pub mod karplus;
pub mod noise;
pub mod oscillators;

use rand_pcg::Pcg32;

pub use fm::FmSynth;
pub use fm_drum::FmDrum;
pub use harmonics::{PartialBank, PartialShape};
pub use karplus::KarplusStrong;
pub use noise::{NoiseSynth, PinkFilter};
pub use oscillators::WaveformSynth;

/// Common trait for all generators.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Seeded RNG for any randomness
    ///
    /// # Returns
    /// Vector of audio samples, nominally in [-1.0, 1.0]
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}
