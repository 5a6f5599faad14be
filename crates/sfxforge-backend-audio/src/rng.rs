//! Seeded random source using PCG32 with BLAKE3 seed derivation.
//!
//! Every random draw a generation call makes flows through a generator
//! created here. Each component (excitation noise, detune offsets, reverb
//! impulse responses) gets its own stream derived from the call's seed, so
//! adding draws in one component never shifts another.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Component keys for [`component_rng`].
pub mod keys {
    /// Basic waveform noise shape.
    pub const WAVEFORM_NOISE: &str = "waveform_noise";
    /// Noise generator samples.
    pub const NOISE: &str = "noise";
    /// Karplus-Strong excitation burst.
    pub const PLUCK_EXCITATION: &str = "pluck_excitation";
    /// Per-harmonic detune offsets.
    pub const DETUNE: &str = "detune";
    /// Left reverb impulse response.
    pub const REVERB_LEFT: &str = "reverb_left";
    /// Right reverb impulse response.
    pub const REVERB_RIGHT: &str = "reverb_right";
}

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a component from the base seed using a string key.
///
/// ```text
/// component_seed = truncate_u32(BLAKE3(base_seed || key))
/// ```
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let b = hash.as_bytes();
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

/// Creates the RNG for one component of a call.
pub fn component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

/// Draws a fresh seed for calls that did not supply one.
pub fn entropy_seed() -> u32 {
    rand::thread_rng().gen()
}

/// Uniform sample in `[-1, 1)`.
#[inline]
pub fn bipolar(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}
