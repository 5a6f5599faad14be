//! sfxforge Audio Backend
//!
//! This crate renders sound effects from a flat parameter record into a
//! mastered stereo buffer.
//!
//! # Overview
//!
//! A call runs one generator and a fixed post chain:
//!
//! - **Waveform** - Sine, triangle, sawtooth, square, pulse or noise with
//!   pitch slide and optional harmonics
//! - **FM** - Two-operator FM with a harmonic stack on the carrier
//! - **Additive / Pad** - Banks of independently accumulated partials
//! - **Pluck** - Karplus-Strong plucked string
//! - **FM drum** - Pitch-swept FM for kicks and toms
//! - **Noise** - White and pink noise
//!
//! The mono signal is shaped by the envelope, panned, then passed through
//! convolution reverb, mid/side width and a `tanh` limiter whose ceiling is
//! 0.95.
//!
//! # Determinism
//!
//! Given the same parameters, sample rate and seed, the output is identical
//! across runs. All randomness comes from PCG32 streams whose seeds are
//! derived from the call seed via BLAKE3. Calls without a seed draw one at
//! entry and report it in [`GenerateResult`].
//!
//! # Example
//!
//! ```
//! use sfxforge_backend_audio::{generate_with_seed, WavResult};
//! use sfxforge_spec::{SynthesisParameters, SynthesisType};
//!
//! let mut params = SynthesisParameters::new(SynthesisType::Pluck);
//! params.frequency = Some(330.0);
//! params.release = Some(0.2);
//!
//! let buffer = generate_with_seed(&params, 22050.0, 42).unwrap();
//! assert!(buffer.peak() <= 0.95);
//!
//! let wav = WavResult::pcm16(&buffer, 22050);
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`synthesis`] - Generator implementations
//! - [`envelope`] - Amplitude envelope
//! - [`effects`] - Reverb, stereo width and mastering
//! - [`mixer`] - Stereo buffers and mixdown
//! - [`wav`] - WAV export
//! - [`rng`] - Seeded random streams

pub mod delay_line;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod mixer;
pub mod oscillator;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use effects::{
    apply_mastering, apply_reverb, apply_stereo_width, ConvolutionMethod, CEILING,
};
pub use envelope::calculate_envelope;
pub use error::{AudioError, AudioResult};
pub use generate::{
    generate, generate_with_options, generate_with_seed, render_batch, GenerateOptions,
    GenerateResult,
};
pub use mixer::{Layer, Mixer, StereoBuffer};
pub use wav::{SampleFormat, WavResult};
