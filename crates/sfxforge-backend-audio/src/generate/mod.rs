//! Main entry point for sound generation.
//!
//! `generate` resolves the parameters, renders the generator's mono signal,
//! shapes it with the envelope, pans it, then runs reverb, stereo width and
//! mastering. Every call owns its buffers and random streams; the only shared
//! input is the seed.

mod batch;
mod source;


use sfxforge_spec::{buffer_length, ResolvedParameters, SynthesisParameters};
use tracing::{debug, debug_span};

use crate::effects::{apply_post_chain, ConvolutionMethod};
use crate::error::{AudioError, AudioResult};
use crate::mixer::StereoBuffer;
use crate::rng::entropy_seed;

pub use batch::render_batch;
pub use source::{envelope_and_pan, render_source};

/// Settings that do not belong to the sound itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Seed used when the parameters carry none. `None` draws a fresh one.
    pub seed: Option<u32>,
    /// Reverb convolution algorithm.
    pub convolution: ConvolutionMethod,
}

impl GenerateOptions {
    /// Options with a fixed fallback seed.
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Sets the convolution algorithm.
    pub fn with_convolution(mut self, convolution: ConvolutionMethod) -> Self {
        self.convolution = convolution;
        self
    }
}

/// A rendered sound with the inputs that produced it.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Mastered stereo audio.
    pub buffer: StereoBuffer,
    /// Seed the call used. Re-rendering with it reproduces `buffer`.
    pub seed: u32,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Parameters after defaults and sanitizing.
    pub resolved: ResolvedParameters,
}

/// Generates a stereo buffer.
///
/// Uses `params.seed` when present, otherwise a fresh random seed.
pub fn generate(params: &SynthesisParameters, sample_rate: f64) -> AudioResult<StereoBuffer> {
    generate_with_options(params, sample_rate, &GenerateOptions::default()).map(|r| r.buffer)
}

/// Generates a stereo buffer with an explicit seed, ignoring `params.seed`.
pub fn generate_with_seed(
    params: &SynthesisParameters,
    sample_rate: f64,
    seed: u32,
) -> AudioResult<StereoBuffer> {
    let resolved = params.resolve();
    render(resolved, sample_rate, seed, ConvolutionMethod::default()).map(|r| r.buffer)
}

/// Generates a sound with full control over seeding and reverb.
pub fn generate_with_options(
    params: &SynthesisParameters,
    sample_rate: f64,
    options: &GenerateOptions,
) -> AudioResult<GenerateResult> {
    let resolved = params.resolve();
    let seed = resolved
        .seed
        .or(options.seed)
        .unwrap_or_else(entropy_seed);
    render(resolved, sample_rate, seed, options.convolution)
}

fn render(
    resolved: ResolvedParameters,
    sample_rate: f64,
    seed: u32,
    convolution: ConvolutionMethod,
) -> AudioResult<GenerateResult> {
    let num_samples = buffer_length(&resolved, sample_rate)
        .map_err(|err| AudioError::from_validation(err, sample_rate))?;

    let span = debug_span!(
        "generate",
        synthesis_type = %resolved.synthesis_type,
        num_samples,
        seed
    );
    let _enter = span.enter();

    let mono = render_source(&resolved, num_samples, sample_rate, seed);
    debug!("rendered source");

    let mut buffer = envelope_and_pan(&mono, &resolved.envelope, resolved.pan, sample_rate);
    apply_post_chain(&mut buffer, &resolved, sample_rate, seed, convolution);
    debug!(peak = buffer.peak(), "mastered");

    Ok(GenerateResult {
        buffer,
        seed,
        sample_rate,
        resolved,
    })
}
