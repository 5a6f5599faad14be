//! Generator dispatch and the envelope/pan stage.

use sfxforge_spec::{EnvelopeParams, ResolvedParameters, SynthesisType};

use crate::envelope::calculate_envelope;
use crate::mixer::StereoBuffer;
use crate::rng::{component_rng, keys};
use crate::synthesis::{
    FmDrum, FmSynth, KarplusStrong, NoiseSynth, PartialBank, Synthesizer, WaveformSynth,
};

/// Picks the generator for `params` and the random stream it draws from.
fn synthesizer(params: &ResolvedParameters) -> (Box<dyn Synthesizer>, &'static str) {
    match params.synthesis_type {
        SynthesisType::Waveform => (
            Box::new(WaveformSynth::from_params(params)),
            keys::WAVEFORM_NOISE,
        ),
        SynthesisType::Fm => (Box::new(FmSynth::from_params(params)), keys::DETUNE),
        SynthesisType::Additive => (Box::new(PartialBank::additive(params)), keys::DETUNE),
        SynthesisType::Pad => (Box::new(PartialBank::pad(params)), keys::DETUNE),
        SynthesisType::Pluck => (
            Box::new(KarplusStrong::from_params(params)),
            keys::PLUCK_EXCITATION,
        ),
        SynthesisType::FmDrum => (Box::new(FmDrum::from_params(params)), keys::DETUNE),
        SynthesisType::Noise => (Box::new(NoiseSynth::new(params.noise_type)), keys::NOISE),
    }
}

/// Renders the raw mono signal of the selected generator.
pub fn render_source(
    params: &ResolvedParameters,
    num_samples: usize,
    sample_rate: f64,
    seed: u32,
) -> Vec<f64> {
    let (synth, key) = synthesizer(params);
    let mut rng = component_rng(seed, key);
    synth.synthesize(num_samples, sample_rate, &mut rng)
}

/// Shapes the mono signal with the envelope and pans it to stereo.
///
/// Left gets `1 - pan / 2`, right gets `1 + pan / 2`.
pub fn envelope_and_pan(
    mono: &[f64],
    envelope: &EnvelopeParams,
    pan: f64,
    sample_rate: f64,
) -> StereoBuffer {
    let left_gain = 1.0 - pan * 0.5;
    let right_gain = 1.0 + pan * 0.5;

    let mut buffer = StereoBuffer::new(mono.len());
    for (i, &sample) in mono.iter().enumerate() {
        let shaped = sample * calculate_envelope(i as f64 / sample_rate, envelope);
        buffer.left[i] = shaped * left_gain;
        buffer.right[i] = shaped * right_gain;
    }
    buffer
}
