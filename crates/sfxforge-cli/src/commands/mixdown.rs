//! Mixdown command implementation
//!
//! Renders every layer of a manifest in parallel, sums them at their offsets
//! and writes one WAV file.

use anyhow::Result;
use colored::Colorize;
use sfxforge_backend_audio::mixer::{normalize_stereo, soft_clip_stereo};
use sfxforge_backend_audio::{
    render_batch, ConvolutionMethod, GenerateOptions, Layer, Mixer, SampleFormat, WavResult,
};
use sfxforge_spec::{
    validate_parameters, GenerationError, SynthesisParameters, MAX_DURATION_SECONDS,
};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::json_output::{
    error_codes, print_json, AudioFileInfo, JsonError, JsonWarning, MixdownLayerInfo,
    MixdownOutput,
};
use super::reporting;
use super::{output_sample_rate, EXIT_GENERATION, EXIT_INPUT};
use crate::input::{load_manifest, Manifest, ManifestLayer};

/// Arguments of the mixdown command.
#[derive(Debug, Clone)]
pub struct MixdownArgs<'a> {
    /// Manifest file.
    pub manifest: &'a Path,
    /// Output WAV path.
    pub out: &'a Path,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Output encoding.
    pub format: SampleFormat,
    /// Reverb convolution algorithm.
    pub convolution: ConvolutionMethod,
}

/// Run the mixdown command
///
/// # Returns
/// Exit code: 0 on success, 1 for input errors, 2 for generation errors
pub fn run(args: &MixdownArgs<'_>, json_output: bool) -> Result<ExitCode> {
    let (output, code) = match load_manifest(args.manifest) {
        Ok(manifest) => mixdown(&manifest, args),
        Err(e) => (
            MixdownOutput::failure(vec![JsonError::from(&e)], vec![]),
            EXIT_INPUT,
        ),
    };

    if json_output {
        print_json(&output)?;
    } else {
        println!(
            "{} {}",
            "Mixing:".cyan().bold(),
            args.manifest.display()
        );
        for layer in &output.layers {
            println!(
                "  {} #{} seed {} at {:.3}s x{:.2} ({} samples)",
                "Layer".dimmed(),
                layer.index,
                layer.seed,
                layer.offset_seconds,
                layer.volume,
                layer.num_samples
            );
        }
        reporting::print_warnings(&output.warnings);
        reporting::print_errors(&output.errors);
        if let Some(info) = &output.output {
            reporting::print_file_info(info);
        }
        reporting::print_status(output.success, "mixdown");
    }

    Ok(ExitCode::from(code))
}

fn layer_path(index: usize, field: Option<&str>) -> String {
    match field {
        Some(field) => format!("layers[{}].{}", index, field),
        None => format!("layers[{}]", index),
    }
}

fn invalid(message: String, path: String) -> JsonError {
    JsonError::new(error_codes::INVALID_ARGUMENTS, message).with_path(path)
}

/// Checks the post-mix settings.
fn check_mix_settings(manifest: &Manifest) -> Vec<JsonError> {
    let mut errors = Vec::new();
    if let Some(threshold) = manifest.soft_clip {
        if !(threshold > 0.0 && threshold < 1.0) {
            errors.push(invalid(
                format!("soft_clip threshold must be between 0 and 1, got {}", threshold),
                "soft_clip".to_string(),
            ));
        }
    }
    if let Some(headroom_db) = manifest.normalize_db {
        if !(headroom_db.is_finite() && headroom_db <= 0.0) {
            errors.push(invalid(
                format!("normalize_db must be finite and at most 0, got {}", headroom_db),
                "normalize_db".to_string(),
            ));
        }
    }
    errors
}

/// Checks a layer's placement. The layer must end within the duration budget.
fn check_placement(index: usize, layer: &ManifestLayer, duration: f64) -> Vec<JsonError> {
    let mut errors = Vec::new();
    if !layer.offset_seconds.is_finite() {
        errors.push(invalid(
            format!("offset_seconds must be finite, got {}", layer.offset_seconds),
            layer_path(index, Some("offset_seconds")),
        ));
    } else if layer.offset_seconds.max(0.0) + duration > MAX_DURATION_SECONDS {
        errors.push(invalid(
            format!(
                "layer ends at {:.3}s, past the {}s mixdown limit",
                layer.offset_seconds.max(0.0) + duration,
                MAX_DURATION_SECONDS
            ),
            layer_path(index, Some("offset_seconds")),
        ));
    }
    if !layer.volume.is_finite() {
        errors.push(invalid(
            format!("volume must be finite, got {}", layer.volume),
            layer_path(index, Some("volume")),
        ));
    }
    errors
}

/// Renders a parsed manifest and writes the mix.
pub fn mixdown(manifest: &Manifest, args: &MixdownArgs<'_>) -> (MixdownOutput, u8) {
    if manifest.layers.is_empty() {
        let error = JsonError::new(error_codes::INVALID_ARGUMENTS, "manifest has no layers")
            .with_path("layers");
        return (MixdownOutput::failure(vec![error], vec![]), EXIT_INPUT);
    }

    let mut errors = check_mix_settings(manifest);
    let mut warnings = Vec::new();
    let mut params: Vec<SynthesisParameters> = Vec::with_capacity(manifest.layers.len());

    for (index, layer) in manifest.layers.iter().enumerate() {
        let layer_params = match layer.parameters() {
            Ok(p) => p,
            Err(e) => {
                errors.push(JsonError::from(&e).with_path(layer_path(index, None)));
                continue;
            }
        };

        let validation = validate_parameters(&layer_params, args.sample_rate);
        for w in &validation.warnings {
            let mut warning = JsonWarning::from(w);
            warning.path = Some(layer_path(index, w.path.as_deref()));
            warnings.push(warning);
        }
        for e in &validation.errors {
            errors.push(JsonError::from(e).with_path(layer_path(index, e.path.as_deref())));
        }
        let (resolved, _) = layer_params.resolve_with_warnings();
        errors.extend(check_placement(index, layer, resolved.total_duration()));
        params.push(layer_params);
    }

    if !errors.is_empty() {
        return (MixdownOutput::failure(errors, warnings), EXIT_INPUT);
    }
    let sample_rate = match output_sample_rate(args.sample_rate) {
        Ok(rate) => rate,
        Err(error) => return (MixdownOutput::failure(vec![error], warnings), EXIT_INPUT),
    };

    let options = GenerateOptions {
        seed: manifest.seed,
        convolution: args.convolution,
    };
    let rendered = render_batch(&params, args.sample_rate, &options);

    let mut mixer = Mixer::new(args.sample_rate);
    let mut layers = Vec::with_capacity(rendered.len());
    for (index, (result, layer)) in rendered.into_iter().zip(&manifest.layers).enumerate() {
        match result {
            Ok(generated) => {
                layers.push(MixdownLayerInfo {
                    index,
                    seed: generated.seed,
                    offset_seconds: layer.offset_seconds.max(0.0),
                    volume: layer.volume,
                    num_samples: generated.buffer.len(),
                });
                mixer.add_layer(
                    Layer::new(generated.buffer, layer.volume)
                        .with_offset_seconds(layer.offset_seconds, args.sample_rate),
                );
            }
            Err(e) => {
                let error = JsonError::from(&GenerationError::from_backend(e));
                errors.push(error.with_path(layer_path(index, None)));
            }
        }
    }

    if !errors.is_empty() {
        return (MixdownOutput::failure(errors, warnings), EXIT_GENERATION);
    }

    let mut mixed = mixer.mix();
    if let Some(headroom_db) = manifest.normalize_db {
        normalize_stereo(&mut mixed, headroom_db);
    }
    if let Some(threshold) = manifest.soft_clip {
        soft_clip_stereo(&mut mixed, threshold);
    }

    let wav = match WavResult::encode(&mixed, sample_rate, args.format)
        .and_then(|wav| wav.save(args.out).map(|_| wav))
    {
        Ok(wav) => wav,
        Err(e) => {
            let error = JsonError::from(&GenerationError::from_backend(e))
                .with_path(args.out.display().to_string());
            let mut output = MixdownOutput::failure(vec![error], warnings);
            output.layers = layers;
            return (output, EXIT_GENERATION);
        }
    };
    info!(path = %args.out.display(), layers = layers.len(), "wrote mixdown");

    let output = MixdownOutput {
        success: true,
        layers,
        output: Some(AudioFileInfo {
            path: args.out.display().to_string(),
            format: wav.format.to_string(),
            sample_rate,
            num_samples: wav.num_samples,
            duration_seconds: wav.duration_seconds(),
            peak: mixed.peak(),
            pcm_hash: wav.pcm_hash,
        }),
        errors: Vec::new(),
        warnings,
    };
    (output, 0)
}
