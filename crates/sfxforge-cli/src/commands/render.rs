//! Render command implementation
//!
//! Renders one parameter record or preset to a WAV file.

use anyhow::Result;
use colored::Colorize;
use sfxforge_backend_audio::{generate_with_options, ConvolutionMethod, GenerateOptions, SampleFormat, WavResult};
use sfxforge_spec::{params_hash, validate_parameters, GenerationError};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::json_output::{
    print_json, warnings_to_json, AudioFileInfo, JsonError, RenderOutput,
};
use super::reporting;
use super::{output_sample_rate, EXIT_GENERATION, EXIT_INPUT};
use crate::input::load_source;

/// Arguments of the render command.
#[derive(Debug, Clone)]
pub struct RenderArgs<'a> {
    /// Parameter file.
    pub params: Option<&'a Path>,
    /// Preset name.
    pub preset: Option<&'a str>,
    /// Output WAV path.
    pub out: &'a Path,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Seed overriding the record's seed.
    pub seed: Option<u32>,
    /// Output encoding.
    pub format: SampleFormat,
    /// Reverb convolution algorithm.
    pub convolution: ConvolutionMethod,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 for input errors, 2 for generation errors
pub fn run(args: &RenderArgs<'_>, json_output: bool) -> Result<ExitCode> {
    let (output, code) = render(args);

    if json_output {
        print_json(&output)?;
    } else {
        let source = args
            .params
            .map(|p| p.display().to_string())
            .or_else(|| args.preset.map(|p| format!("preset {}", p)))
            .unwrap_or_default();
        println!("{} {}", "Rendering:".cyan().bold(), source);
        reporting::print_warnings(&output.warnings);
        reporting::print_errors(&output.errors);
        if let Some(info) = &output.output {
            if let Some(seed) = output.seed {
                println!("  {} {}", "Seed:".dimmed(), seed);
            }
            reporting::print_file_info(info);
        }
        reporting::print_status(output.success, "render");
    }

    Ok(ExitCode::from(code))
}

/// Renders and writes the file, returning the report and exit code.
pub fn render(args: &RenderArgs<'_>) -> (RenderOutput, u8) {
    let mut params = match load_source(args.params, args.preset) {
        Ok(params) => params,
        Err(e) => return (RenderOutput::failure(vec![JsonError::from(&e)], vec![]), EXIT_INPUT),
    };
    if let Some(seed) = args.seed {
        params.seed = Some(seed);
    }

    let validation = validate_parameters(&params, args.sample_rate);
    let warnings = warnings_to_json(&validation.warnings);
    if !validation.is_ok() {
        let errors = validation.errors.iter().map(JsonError::from).collect();
        return (RenderOutput::failure(errors, warnings), EXIT_INPUT);
    }
    let sample_rate = match output_sample_rate(args.sample_rate) {
        Ok(rate) => rate,
        Err(error) => return (RenderOutput::failure(vec![error], warnings), EXIT_INPUT),
    };

    let options = GenerateOptions {
        seed: None,
        convolution: args.convolution,
    };
    let generated = match generate_with_options(&params, args.sample_rate, &options) {
        Ok(generated) => generated,
        Err(e) => {
            let error = JsonError::from(&GenerationError::from_backend(e));
            return (RenderOutput::failure(vec![error], warnings), EXIT_GENERATION);
        }
    };

    let wav = match WavResult::encode(&generated.buffer, sample_rate, args.format)
        .and_then(|wav| wav.save(args.out).map(|_| wav))
    {
        Ok(wav) => wav,
        Err(e) => {
            let error = JsonError::from(&GenerationError::from_backend(e))
                .with_path(args.out.display().to_string());
            return (RenderOutput::failure(vec![error], warnings), EXIT_GENERATION);
        }
    };
    info!(path = %args.out.display(), seed = generated.seed, "wrote render");

    let output = RenderOutput {
        success: true,
        params_hash: params_hash(&params).ok(),
        seed: Some(generated.seed),
        output: Some(AudioFileInfo {
            path: args.out.display().to_string(),
            format: wav.format.to_string(),
            sample_rate,
            num_samples: wav.num_samples,
            duration_seconds: wav.duration_seconds(),
            peak: generated.buffer.peak(),
            pcm_hash: wav.pcm_hash,
        }),
        errors: Vec::new(),
        warnings,
    };
    (output, 0)
}
