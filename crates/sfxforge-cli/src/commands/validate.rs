//! Validate command implementation
//!
//! Checks a parameter record without rendering it.

use anyhow::Result;
use colored::Colorize;
use sfxforge_spec::{buffer_length, params_hash, validate_parameters};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{print_json, warnings_to_json, JsonError, ValidateOutput};
use super::reporting;
use super::EXIT_INPUT;
use crate::input::load_source;

/// Run the validate command
///
/// # Arguments
/// * `params_path` - Parameter file
/// * `preset` - Preset name, instead of a file
/// * `sample_rate` - Sample rate the record would be rendered at
/// * `json_output` - Print a JSON report instead of colored text
///
/// # Returns
/// Exit code: 0 if valid, 1 otherwise
pub fn run(
    params_path: Option<&Path>,
    preset: Option<&str>,
    sample_rate: f64,
    json_output: bool,
) -> Result<ExitCode> {
    let output = validate(params_path, preset, sample_rate);

    if json_output {
        print_json(&output)?;
    } else {
        let source = params_path
            .map(|p| p.display().to_string())
            .or_else(|| preset.map(|p| format!("preset {}", p)))
            .unwrap_or_default();
        println!("{} {}", "Validating:".cyan().bold(), source);
        reporting::print_warnings(&output.warnings);
        reporting::print_errors(&output.errors);
        if let Some(hash) = &output.params_hash {
            println!("  {} {}", "Params hash:".dimmed(), reporting::short_hash(hash));
        }
        if let Some(n) = output.num_samples {
            println!(
                "  {} {} samples ({:.3}s)",
                "Length:".dimmed(),
                n,
                n as f64 / sample_rate
            );
        }
        reporting::print_status(output.success, "validation");
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INPUT)
    })
}

/// Builds the validation report.
pub fn validate(params_path: Option<&Path>, preset: Option<&str>, sample_rate: f64) -> ValidateOutput {
    let params = match load_source(params_path, preset) {
        Ok(params) => params,
        Err(e) => {
            return ValidateOutput {
                success: false,
                params_hash: None,
                num_samples: None,
                errors: vec![JsonError::from(&e)],
                warnings: Vec::new(),
            }
        }
    };

    let validation = validate_parameters(&params, sample_rate);
    let num_samples = if validation.is_ok() {
        buffer_length(&params.resolve(), sample_rate).ok()
    } else {
        None
    };

    ValidateOutput {
        success: validation.is_ok(),
        params_hash: params_hash(&params).ok(),
        num_samples,
        errors: validation.errors.iter().map(JsonError::from).collect(),
        warnings: warnings_to_json(&validation.warnings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_preset() {
        let output = validate(None, Some("kick"), 44100.0);
        assert!(output.success);
        assert!(output.num_samples.unwrap() > 0);
        assert_eq!(output.params_hash.unwrap().len(), 64);
    }

    #[test]
    fn test_validate_reports_clamps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"synthesisType": "additive", "pan": 4.0}}"#).unwrap();
        let output = validate(Some(file.path()), None, 44100.0);
        assert!(output.success);
        assert!(output
            .warnings
            .iter()
            .any(|w| w.path.as_deref() == Some("pan")));
    }

    #[test]
    fn test_validate_bad_sample_rate() {
        let output = validate(None, Some("pluck"), -1.0);
        assert!(!output.success);
        assert_eq!(output.num_samples, None);
        assert_eq!(output.errors[0].code, "E001");
    }
}
