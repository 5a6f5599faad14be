//! Loading parameter records, presets and mixdown manifests.

use serde::{Deserialize, Serialize};
use sfxforge_spec::{presets, SpecError, SynthesisParameters, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::commands::json_output::error_codes;

/// Errors raised while reading command input.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// File is not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: SpecError,
    },

    /// Preset name is not known.
    #[error("{0}")]
    UnknownPreset(ValidationError),

    /// Neither a parameter file nor a preset was given.
    #[error("either a parameter file or a preset name is required")]
    MissingSource,

    /// Both a parameter file and a preset were given.
    #[error("a parameter file and a preset cannot be combined")]
    ConflictingSource,
}

impl InputError {
    /// Stable code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::Read { .. } => error_codes::FILE_READ,
            InputError::Parse { .. } => error_codes::JSON_PARSE,
            InputError::UnknownPreset(_) => error_codes::UNKNOWN_PRESET,
            InputError::MissingSource | InputError::ConflictingSource => {
                error_codes::INVALID_ARGUMENTS
            }
        }
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a parameter record from a JSON file.
pub fn load_params(path: &Path) -> Result<SynthesisParameters, InputError> {
    let content = read(path)?;
    SynthesisParameters::from_json(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads parameters from exactly one of a file or a preset name.
pub fn load_source(
    params_path: Option<&Path>,
    preset: Option<&str>,
) -> Result<SynthesisParameters, InputError> {
    match (params_path, preset) {
        (Some(path), None) => load_params(path),
        (None, Some(name)) => presets::by_name(name).map_err(InputError::UnknownPreset),
        (None, None) => Err(InputError::MissingSource),
        (Some(_), Some(_)) => Err(InputError::ConflictingSource),
    }
}

fn default_volume() -> f64 {
    1.0
}

/// One sound placed in a mixdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ManifestLayer {
    /// Inline parameter record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<SynthesisParameters>,
    /// Preset name, used when `params` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Start time in seconds.
    #[serde(default)]
    pub offset_seconds: f64,
    /// Linear volume.
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl ManifestLayer {
    /// Resolves the layer's parameter record.
    pub fn parameters(&self) -> Result<SynthesisParameters, InputError> {
        match (&self.params, &self.preset) {
            (Some(params), None) => Ok(params.clone()),
            (None, Some(name)) => presets::by_name(name).map_err(InputError::UnknownPreset),
            (None, None) => Err(InputError::MissingSource),
            (Some(_), Some(_)) => Err(InputError::ConflictingSource),
        }
    }
}

/// A mixdown request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Base seed; layer `i` without its own seed derives one from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Peak headroom in dB for normalization after mixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize_db: Option<f64>,
    /// Soft clip threshold applied after mixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_clip: Option<f64>,
    /// Layers to render and sum.
    pub layers: Vec<ManifestLayer>,
}

impl Manifest {
    /// Parses a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Loads a mixdown manifest from a JSON file.
pub fn load_manifest(path: &Path) -> Result<Manifest, InputError> {
    let content = read(path)?;
    Manifest::from_json(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
