//! JSON output types for machine-readable CLI output.
//!
//! Every command accepting `--json` prints exactly one of these objects to
//! stdout so scripts can parse results without scraping colored text.

use serde::{Deserialize, Serialize};
use sfxforge_spec::{GenerationError, ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Validation and backend errors pass their own codes through (`E001`,
/// `AUDIO_001`, ...).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Unknown preset name
    pub const UNKNOWN_PRESET: &str = "CLI_003";
    /// Missing or conflicting arguments
    pub const INVALID_ARGUMENTS: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Parameter field or manifest layer the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

impl From<&GenerationError> for JsonError {
    fn from(err: &GenerationError) -> Self {
        JsonError::new(err.code, err.message.clone())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Parameter field the warning refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(w: &ValidationWarning) -> Self {
        Self {
            code: w.code.code().to_string(),
            message: w.message.clone(),
            path: w.path.clone(),
        }
    }
}

/// Converts a warning list.
pub fn warnings_to_json(warnings: &[ValidationWarning]) -> Vec<JsonWarning> {
    warnings.iter().map(JsonWarning::from).collect()
}

/// Details of a written audio file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioFileInfo {
    /// Output path
    pub path: String,
    /// Sample encoding
    pub format: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Samples per channel
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak absolute sample before encoding
    pub peak: f64,
    /// BLAKE3 hash of the sample data
    pub pcm_hash: String,
}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    /// Whether the file was written
    pub success: bool,
    /// Canonical hash of the parameter record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    /// Seed used for rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Written file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<AudioFileInfo>,
    /// Errors
    pub errors: Vec<JsonError>,
    /// Sanitized fields
    pub warnings: Vec<JsonWarning>,
}

impl RenderOutput {
    /// A failed render.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            params_hash: None,
            seed: None,
            output: None,
            errors,
            warnings,
        }
    }
}

/// One rendered layer of a mixdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixdownLayerInfo {
    /// Layer index in the manifest
    pub index: usize,
    /// Seed used for the layer
    pub seed: u32,
    /// Start offset in seconds
    pub offset_seconds: f64,
    /// Linear volume
    pub volume: f64,
    /// Samples per channel before mixing
    pub num_samples: usize,
}

/// Output of `mixdown --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixdownOutput {
    /// Whether the file was written
    pub success: bool,
    /// Rendered layers
    pub layers: Vec<MixdownLayerInfo>,
    /// Written file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<AudioFileInfo>,
    /// Errors
    pub errors: Vec<JsonError>,
    /// Sanitized fields, prefixed by layer
    pub warnings: Vec<JsonWarning>,
}

impl MixdownOutput {
    /// A failed mixdown.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            layers: Vec::new(),
            output: None,
            errors,
            warnings,
        }
    }
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateOutput {
    /// Whether validation passed
    pub success: bool,
    /// Canonical hash of the parameter record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hash: Option<String>,
    /// Output length the request would produce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<usize>,
    /// Errors
    pub errors: Vec<JsonError>,
    /// Warnings
    pub warnings: Vec<JsonWarning>,
}

/// One entry of `presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetInfo {
    /// Lookup name
    pub name: String,
    /// Description
    pub description: String,
    /// Synthesis type
    pub synthesis_type: String,
    /// Full parameter record
    pub params: serde_json::Value,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
