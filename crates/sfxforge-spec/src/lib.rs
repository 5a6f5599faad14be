//! sfxforge parameter library
//!
//! This crate provides the parameter record, default resolution, validation,
//! presets and hashing for sfxforge sound generation requests. A request is a
//! flat JSON record of optional synthesis fields plus a sample rate.
//!
//! # Example
//!
//! ```
//! use sfxforge_spec::{SynthesisParameters, SynthesisType};
//! use sfxforge_spec::validation::validate_parameters;
//!
//! let params = SynthesisParameters::from_json(
//!     r#"{"synthesisType": "fm", "frequency": 440, "fmRatio": 2, "release": 0.5}"#,
//! )
//! .unwrap();
//! assert_eq!(params.synthesis_type, Some(SynthesisType::Fm));
//!
//! let result = validate_parameters(&params, 44100.0);
//! assert!(result.is_ok());
//!
//! let resolved = params.resolve();
//! assert_eq!(resolved.envelope.release, 0.5);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types, shared backend error trait
//! - [`params`]: The parameter record and its enum vocabularies
//! - [`resolve`]: Default resolution into [`ResolvedParameters`]
//! - [`validation`]: Sample rate and buffer length checks
//! - [`presets`]: Named parameter sets
//! - [`hash`]: Canonical hashing and seed derivation

pub mod error;
pub mod hash;
pub mod params;
pub mod presets;
pub mod resolve;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use hash::{canonical_value_hash, derive_layer_seed, params_hash};
pub use params::{NoiseType, SynthesisParameters, SynthesisType, Waveform};
pub use presets::Preset;
pub use resolve::{db_to_linear, EnvelopeParams, ResolvedParameters};
pub use validation::{
    buffer_length, validate_parameters, validate_sample_rate, MAX_DURATION_SECONDS, MAX_SAMPLE_RATE,
};
