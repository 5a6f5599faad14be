//! Validation of generation requests.
//!
//! Parameters themselves never fail: anything non-finite or out of range is
//! replaced during resolution and reported here as a warning. The hard errors
//! are a bad sample rate and a buffer that would be empty or exceed the
//! duration budget. Together the rate ceiling and the duration budget bound
//! every allocation a generation call makes.

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::params::SynthesisParameters;
use crate::resolve::ResolvedParameters;

/// Longest output a single call may produce, in seconds.
pub const MAX_DURATION_SECONDS: f64 = 120.0;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: f64 = 384_000.0;

/// Checks that a sample rate is finite, positive and at most
/// [`MAX_SAMPLE_RATE`].
pub fn validate_sample_rate(sample_rate: f64) -> Result<(), ValidationError> {
    if sample_rate.is_finite() && sample_rate > 0.0 && sample_rate <= MAX_SAMPLE_RATE {
        Ok(())
    } else {
        Err(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            format!(
                "sample rate must be finite, positive and at most {} Hz, got {}",
                MAX_SAMPLE_RATE, sample_rate
            ),
            "sampleRate",
        ))
    }
}

/// Computes the output length in samples: `ceil(sampleRate * totalDuration)`.
pub fn buffer_length(
    resolved: &ResolvedParameters,
    sample_rate: f64,
) -> Result<usize, ValidationError> {
    validate_sample_rate(sample_rate)?;

    let duration = resolved.total_duration();
    if duration > MAX_DURATION_SECONDS {
        return Err(ValidationError::new(
            ErrorCode::BufferTooLarge,
            format!(
                "total duration {:.3}s exceeds the {}s limit",
                duration, MAX_DURATION_SECONDS
            ),
        ));
    }

    let length = (sample_rate * duration).ceil();
    if !(length >= 1.0) {
        return Err(ValidationError::new(
            ErrorCode::EmptyBuffer,
            format!(
                "{}s at {} Hz resolves to an empty buffer",
                duration, sample_rate
            ),
        ));
    }

    Ok(length as usize)
}

/// Validates a generation request without rendering it.
///
/// Sanitized fields appear as warnings; the request fails only on the errors
/// [`buffer_length`] reports.
pub fn validate_parameters(params: &SynthesisParameters, sample_rate: f64) -> ValidationResult {
    let mut result = ValidationResult::success();
    let (resolved, warnings) = params.resolve_with_warnings();

    for warning in warnings {
        result.add_warning(warning);
    }
    if let Err(e) = buffer_length(&resolved, sample_rate) {
        result.add_error(e);
    }

    result
}
