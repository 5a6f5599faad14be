//! CLI command implementations

pub mod json_output;
pub mod mixdown;
pub mod presets;
pub mod render;
pub mod validate;

mod reporting;

/// Exit code for unreadable input or rejected parameters.
pub const EXIT_INPUT: u8 = 1;
/// Exit code for failures while rendering or writing audio.
pub const EXIT_GENERATION: u8 = 2;

use json_output::{error_codes, JsonError};

/// Sample rate written to the WAV header.
///
/// Runs after parameter validation, so the rate is already finite, positive
/// and within the supported maximum. File output additionally needs a whole
/// number of Hz, otherwise the header would disagree with the rendered audio.
pub(crate) fn output_sample_rate(sample_rate: f64) -> Result<u32, JsonError> {
    if sample_rate >= 1.0 && sample_rate.fract() == 0.0 && sample_rate <= u32::MAX as f64 {
        Ok(sample_rate as u32)
    } else {
        Err(JsonError::new(
            error_codes::INVALID_ARGUMENTS,
            format!(
                "WAV output needs a whole number of Hz of at least 1, got {}",
                sample_rate
            ),
        )
        .with_path("sampleRate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_sample_rate() {
        assert_eq!(output_sample_rate(44100.0).unwrap(), 44100);
        assert_eq!(output_sample_rate(1.0).unwrap(), 1);
        for bad in [0.4, 22050.5, 0.0, f64::NAN] {
            let err = output_sample_rate(bad).unwrap_err();
            assert_eq!(err.code, error_codes::INVALID_ARGUMENTS);
            assert_eq!(err.path.as_deref(), Some("sampleRate"));
        }
    }
}
