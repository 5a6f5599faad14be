//! Error types for the audio backend.

use sfxforge_spec::{BackendError, ErrorCode, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation and export.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Sample rate is non-finite, not positive, or above the supported maximum.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Requested buffer would hold no samples.
    #[error("empty buffer: {message}")]
    EmptyBuffer {
        /// Error message.
        message: String,
    },

    /// Requested buffer exceeds the duration budget.
    #[error("buffer too large: {message}")]
    BufferTooLarge {
        /// Error message.
        message: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float WAV encoding error.
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Converts a request validation error, keeping the offending sample rate.
    pub(crate) fn from_validation(err: ValidationError, sample_rate: f64) -> Self {
        match err.code {
            ErrorCode::InvalidSampleRate => Self::InvalidSampleRate { rate: sample_rate },
            ErrorCode::EmptyBuffer => Self::EmptyBuffer {
                message: err.message,
            },
            ErrorCode::BufferTooLarge => Self::BufferTooLarge {
                message: err.message,
            },
            ErrorCode::UnknownPreset => Self::invalid_param("preset", err.message),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::EmptyBuffer { .. } => "AUDIO_002",
            AudioError::BufferTooLarge { .. } => "AUDIO_003",
            AudioError::InvalidParameter { .. } => "AUDIO_004",
            AudioError::Io(_) => "AUDIO_005",
            AudioError::Wav(_) => "AUDIO_006",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("volume", "must be finite");
        assert!(err.to_string().contains("volume"));
        assert!(err.to_string().contains("must be finite"));
        assert_eq!(err.code(), "AUDIO_004");
    }

    #[test]
    fn test_from_validation_keeps_rate() {
        let err = AudioError::from_validation(
            ValidationError::new(ErrorCode::InvalidSampleRate, "bad"),
            -5.0,
        );
        assert!(matches!(err, AudioError::InvalidSampleRate { rate } if rate == -5.0));
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
    }
}
