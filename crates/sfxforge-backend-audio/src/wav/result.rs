//! Encoded WAV output.

use std::path::Path;

use crate::error::{AudioError, AudioResult};
use crate::mixer::StereoBuffer;

use super::float::write_float32_to_vec;
use super::format::{SampleFormat, WavFormat};
use super::pcm::compute_pcm_hash;
use super::writer::{stereo_to_pcm16, write_wav_to_vec};

/// An encoded stereo WAV file.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the sample data only.
    pub pcm_hash: String,
    /// Sample encoding.
    pub format: SampleFormat,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes `buffer` as 16-bit PCM.
    pub fn pcm16(buffer: &StereoBuffer, sample_rate: u32) -> Self {
        let pcm = stereo_to_pcm16(buffer);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::stereo(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            format: SampleFormat::Pcm16,
            sample_rate,
            num_samples: buffer.len(),
        }
    }

    /// Encodes `buffer` as 32-bit float.
    pub fn float32(buffer: &StereoBuffer, sample_rate: u32) -> AudioResult<Self> {
        let wav_data = write_float32_to_vec(buffer, sample_rate)?;
        let pcm_hash = compute_pcm_hash(&wav_data).ok_or_else(|| {
            AudioError::invalid_param("format", "encoded float WAV has no data chunk")
        })?;

        Ok(Self {
            wav_data,
            pcm_hash,
            format: SampleFormat::Float32,
            sample_rate,
            num_samples: buffer.len(),
        })
    }

    /// Encodes `buffer` in `format`.
    pub fn encode(
        buffer: &StereoBuffer,
        sample_rate: u32,
        format: SampleFormat,
    ) -> AudioResult<Self> {
        match format {
            SampleFormat::Pcm16 => Ok(Self::pcm16(buffer, sample_rate)),
            SampleFormat::Float32 => Self::float32(buffer, sample_rate),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the file bytes to `path`.
    pub fn save(&self, path: &Path) -> AudioResult<()> {
        std::fs::write(path, &self.wav_data)?;
        Ok(())
    }
}
