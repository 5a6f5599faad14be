//! Deterministic 16-bit PCM WAV writing.

use std::io::{self, Write};

use crate::mixer::StereoBuffer;

use super::format::WavFormat;

/// Size of the canonical RIFF/fmt/data header.
pub const HEADER_LEN: usize = 44;

fn header(format: &WavFormat, data_size: u32) -> Vec<u8> {
    let mut h = Vec::with_capacity(HEADER_LEN);

    // RIFF header; the size excludes the first 8 bytes.
    h.extend_from_slice(b"RIFF");
    h.extend_from_slice(&(36 + data_size).to_le_bytes());
    h.extend_from_slice(b"WAVE");

    // fmt chunk
    h.extend_from_slice(b"fmt ");
    h.extend_from_slice(&16u32.to_le_bytes());
    h.extend_from_slice(&1u16.to_le_bytes()); // PCM
    h.extend_from_slice(&format.channels.to_le_bytes());
    h.extend_from_slice(&format.sample_rate.to_le_bytes());
    h.extend_from_slice(&format.byte_rate().to_le_bytes());
    h.extend_from_slice(&format.block_align().to_le_bytes());
    h.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    h.extend_from_slice(b"data");
    h.extend_from_slice(&data_size.to_le_bytes());
    h
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header(format, pcm_data.len() as u32))?;
    writer.write_all(pcm_data)
}

/// Builds a complete WAV file in memory.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut wav = header(format, pcm_data.len() as u32);
    wav.reserve(pcm_data.len());
    wav.extend_from_slice(pcm_data);
    wav
}

/// Converts one sample to 16-bit PCM, clipping to [-1, 1]. NaN maps to 0.
#[inline]
pub fn sample_to_pcm16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// Converts a stereo buffer to interleaved little-endian 16-bit PCM.
pub fn stereo_to_pcm16(buffer: &StereoBuffer) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(buffer.len() * 4);
    for (&l, &r) in buffer.left.iter().zip(&buffer.right) {
        pcm.extend_from_slice(&sample_to_pcm16(l).to_le_bytes());
        pcm.extend_from_slice(&sample_to_pcm16(r).to_le_bytes());
    }
    pcm
}
