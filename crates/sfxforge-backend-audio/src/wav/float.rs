//! 32-bit float WAV export through `hound`.

use std::io::{Cursor, Seek, Write};

use crate::error::AudioResult;
use crate::mixer::StereoBuffer;

/// Stream spec for stereo 32-bit float.
pub fn float32_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    }
}

/// Writes `buffer` as interleaved 32-bit float frames.
pub fn write_float32<W: Write + Seek>(
    writer: W,
    buffer: &StereoBuffer,
    sample_rate: u32,
) -> AudioResult<()> {
    let mut wav = hound::WavWriter::new(writer, float32_spec(sample_rate))?;
    for (&l, &r) in buffer.left.iter().zip(&buffer.right) {
        wav.write_sample(l as f32)?;
        wav.write_sample(r as f32)?;
    }
    wav.finalize()?;
    Ok(())
}

/// Builds a 32-bit float WAV file in memory.
pub fn write_float32_to_vec(buffer: &StereoBuffer, sample_rate: u32) -> AudioResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(64 + buffer.len() * 8));
    write_float32(&mut cursor, buffer, sample_rate)?;
    Ok(cursor.into_inner())
}
