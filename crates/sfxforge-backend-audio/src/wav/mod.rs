//! WAV export.
//!
//! The 16-bit PCM writer emits a fixed 44-byte header and no timestamps or
//! other variable metadata, so equal buffers always give equal bytes. The
//! 32-bit float writer goes through `hound`. Both report a BLAKE3 hash of the
//! sample data alone.

mod float;
mod format;
mod pcm;
mod result;
mod writer;


pub use float::{float32_spec, write_float32, write_float32_to_vec};
pub use format::{SampleFormat, WavFormat};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{sample_to_pcm16, stereo_to_pcm16, write_wav, write_wav_to_vec, HEADER_LEN};
