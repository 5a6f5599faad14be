//! Core types for stereo buffers and mix layers.

/// A pair of equal-length sample arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoBuffer {
    /// Creates a silent buffer with the given number of samples per channel.
    pub fn new(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Creates a buffer with both channels equal to `mono`.
    pub fn from_mono(mono: Vec<f64>) -> Self {
        Self {
            left: mono.clone(),
            right: mono,
        }
    }

    /// Interleaves the channels as L, R, L, R, ...
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }

    /// Returns true if left and right channels are identical.
    pub fn is_mono(&self) -> bool {
        self.left == self.right
    }

    /// Largest absolute sample across both channels.
    pub fn peak(&self) -> f64 {
        self.left
            .iter()
            .chain(self.right.iter())
            .fold(0.0_f64, |a, s| a.max(s.abs()))
    }

    /// Returns true if every sample is finite.
    pub fn is_finite(&self) -> bool {
        self.left
            .iter()
            .chain(self.right.iter())
            .all(|s| s.is_finite())
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Duration in seconds at `sample_rate`.
    pub fn duration_seconds(&self, sample_rate: f64) -> f64 {
        self.len() as f64 / sample_rate
    }
}

/// A stereo buffer placed in a mixdown.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Rendered audio.
    pub buffer: StereoBuffer,
    /// Linear volume multiplier.
    pub volume: f64,
    /// Offset in samples before this layer starts.
    pub offset_samples: usize,
}

impl Layer {
    /// Creates a layer starting at the beginning of the mix.
    pub fn new(buffer: StereoBuffer, volume: f64) -> Self {
        Self {
            buffer,
            volume,
            offset_samples: 0,
        }
    }

    /// Sets the start offset in samples.
    pub fn with_offset(mut self, offset_samples: usize) -> Self {
        self.offset_samples = offset_samples;
        self
    }

    /// Sets the start offset in seconds. Negative offsets start at zero and
    /// offsets past `usize::MAX` samples saturate.
    pub fn with_offset_seconds(mut self, offset_seconds: f64, sample_rate: f64) -> Self {
        self.offset_samples = (offset_seconds.max(0.0) * sample_rate).round() as usize;
        self
    }

    /// Index one past the last sample this layer writes, saturating at
    /// `usize::MAX`.
    pub fn end(&self) -> usize {
        self.offset_samples.saturating_add(self.buffer.len())
    }
}
