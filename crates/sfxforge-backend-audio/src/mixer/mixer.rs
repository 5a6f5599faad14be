//! Mixdown of rendered stereo buffers.

use tracing::debug;

use super::types::{Layer, StereoBuffer};

/// Sums stereo layers at their offsets.
#[derive(Debug)]
pub struct Mixer {
    /// Fixed output length; `None` fits the longest layer.
    num_samples: Option<usize>,
    /// Sample rate.
    sample_rate: f64,
    /// Accumulated layers.
    layers: Vec<Layer>,
}

impl Mixer {
    /// Creates a mixer whose output length fits its layers.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            num_samples: None,
            sample_rate,
            layers: Vec::new(),
        }
    }

    /// Creates a mixer with a fixed output length. Layers running past the
    /// end are truncated.
    pub fn with_length(num_samples: usize, sample_rate: f64) -> Self {
        Self {
            num_samples: Some(num_samples),
            ..Self::new(sample_rate)
        }
    }

    /// Adds a layer to the mix.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Adds a buffer at `offset_seconds` with linear `volume`.
    pub fn add_buffer(&mut self, buffer: StereoBuffer, volume: f64, offset_seconds: f64) {
        let layer =
            Layer::new(buffer, volume).with_offset_seconds(offset_seconds, self.sample_rate);
        self.add_layer(layer);
    }

    /// Number of layers added.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Sample rate of the mix.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Output length in samples per channel.
    pub fn len(&self) -> usize {
        self.num_samples
            .unwrap_or_else(|| self.layers.iter().map(Layer::end).max().unwrap_or(0))
    }

    /// Returns true if the output would be empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mixes all layers into one stereo buffer.
    pub fn mix(&self) -> StereoBuffer {
        let num_samples = self.len();
        let mut output = StereoBuffer::new(num_samples);
        debug!(layers = self.layers.len(), num_samples, "mixing layers");

        for layer in &self.layers {
            let start = layer.offset_samples.min(num_samples);
            let end = layer.end().min(num_samples);
            let count = end - start;

            let dest = output.left[start..end].iter_mut().zip(&layer.buffer.left[..count]);
            for (out, s) in dest {
                *out += s * layer.volume;
            }
            let dest = output.right[start..end].iter_mut().zip(&layer.buffer.right[..count]);
            for (out, s) in dest {
                *out += s * layer.volume;
            }
        }

        output
    }
}
