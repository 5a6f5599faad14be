//! Parallel rendering of independent sounds.

use rayon::prelude::*;
use sfxforge_spec::{derive_layer_seed, SynthesisParameters};
use tracing::debug;

use crate::error::AudioResult;

use super::{generate_with_options, GenerateOptions, GenerateResult};

/// Renders each parameter set on the rayon pool.
///
/// Results keep the input order. When `options.seed` is set, item `i` without
/// its own seed uses `derive_layer_seed(seed, i)`, so a batch is reproducible
/// as a whole while its items stay distinct.
pub fn render_batch(
    params: &[SynthesisParameters],
    sample_rate: f64,
    options: &GenerateOptions,
) -> Vec<AudioResult<GenerateResult>> {
    debug!(count = params.len(), "rendering batch");
    params
        .par_iter()
        .enumerate()
        .map(|(index, item)| {
            let item_options = GenerateOptions {
                seed: options
                    .seed
                    .map(|base| derive_layer_seed(base, index as u32)),
                ..*options
            };
            generate_with_options(item, sample_rate, &item_options)
        })
        .collect()
}
