//! Convolution reverb with a synthesized stereo impulse response.
//!
//! Each channel gets its own impulse response: uniform noise under an
//! exponential decay `exp(-i / (0.5 * sample_rate))`, 1.8 s long, with the
//! first 50 ms boosted by 1.5x as early reflections. Using separate noise per
//! channel decorrelates left and right. The response is scaled to unit energy
//! so the wet signal sits at about the dry level.
//!
//! Two convolution methods produce the same linear convolution truncated to
//! the buffer length:
//!
//! - [`ConvolutionMethod::Direct`] sums `input[i] * ir[k]` in 512-sample input
//!   blocks, skipping zero samples and all-zero blocks. Cost is
//!   `O(n * ir_len)` in the worst case, but sparse input (short hits followed
//!   by silence) is cheap.
//! - [`ConvolutionMethod::Fft`] multiplies spectra with `rustfft`, costing
//!   `O((n + ir_len) log(n + ir_len))` regardless of content.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::mixer::StereoBuffer;
use crate::rng::{bipolar, component_rng, keys};

/// Impulse response length in seconds.
pub const IR_SECONDS: f64 = 1.8;
/// Decay time constant as a fraction of the sample rate.
pub const DECAY_SECONDS: f64 = 0.5;
/// Length of the boosted early-reflection region in seconds.
pub const EARLY_SECONDS: f64 = 0.05;
/// Gain applied to early reflections.
pub const EARLY_GAIN: f64 = 1.5;
/// Input block size for direct convolution.
pub const BLOCK_SIZE: usize = 512;

/// Convolution algorithm used to apply the impulse response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConvolutionMethod {
    /// Block-chunked direct summation.
    #[default]
    Direct,
    /// Spectral multiplication via FFT.
    Fft,
}

/// Builds one channel's impulse response, normalized to unit energy.
pub fn impulse_response(sample_rate: f64, seed: u32, key: &str) -> Vec<f64> {
    let len = (IR_SECONDS * sample_rate).round().max(1.0) as usize;
    let early = (EARLY_SECONDS * sample_rate).round() as usize;
    let decay = DECAY_SECONDS * sample_rate;
    let mut rng = component_rng(seed, key);

    let mut ir: Vec<f64> = (0..len)
        .map(|i| {
            let gain = if i < early { EARLY_GAIN } else { 1.0 };
            bipolar(&mut rng) * (-(i as f64) / decay).exp() * gain
        })
        .collect();

    let energy = ir.iter().map(|s| s * s).sum::<f64>().sqrt();
    if energy > 0.0 {
        for s in &mut ir {
            *s /= energy;
        }
    }
    ir
}

/// Applies reverb in place.
///
/// `mix` is the wet proportion: output = `wet * mix + dry * (1 - mix)`.
/// A zero mix returns without touching the buffer.
pub fn apply(
    buffer: &mut StereoBuffer,
    mix: f64,
    sample_rate: f64,
    seed: u32,
    method: ConvolutionMethod,
) {
    if mix <= 0.0 || buffer.is_empty() {
        return;
    }
    let mix = mix.min(1.0);

    let ir_left = impulse_response(sample_rate, seed, keys::REVERB_LEFT);
    let ir_right = impulse_response(sample_rate, seed, keys::REVERB_RIGHT);

    let (wet_left, wet_right) = match method {
        ConvolutionMethod::Direct => (
            convolve_direct(&buffer.left, &ir_left),
            convolve_direct(&buffer.right, &ir_right),
        ),
        ConvolutionMethod::Fft => (
            convolve_fft(&buffer.left, &ir_left),
            convolve_fft(&buffer.right, &ir_right),
        ),
    };

    blend(&mut buffer.left, &wet_left, mix);
    blend(&mut buffer.right, &wet_right, mix);
}

fn blend(dry: &mut [f64], wet: &[f64], mix: f64) {
    for (d, w) in dry.iter_mut().zip(wet) {
        *d = w * mix + *d * (1.0 - mix);
    }
}

/// Linear convolution of `input` with `ir`, truncated to `input.len()`.
pub fn convolve_direct(input: &[f64], ir: &[f64]) -> Vec<f64> {
    let n = input.len();
    let mut output = vec![0.0; n];

    for block_start in (0..n).step_by(BLOCK_SIZE) {
        let block_end = (block_start + BLOCK_SIZE).min(n);
        let block = &input[block_start..block_end];
        if block.iter().all(|&x| x == 0.0) {
            continue;
        }

        for (offset, &x) in block.iter().enumerate() {
            if x == 0.0 {
                continue;
            }
            let i = block_start + offset;
            let taps = ir.len().min(n - i);
            for (out, &h) in output[i..i + taps].iter_mut().zip(&ir[..taps]) {
                *out += x * h;
            }
        }
    }

    output
}

/// Linear convolution via FFT, truncated to `input.len()`.
pub fn convolve_fft(input: &[f64], ir: &[f64]) -> Vec<f64> {
    let n = input.len();
    if n == 0 || ir.is_empty() {
        return vec![0.0; n];
    }
    let size = (n + ir.len() - 1).next_power_of_two();

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(size);
    let inverse = planner.plan_fft_inverse(size);

    let mut signal = padded(input, size);
    let mut kernel = padded(ir, size);
    forward.process(&mut signal);
    forward.process(&mut kernel);

    for (s, k) in signal.iter_mut().zip(&kernel) {
        *s *= k;
    }
    inverse.process(&mut signal);

    let scale = 1.0 / size as f64;
    signal[..n].iter().map(|c| c.re * scale).collect()
}

fn padded(samples: &[f64], size: usize) -> Vec<Complex<f64>> {
    let mut buf = vec![Complex::new(0.0, 0.0); size];
    for (b, &s) in buf.iter_mut().zip(samples) {
        b.re = s;
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = 8000.0;

    fn impulse_buffer(len: usize) -> StereoBuffer {
        let mut buffer = StereoBuffer::new(len);
        buffer.left[0] = 1.0;
        buffer.right[0] = 1.0;
        buffer
    }

    #[test]
    fn test_impulse_response_shape() {
        let ir = impulse_response(SR, 1, keys::REVERB_LEFT);
        assert_eq!(ir.len(), (IR_SECONDS * SR) as usize);

        let energy: f64 = ir.iter().map(|s| s * s).sum();
        assert!((energy - 1.0).abs() < 1e-9);

        // The tail is far quieter than the head.
        let head = ir[..400].iter().map(|s| s.abs()).fold(0.0, f64::max);
        let tail = ir[ir.len() - 400..].iter().map(|s| s.abs()).fold(0.0, f64::max);
        assert!(tail < head * 0.05, "head {} tail {}", head, tail);
    }

    #[test]
    fn test_channels_decorrelated() {
        let left = impulse_response(SR, 1, keys::REVERB_LEFT);
        let right = impulse_response(SR, 1, keys::REVERB_RIGHT);
        assert_ne!(left, right);
    }

    #[test]
    fn test_zero_mix_is_noop() {
        let mut buffer = StereoBuffer {
            left: (0..800).map(|i| (i as f64 * 0.05).sin()).collect(),
            right: (0..800).map(|i| (i as f64 * 0.07).cos()).collect(),
        };
        let dry = buffer.clone();
        apply(&mut buffer, 0.0, SR, 3, ConvolutionMethod::Direct);
        assert_eq!(buffer, dry);
    }

    #[test]
    fn test_full_wet_impulse_reproduces_ir() {
        let mut buffer = impulse_buffer(1000);
        apply(&mut buffer, 1.0, SR, 7, ConvolutionMethod::Direct);
        let ir = impulse_response(SR, 7, keys::REVERB_LEFT);
        for (out, h) in buffer.left.iter().zip(&ir) {
            assert!((out - h).abs() < 1e-12);
        }
    }

    #[test]
    fn test_direct_matches_fft() {
        let input: Vec<f64> = (0..3000)
            .map(|i| if i % 700 < 50 { (i as f64 * 0.3).sin() } else { 0.0 })
            .collect();
        let ir = impulse_response(SR, 5, keys::REVERB_LEFT);
        let direct = convolve_direct(&input, &ir);
        let fft = convolve_fft(&input, &ir);
        assert_eq!(direct.len(), input.len());
        assert_eq!(fft.len(), input.len());
        for (a, b) in direct.iter().zip(&fft) {
            assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_silent_input_stays_silent() {
        let input = vec![0.0; 2048];
        let ir = impulse_response(SR, 5, keys::REVERB_LEFT);
        assert!(convolve_direct(&input, &ir).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_partial_mix_blends() {
        let mut buffer = impulse_buffer(100);
        apply(&mut buffer, 0.25, SR, 2, ConvolutionMethod::Fft);
        let ir = impulse_response(SR, 2, keys::REVERB_LEFT);
        let expected = ir[0] * 0.25 + 0.75;
        assert!((buffer.left[0] - expected).abs() < 1e-9);
    }
}
