//! Tests for mixdown.

use super::*;

fn constant(len: usize, value: f64) -> StereoBuffer {
    StereoBuffer {
        left: vec![value; len],
        right: vec![-value; len],
    }
}

#[test]
fn test_empty_mixer() {
    let mixer = Mixer::new(44100.0);
    assert!(mixer.is_empty());
    assert_eq!(mixer.layer_count(), 0);
    assert!(mixer.mix().is_empty());
}

#[test]
fn test_length_fits_layers() {
    let mut mixer = Mixer::new(1000.0);
    mixer.add_layer(Layer::new(constant(100, 0.5), 1.0));
    mixer.add_layer(Layer::new(constant(50, 0.5), 1.0).with_offset(200));
    assert_eq!(mixer.len(), 250);
}

#[test]
fn test_offset_samples() {
    let mut mixer = Mixer::new(44100.0);
    mixer.add_layer(Layer::new(constant(20, 1.0), 1.0).with_offset(50));
    let output = mixer.mix();

    assert_eq!(output.len(), 70);
    for (i, sample) in output.left.iter().enumerate() {
        let expected = if i < 50 { 0.0 } else { 1.0 };
        assert!(
            (sample - expected).abs() < 1e-12,
            "Sample {} should be {} but is {}",
            i,
            expected,
            sample
        );
    }
    assert!(output.right[60] < 0.0);
}

#[test]
fn test_offset_seconds() {
    let sample_rate = 1000.0;
    let mut mixer = Mixer::new(sample_rate);
    mixer.add_buffer(constant(10, 1.0), 0.5, 0.25);
    let output = mixer.mix();

    assert_eq!(output.len(), 260);
    assert_eq!(output.left[249], 0.0);
    assert!((output.left[250] - 0.5).abs() < 1e-12);
}

#[test]
fn test_negative_offset_clamps_to_start() {
    let layer = Layer::new(constant(10, 1.0), 1.0).with_offset_seconds(-1.0, 1000.0);
    assert_eq!(layer.offset_samples, 0);
}

#[test]
fn test_overlapping_layers_sum() {
    let mut mixer = Mixer::new(44100.0);
    mixer.add_layer(Layer::new(constant(100, 0.25), 1.0));
    mixer.add_layer(Layer::new(constant(100, 0.25), 2.0).with_offset(50));
    let output = mixer.mix();

    assert!((output.left[10] - 0.25).abs() < 1e-12);
    assert!((output.left[75] - 0.75).abs() < 1e-12);
    assert!((output.left[120] - 0.5).abs() < 1e-12);
    assert!((output.right[75] + 0.75).abs() < 1e-12);
}

#[test]
fn test_fixed_length_truncates() {
    let mut mixer = Mixer::with_length(60, 44100.0);
    mixer.add_layer(Layer::new(constant(100, 1.0), 1.0).with_offset(40));
    mixer.add_layer(Layer::new(constant(10, 1.0), 1.0).with_offset(500));
    let output = mixer.mix();

    assert_eq!(output.len(), 60);
    assert_eq!(output.left[39], 0.0);
    assert_eq!(output.left[59], 1.0);
}

#[test]
fn test_saturated_offset_does_not_overflow_length() {
    let mut mixer = Mixer::new(44100.0);
    mixer.add_layer(Layer::new(constant(10, 0.5), 1.0).with_offset_seconds(1.0e20, 44100.0));
    assert_eq!(mixer.len(), usize::MAX);

    let fixed = {
        let mut m = Mixer::with_length(20, 44100.0);
        m.add_buffer(constant(10, 0.5), 1.0, 1.0e20);
        m.mix()
    };
    assert_eq!(fixed.len(), 20);
    assert!(fixed.left.iter().all(|&s| s == 0.0));
}
