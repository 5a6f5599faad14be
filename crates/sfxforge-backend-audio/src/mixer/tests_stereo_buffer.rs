//! Tests for StereoBuffer and Layer.

use super::*;

#[test]
fn test_new_is_silent() {
    let buffer = StereoBuffer::new(16);
    assert_eq!(buffer.len(), 16);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.peak(), 0.0);
    assert!(buffer.is_mono());
}

#[test]
fn test_interleave() {
    let buffer = StereoBuffer {
        left: vec![1.0, 2.0, 3.0],
        right: vec![-1.0, -2.0, -3.0],
    };
    assert_eq!(buffer.interleave(), vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0]);
    assert!(!buffer.is_mono());
}

#[test]
fn test_finite_and_duration() {
    let mut buffer = StereoBuffer::from_mono(vec![0.0; 22050]);
    assert!(buffer.is_finite());
    assert!((buffer.duration_seconds(44100.0) - 0.5).abs() < 1e-12);
    buffer.right[3] = f64::NAN;
    assert!(!buffer.is_finite());
}

#[test]
fn test_layer_end() {
    let layer = Layer::new(StereoBuffer::new(30), 1.0).with_offset_seconds(0.01, 1000.0);
    assert_eq!(layer.offset_samples, 10);
    assert_eq!(layer.end(), 40);
}

#[test]
fn test_layer_end_saturates() {
    let layer = Layer::new(StereoBuffer::new(10), 1.0).with_offset_seconds(1.0e20, 44100.0);
    assert_eq!(layer.offset_samples, usize::MAX);
    assert_eq!(layer.end(), usize::MAX);
}
