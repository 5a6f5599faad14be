//! Tests for normalization and soft clipping.

use super::*;

#[test]
fn test_normalize_stereo_peak() {
    let mut stereo = StereoBuffer {
        left: vec![0.5, -0.3],
        right: vec![0.2, -0.8],
    };
    normalize_stereo(&mut stereo, -3.0);

    let target = 10.0_f64.powf(-3.0 / 20.0);
    assert!((stereo.peak() - target).abs() < 1e-12);
    // Channel balance is preserved.
    assert!((stereo.left[0] / stereo.right[1] - 0.5 / -0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio() {
    let mut stereo = StereoBuffer::new(4);
    normalize_stereo(&mut stereo, 0.0);
    assert!(stereo.left.iter().chain(&stereo.right).all(|&s| s == 0.0));
}

#[test]
fn test_soft_clip_below_threshold() {
    assert!((soft_clip(0.5, 0.8) - 0.5).abs() < 0.001);
    assert!((soft_clip(-0.5, 0.8) - (-0.5)).abs() < 0.001);
    assert!((soft_clip(0.79, 0.8) - 0.79).abs() < 0.001);
}

#[test]
fn test_soft_clip_above_threshold() {
    let clipped = soft_clip(2.0, 0.8);
    assert!(clipped < 2.0, "Should be compressed");
    assert!(clipped > 0.8, "Should be above threshold");
    assert!(clipped < 1.0, "Should approach but not exceed 1.0");
    assert!((soft_clip(2.0, 0.8) + soft_clip(-2.0, 0.8)).abs() < 1e-12);
}

#[test]
fn test_soft_clip_stereo() {
    let mut stereo = StereoBuffer {
        left: vec![3.0, 0.1],
        right: vec![-3.0, -0.1],
    };
    soft_clip_stereo(&mut stereo, 0.9);
    assert!(stereo.peak() < 1.0);
    assert_eq!(stereo.left[1], 0.1);
}
