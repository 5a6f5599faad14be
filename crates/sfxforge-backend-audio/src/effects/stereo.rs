//! Mid/side stereo width.

use crate::mixer::StereoBuffer;

/// Widens the stereo image in place.
///
/// `mid = (L + R) / 2`, `side = (L - R) / 2 * (1 + width)`, then
/// `L = mid + side`, `R = mid - side`. A width of zero leaves the buffer
/// untouched; a width of one doubles the side signal.
pub fn apply_width(buffer: &mut StereoBuffer, width: f64) {
    if width == 0.0 {
        return;
    }
    let side_gain = 1.0 + width;

    for (l, r) in buffer.left.iter_mut().zip(buffer.right.iter_mut()) {
        let mid = (*l + *r) * 0.5;
        let side = (*l - *r) * 0.5 * side_gain;
        *l = mid + side;
        *r = mid - side;
    }
}
