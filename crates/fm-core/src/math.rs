//! Scalar and vector helpers with no hidden state.

use glam::Vec3;

/// Squared length below which a vector is treated as zero.
const NEARLY_ZERO_SQ: f32 = 1e-8;

/// Power-curve easing: `p^k`.
///
/// `p` must already be clamped to `[0, 1]` and `k > 0`.  With those inputs
/// `apply_easing(0, k) == 0`, `apply_easing(1, k) == 1`, and the result is
/// monotone in `p`.
#[inline]
pub fn apply_easing(progress: f32, strength: f32) -> f32 {
    debug_assert!((0.0..=1.0).contains(&progress), "easing input {progress} not clamped");
    debug_assert!(strength > 0.0, "easing strength must be positive");
    progress.powf(strength)
}

/// Clamp the magnitude of `v` to `max_magnitude`.  No-op when already short enough.
#[inline]
pub fn limit_vector(v: Vec3, max_magnitude: f32) -> Vec3 {
    if v.length_squared() > max_magnitude * max_magnitude {
        safe_normal(v) * max_magnitude
    } else {
        v
    }
}

/// Unit vector in the direction of `v`, or zero for a (nearly) zero vector.
#[inline]
pub fn safe_normal(v: Vec3) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq <= NEARLY_ZERO_SQ {
        Vec3::ZERO
    } else {
        v / len_sq.sqrt()
    }
}

/// `true` if `v` is shorter than the zero threshold.
#[inline]
pub fn is_nearly_zero(v: Vec3) -> bool {
    v.length_squared() <= NEARLY_ZERO_SQ
}
