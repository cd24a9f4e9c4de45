//! Progress clamping, easing and interpolation helpers for the entrance animation
//!
//! All helpers are generic over [`Float`] so the renderer can work in `f32`
//! while timing stays in `f64`.

use num_traits::Float;

/// Clamp `t` into `[0, 1]`, mapping NaN to zero
pub fn clamp_unit<T: Float>(t: T) -> T {
    if t.is_nan() {
        return T::zero();
    }
    t.max(T::zero()).min(T::one())
}

/// Cubic ease-out: `1 - (1 - t)^3`
///
/// Input and output are both clamped to `[0, 1]`, so `ease_out_cubic(1)` is
/// exactly one.
pub fn ease_out_cubic<T: Float>(t: T) -> T {
    let inverse = T::one() - clamp_unit(t);
    clamp_unit(T::one() - inverse * inverse * inverse)
}

/// Linear interpolation between `from` and `to`
pub fn lerp<T: Float>(from: T, to: T, t: T) -> T {
    (to - from).mul_add(t, from)
}

/// Ratio `numerator / denominator` clamped to `[0, 1]`
///
/// A non-positive denominator means the interval has no length: the ratio is
/// one as soon as the numerator is non-negative.
pub fn unit_ratio<T: Float>(numerator: T, denominator: T) -> T {
    if denominator <= T::zero() {
        return if numerator >= T::zero() {
            T::one()
        } else {
            T::zero()
        };
    }
    clamp_unit(numerator / denominator)
}

#[cfg(test)]
#[path = "../../tests/unit/math/easing.rs"]
mod tests;
