//! Scalar and 2D vector kernel shared by the field functions.

use crate::foundation::core::Vec2;

/// Rotate `p` by the unit vector `c`, i.e. complex multiplication `p * c`.
#[inline]
pub fn rotate_by(p: Vec2, c: Vec2) -> Vec2 {
    Vec2::new(c.x * p.x - c.y * p.y, c.y * p.x + c.x * p.y)
}

/// Rotate `p` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(p: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    rotate_by(p, Vec2::new(cos, sin))
}

/// Mirror `p` into the `x >= 0` half-plane.
#[inline]
pub fn mirror_x(p: Vec2) -> Vec2 {
    Vec2::new(p.x.abs(), p.y)
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Linear interpolation between two points.
#[inline]
pub fn lerp_vec(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    a * (1.0 - t) + b * t
}

/// Periodic triangle wave with period 1 and range `[-1, 1]`; `-1` at half-integers.
#[inline]
pub fn triangle_wave(x: f64) -> f64 {
    let f = x - x.floor();
    (4.0 * f - 2.0).abs() - 1.0
}

/// Sign as `-1`, `0` or `1`.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp to `[0, 1]` with NaN mapped to `0`.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Scale positive values by `gain` and clamp to `[0, 1]`; non-positive values pass through.
#[inline]
pub fn brighten(v: f64, gain: f64) -> f64 {
    if v > 0.0 { (gain * v).clamp(0.0, 1.0) } else { v }
}

/// Quantize a field value to an 8-bit sample, truncating toward zero.
#[inline]
pub fn shade_unit(v: f64) -> u8 {
    (255.0 * clamp_unit(v)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
