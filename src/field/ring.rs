use crate::field::FieldNoise;
use crate::field::paint::{AlphaMode, paint_field};
use crate::foundation::core::Vec2;
use crate::foundation::math::{mirror_x, rotate_by, sign};
use crate::frame::buffer::FrameBuffer;
use std::f64::consts::PI;

/// Spin the frame by the aperture, then fold across the vertical axis.
#[inline]
fn fold_opening(p: Vec2, opening: f64) -> Vec2 {
    let (sin, cos) = opening.sin_cos();
    mirror_x(rotate_by(p, Vec2::new(-sin, -cos)))
}

/// Signed distance to an arc of an annulus (radius `r`, `thickness`) with half-aperture
/// `opening` radians. The ends of the arc are cut flat by the wedge term.
pub fn open_ring_sharp(p: Vec2, opening: f64, r: f64, thickness: f64) -> f64 {
    let p = fold_opening(p, opening);
    let (sin, cos) = opening.sin_cos();
    let p = rotate_by(p, Vec2::new(cos, sin));

    let half = thickness * 0.5;
    let annulus = (p.length() - r).abs() - half;
    let wedge = Vec2::new(p.x, ((r - p.y).abs() - half).max(0.0)).length() * sign(p.x);
    annulus.max(wedge)
}

/// Signed distance to an arc of radius `ra` and half-thickness `rb` with half-aperture
/// `opening` radians. Points past the aperture bisector measure to the round end cap.
pub fn open_ring_rounded(p: Vec2, opening: f64, ra: f64, rb: f64) -> f64 {
    let p = fold_opening(p, opening);
    let (sin, cos) = opening.sin_cos();
    let n = Vec2::new(sin, cos);

    let d = if n.y * p.x > n.x * p.y {
        (p - n * ra).length()
    } else {
        (p.length() - ra).abs()
    };
    d - rb
}

/// Aperture at time `t`: grows from 0 to `2 pi * opening` over the animation.
#[inline]
fn opening_at(opening: f64, t: f64) -> f64 {
    2.0 * t * PI * opening
}

/// Parameters for [`paint_open_ring_sharp`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenRingSharpParams {
    /// Aperture reached at `t = 1`, in turns.
    pub opening: f64,
    /// Ring centre-line radius.
    pub radius: f64,
    /// Ring thickness.
    pub thickness: f64,
    /// Coordinate noise amplitude.
    pub noise_scale: f64,
    /// Horizontal noise frequency.
    pub noise_freq_x: f64,
    /// Vertical noise frequency.
    pub noise_freq_y: f64,
}

impl Default for OpenRingSharpParams {
    fn default() -> Self {
        Self {
            opening: 0.5,
            radius: 0.5,
            thickness: 0.3,
            noise_scale: 0.001,
            noise_freq_x: 4.0,
            noise_freq_y: 3.0,
        }
    }
}

/// Paint an opening sharp-ended ring, grey on opaque black.
pub fn paint_open_ring_sharp(buffer: &mut FrameBuffer, t: f64, s: &OpenRingSharpParams) {
    let noise = FieldNoise::uniform(s.noise_scale, s.noise_freq_x, s.noise_freq_y);
    let opening = opening_at(s.opening, t);
    paint_field(buffer, AlphaMode::Opaque, |p| {
        -open_ring_sharp(noise.apply(p, t), opening, s.radius, s.thickness)
    });
}

/// Parameters for [`paint_open_ring_rounded`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenRingRoundedParams {
    /// Aperture reached at `t = 1`, in turns.
    pub opening: f64,
    /// Ring centre-line radius.
    pub ra: f64,
    /// Ring half-thickness (cap radius).
    pub rb: f64,
    /// Coordinate noise amplitude.
    pub noise_scale: f64,
    /// Horizontal noise frequency.
    pub noise_freq_x: f64,
    /// Vertical noise frequency.
    pub noise_freq_y: f64,
}

impl Default for OpenRingRoundedParams {
    fn default() -> Self {
        Self {
            opening: 0.5,
            ra: 0.7,
            rb: 0.2,
            noise_scale: 0.001,
            noise_freq_x: 4.0,
            noise_freq_y: 3.0,
        }
    }
}

/// Paint an opening round-ended ring, grey on opaque black.
pub fn paint_open_ring_rounded(buffer: &mut FrameBuffer, t: f64, s: &OpenRingRoundedParams) {
    let noise = FieldNoise::uniform(s.noise_scale, s.noise_freq_x, s.noise_freq_y);
    let opening = opening_at(s.opening, t);
    paint_field(buffer, AlphaMode::Opaque, |p| {
        -open_ring_rounded(noise.apply(p, t), opening, s.ra, s.rb)
    });
}

#[cfg(test)]
#[path = "../../tests/unit/field/ring.rs"]
mod tests;
