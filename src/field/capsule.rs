use crate::field::FieldNoise;
use crate::field::paint::{AlphaMode, paint_field};
use crate::foundation::core::Vec2;
use crate::foundation::math::mirror_x;
use crate::frame::buffer::FrameBuffer;

/// Signed distance from `p` to a capsule from `pa` (radius `ra`) to `pb` (radius `rb`).
///
/// The point is projected onto the capsule axis in a basis normalized by `|pb - pa|^2` and
/// mirrored across the axis. The region test on `k` picks cap A (`k < 0`), cap B (`k > c.x`)
/// or the tangent shaft; the shaft owns both boundaries. Coincident endpoints divide by zero
/// and yield NaN.
pub fn uneven_capsule(p: Vec2, pa: Vec2, pb: Vec2, ra: f64, rb: f64) -> f64 {
    let p = p - pa;
    let pb = pb - pa;
    let h = pb.dot(pb);
    let q = Vec2::new(p.dot(Vec2::new(pb.y, -pb.x)), p.dot(pb)) / h;
    let q = mirror_x(q);

    let b = ra - rb;
    let c = Vec2::new((h - b * b).sqrt(), b);

    let k = c.x * q.y - c.y * q.x;
    let m = c.dot(q);
    let n = q.dot(q);

    if k < 0.0 {
        (h * n).sqrt() - ra
    } else if k > c.x {
        (h * (n + 1.0 - 2.0 * q.y)).sqrt() - rb
    } else {
        m - ra
    }
}

/// Parameters for [`paint_uneven_capsule`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapsuleParams {
    /// First end centre.
    pub pa: Vec2,
    /// Second end centre.
    pub pb: Vec2,
    /// Radius at `pa`.
    pub ra: f64,
    /// Radius at `pb`.
    pub rb: f64,
    /// Coordinate noise amplitude.
    pub noise_scale: f64,
    /// Horizontal noise frequency.
    pub noise_freq_x: f64,
    /// Vertical noise frequency.
    pub noise_freq_y: f64,
}

impl Default for CapsuleParams {
    fn default() -> Self {
        Self {
            pa: Vec2::new(-0.5, 0.0),
            pb: Vec2::new(0.5, 0.0),
            ra: 0.02,
            rb: 0.4,
            noise_scale: 0.015,
            noise_freq_x: 3.0,
            noise_freq_y: 2.0,
        }
    }
}

/// Paint the interior depth of an uneven capsule, grey on opaque black.
pub fn paint_uneven_capsule(buffer: &mut FrameBuffer, t: f64, s: &CapsuleParams) {
    let noise = FieldNoise::uniform(s.noise_scale, s.noise_freq_x, s.noise_freq_y);
    paint_field(buffer, AlphaMode::Opaque, |p| {
        let p = noise.apply(p, t);
        (-uneven_capsule(p, s.pa, s.pb, s.ra, s.rb)).max(0.0)
    });
}

#[cfg(test)]
#[path = "../../tests/unit/field/capsule.rs"]
mod tests;
