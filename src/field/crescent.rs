use crate::field::FieldNoise;
use crate::field::paint::{AlphaMode, paint_field};
use crate::foundation::core::Vec2;
use crate::frame::buffer::FrameBuffer;

/// Crescent field: product of two horizontally offset disk fields, normalized and biased.
///
/// Each factor is clamped to `>= 0` before the product is divided by `(1 - fullness^2)^2`.
/// The second factor adds `y^2`, which opens it into a saddle and carves the crescent's bite.
pub fn crescent(p: Vec2, fullness: f64, bias: f64) -> f64 {
    let (x, y) = (p.x, p.y);
    let z1 = (1.0 - (x + fullness) * (x + fullness) - y * y).max(0.0);
    let z2 = (1.0 - (x - fullness) * (x - fullness) + y * y).max(0.0);
    let k = 1.0 - fullness * fullness;
    (z1 * z2) / (k * k) - bias
}

/// Parameters for [`paint_crescent`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrescentParams {
    /// Offset of each disk from the centre; `1.0` collapses the normalization.
    pub fullness: f64,
    /// Subtracted after normalization.
    pub bias: f64,
    /// Coordinate noise amplitude.
    pub noise_scale: f64,
    /// Horizontal noise frequency.
    pub noise_freq_x: f64,
    /// Vertical noise frequency.
    pub noise_freq_y: f64,
}

impl Default for CrescentParams {
    fn default() -> Self {
        Self {
            fullness: 0.75,
            bias: 0.05,
            noise_scale: 0.015,
            noise_freq_x: 3.0,
            noise_freq_y: 2.0,
        }
    }
}

/// Paint a crescent, grey on opaque black.
pub fn paint_crescent(buffer: &mut FrameBuffer, t: f64, s: &CrescentParams) {
    let noise = FieldNoise::uniform(s.noise_scale, s.noise_freq_x, s.noise_freq_y);
    paint_field(buffer, AlphaMode::Opaque, |p| {
        crescent(noise.apply(p, t), s.fullness, s.bias)
    });
}
