use crate::field::paint::{AlphaMode, paint_field};
use crate::foundation::core::Vec2;
use crate::frame::buffer::FrameBuffer;
use std::f64::consts::FRAC_PI_2;

/// Petal field: polar angle bucketed into `petals` lobes by a triangle wave `T`, blended with
/// the squared radius. `fullness` in `(-1, 0)` trades thin petals for round ones.
pub fn leaf(p: Vec2, petals: f64, fullness: f64) -> f64 {
    let (x, y) = (p.y, p.x);
    let a = x.atan2(y) / FRAC_PI_2;
    let v = a * petals / 4.0;
    let tri = 1.0 - 4.0 * (v - 0.5 - (v - 0.5).floor() - 0.5).abs();
    let value = -(x * x + y * y) - (fullness - (fullness + 1.0) * tri);
    value.max(0.0)
}

/// Parameters for [`paint_leaf`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeafParams {
    /// Number of petals.
    pub petals: u32,
    /// Roundness of each petal.
    pub fullness: f64,
}

impl Default for LeafParams {
    fn default() -> Self {
        Self {
            petals: 3,
            fullness: -0.65,
        }
    }
}

/// Paint a leaf; covered pixels are fully opaque, the rest transparent.
pub fn paint_leaf(buffer: &mut FrameBuffer, s: &LeafParams) {
    let petals = f64::from(s.petals);
    paint_field(buffer, AlphaMode::Coverage, |p| leaf(p, petals, s.fullness));
}
