//! Parametric scalar fields over normalized `[-1, 1]^2` coordinates.
//!
//! Every field is a pure function of a point (and, for animated shapes, time). Positive values
//! mean "inside"; painters quantize them to 8-bit grey.

use crate::foundation::core::Vec2;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::frame::buffer::FrameBuffer;
use std::f64::consts::PI;

/// Uneven capsule signed distance.
pub mod capsule;
/// Crescent field.
pub mod crescent;
/// Petal field.
pub mod leaf;
/// Lightning beam field.
pub mod lightning;
/// Whole-buffer field painting.
pub mod paint;
/// Open ring signed distances.
pub mod ring;

/// Time-coupled sinusoidal perturbation of the sampling coordinate.
///
/// `x += scale_x * sin(pi * freq_x * (x + 2t))`, same form for `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldNoise {
    /// Horizontal displacement amplitude.
    pub scale_x: f64,
    /// Vertical displacement amplitude.
    pub scale_y: f64,
    /// Horizontal frequency.
    pub freq_x: f64,
    /// Vertical frequency.
    pub freq_y: f64,
}

impl FieldNoise {
    /// Same amplitude on both axes.
    pub fn uniform(scale: f64, freq_x: f64, freq_y: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            freq_x,
            freq_y,
        }
    }

    /// Perturb `p` for time `t`.
    #[inline]
    pub fn apply(&self, p: Vec2, t: f64) -> Vec2 {
        Vec2::new(
            p.x + self.scale_x * (PI * self.freq_x * (p.x + 2.0 * t)).sin(),
            p.y + self.scale_y * (PI * self.freq_y * (p.y + 2.0 * t)).sin(),
        )
    }
}

/// Standalone shapes that can be painted without a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Three-petal leaf.
    Leaf,
    /// Crescent moon.
    Crescent,
    /// Capsule with different end radii.
    UnevenCapsule,
    /// Ring with an opening, sharp ends.
    OpenRingSharp,
    /// Ring with an opening, rounded ends.
    OpenRingRounded,
}

impl ShapeKind {
    /// Every shape, in display order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Leaf,
        ShapeKind::Crescent,
        ShapeKind::UnevenCapsule,
        ShapeKind::OpenRingSharp,
        ShapeKind::OpenRingRounded,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Crescent => "crescent",
            Self::UnevenCapsule => "uneven-capsule",
            Self::OpenRingSharp => "open-ring-sharp",
            Self::OpenRingRounded => "open-ring-rounded",
        }
    }

    /// Parse a kebab-case name.
    pub fn from_name(name: &str) -> SpriteResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| SpriteError::validation(format!("unknown shape '{name}'")))
    }

    /// Paint this shape with its default parameters at time `t`.
    pub fn paint_default(self, buffer: &mut FrameBuffer, t: f64) {
        match self {
            Self::Leaf => leaf::paint_leaf(buffer, &leaf::LeafParams::default()),
            Self::Crescent => {
                crescent::paint_crescent(buffer, t, &crescent::CrescentParams::default())
            }
            Self::UnevenCapsule => {
                capsule::paint_uneven_capsule(buffer, t, &capsule::CapsuleParams::default())
            }
            Self::OpenRingSharp => {
                ring::paint_open_ring_sharp(buffer, t, &ring::OpenRingSharpParams::default())
            }
            Self::OpenRingRounded => {
                ring::paint_open_ring_rounded(buffer, t, &ring::OpenRingRoundedParams::default())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/noise.rs"]
mod tests;
