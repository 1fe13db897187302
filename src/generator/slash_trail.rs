use crate::animation::ease::Ease;
use crate::field::FieldNoise;
use crate::field::capsule::uneven_capsule;
use crate::field::paint::{AlphaMode, paint_field};
use crate::foundation::core::Vec2;
use crate::foundation::error::SpriteResult;
use crate::foundation::math::{brighten, lerp, lerp_vec};
use crate::frame::buffer::FrameBuffer;
use crate::generator::{FrameGenerator, merge_params, params_to_json};
use crate::raster::remap::remap_to_ring;

/// Editable parameters of [`SlashTrailGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlashTrailParams {
    /// Fixed start of the swipe.
    pub pa: Vec2,
    /// End point the swipe reaches at `t = 1`.
    pub pb: Vec2,
    /// Radius at the start point.
    pub ra: f64,
    /// Radius the moving end reaches at `t = 1`.
    pub rb: f64,
    /// Not subtracted by the capsule field; kept for parity with the other generators.
    pub bias: f64,
    /// Coordinate noise amplitude.
    pub noise_scale: f64,
    /// Horizontal noise frequency.
    pub noise_freq_x: i32,
    /// Vertical noise frequency.
    pub noise_freq_y: i32,
    /// Gain applied to positive field values before clamping.
    pub brightness: f64,
    /// Post-process the frame through the rectangle-to-ring remap.
    pub circular: bool,
}

impl Default for SlashTrailParams {
    fn default() -> Self {
        Self {
            pa: Vec2::new(-0.5, 0.0),
            pb: Vec2::new(0.5, 0.0),
            ra: 0.0,
            rb: 0.4,
            bias: 0.05,
            noise_scale: 0.0,
            noise_freq_x: 2,
            noise_freq_y: 3,
            brightness: 8.0,
            circular: false,
        }
    }
}

/// Non-looping swipe: an uneven capsule whose far end and far radius ease out from the start
/// point toward `pb`/`rb`.
#[derive(Clone, Debug, Default)]
pub struct SlashTrailGenerator {
    /// Current parameters.
    pub params: SlashTrailParams,
}

impl SlashTrailGenerator {
    /// Registry name.
    pub const NAME: &'static str = "Slash Trail";

    /// Generator with explicit parameters.
    pub fn with_params(params: SlashTrailParams) -> Self {
        Self { params }
    }
}

impl FrameGenerator for SlashTrailGenerator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_looping(&self) -> bool {
        false
    }

    fn generate(&self, frame: &mut FrameBuffer, t: f64) -> SpriteResult<()> {
        let s = &self.params;
        let eased = Ease::OutQuart.apply(t);
        let end = lerp_vec(s.pa, s.pb, eased);
        let end_radius = lerp(s.ra, s.rb, eased);
        let noise = FieldNoise::uniform(
            s.noise_scale,
            f64::from(s.noise_freq_x),
            f64::from(s.noise_freq_y),
        );

        paint_field(frame, AlphaMode::Luminance, |p| {
            let p = noise.apply(p, t);
            let depth = (-uneven_capsule(p, s.pa, end, s.ra, end_radius)).max(0.0);
            brighten(depth, s.brightness)
        });

        if s.circular {
            remap_to_ring(frame);
        }
        Ok(())
    }

    fn params(&self) -> SpriteResult<serde_json::Value> {
        params_to_json(&self.params)
    }

    fn edit_params(&mut self, patch: &serde_json::Value) -> SpriteResult<bool> {
        merge_params(&mut self.params, patch)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generator/slash_trail.rs"]
mod tests;
