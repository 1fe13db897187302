use crate::field::lightning::{BeamField, lightning_beam};
use crate::field::paint::{AlphaMode, paint_field};
use crate::foundation::error::SpriteResult;
use crate::foundation::math::brighten;
use crate::frame::buffer::FrameBuffer;
use crate::generator::{FrameGenerator, merge_params, params_to_json};
use crate::raster::remap::remap_to_ring;

/// Editable parameters of [`LightningBeamGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightningBeamParams {
    /// Whole periods the zig-zag travels per loop.
    pub speed: i32,
    /// Zig-zag frequency.
    pub freq: f64,
    /// Zig-zag amplitude.
    pub amps: f64,
    /// Vertical offset of the beam axis.
    pub offset: f64,
    /// Rotation in radians.
    pub angle: f64,
    /// Envelope height.
    pub height: f64,
    /// Horizontal warp amplitude.
    pub noise_scale_x: f64,
    /// Vertical warp amplitude.
    pub noise_scale_y: f64,
    /// Horizontal warp frequency.
    pub noise_freq_x: f64,
    /// Vertical warp frequency.
    pub noise_freq_y: f64,
    /// Gain applied to positive field values before clamping.
    pub brightness: f64,
    /// Subtracted from the field.
    pub bias: f64,
    /// Flip the beam's polarity.
    pub inverted: bool,
    /// Post-process the frame through the rectangle-to-ring remap.
    pub circular: bool,
}

impl Default for LightningBeamParams {
    fn default() -> Self {
        Self {
            speed: 1,
            freq: 1.75,
            amps: 0.125,
            offset: 0.0,
            angle: 0.0,
            height: 0.782,
            noise_scale_x: 0.175,
            noise_scale_y: 0.325,
            noise_freq_x: 24.0,
            noise_freq_y: 48.0,
            brightness: 2.0,
            bias: 0.01,
            inverted: false,
            circular: false,
        }
    }
}

impl LightningBeamParams {
    /// Field inputs derived from these parameters.
    pub fn field(&self) -> BeamField {
        BeamField {
            speed: f64::from(self.speed),
            freq: self.freq,
            amps: self.amps,
            offset: self.offset,
            angle: self.angle,
            height: self.height,
            noise_scale_x: self.noise_scale_x,
            noise_scale_y: self.noise_scale_y,
            noise_freq_x: self.noise_freq_x,
            noise_freq_y: self.noise_freq_y,
            bias: self.bias,
            inverted: self.inverted,
        }
    }
}

/// Looping zig-zag beam inside an elliptical envelope.
#[derive(Clone, Debug, Default)]
pub struct LightningBeamGenerator {
    /// Current parameters.
    pub params: LightningBeamParams,
}

impl LightningBeamGenerator {
    /// Registry name.
    pub const NAME: &'static str = "Lightning Beam";

    /// Generator with explicit parameters.
    pub fn with_params(params: LightningBeamParams) -> Self {
        Self { params }
    }
}

impl FrameGenerator for LightningBeamGenerator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_looping(&self) -> bool {
        true
    }

    fn generate(&self, frame: &mut FrameBuffer, t: f64) -> SpriteResult<()> {
        let field = self.params.field();
        let gain = self.params.brightness;
        paint_field(frame, AlphaMode::Luminance, |p| {
            brighten(lightning_beam(p, &field, t), gain)
        });

        if self.params.circular {
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
#[path = "../../tests/unit/generator/lightning_beam.rs"]
mod tests;
