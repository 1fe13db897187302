use crate::foundation::core::Vec2;
use crate::foundation::math::{rotate, triangle_wave};

/// Shape inputs of the lightning beam field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamField {
    /// Horizontal phase advance per unit time (whole periods keep the loop seamless).
    pub speed: f64,
    /// Zig-zag frequency along the beam.
    pub freq: f64,
    /// Zig-zag amplitude.
    pub amps: f64,
    /// Vertical offset of the beam axis.
    pub offset: f64,
    /// Beam rotation in radians.
    pub angle: f64,
    /// Envelope height; also lifts the line slope.
    pub height: f64,
    /// Amplitude of the horizontal frequency warp.
    pub noise_scale_x: f64,
    /// Amplitude of the reciprocal vertical warp.
    pub noise_scale_y: f64,
    /// Frequency of the horizontal warp.
    pub noise_freq_x: f64,
    /// Frequency of the vertical warp.
    pub noise_freq_y: f64,
    /// Subtracted from the enveloped slope.
    pub bias: f64,
    /// Flip the polarity of the slope.
    pub inverted: bool,
}

/// Elliptical falloff: positive inside the circle of squared radius `h`.
#[inline]
pub fn circle_envelope(p: Vec2, h: f64) -> f64 {
    h - (p.x * p.x + p.y * p.y)
}

/// Closeness to the union of the lines `x + y = 0`, lifted by `h - 1`.
#[inline]
pub fn line_slope(x: f64, y: f64, h: f64) -> f64 {
    (h - 1.0) + (2.0 / (1.0 + (x + y).abs()) - 1.0)
}

/// Periodic zig-zag beam. Unclamped; positive values are lit.
pub fn lightning_beam(p: Vec2, s: &BeamField, t: f64) -> f64 {
    let mut q = rotate(p, s.angle);
    q.y += s.offset;

    let warp_x = 1.0 + s.noise_scale_x * (s.noise_freq_x * q.x).sin();
    let warp_y = 1.0 / (1.0 - s.noise_scale_y * (s.noise_freq_y * q.y).cos());

    let pos_x = triangle_wave(s.freq * q.x * warp_x + s.speed * t);
    let pos_y = (2.0 / s.amps) * q.y * warp_y;

    let env = circle_envelope(p, s.height).max(0.0);
    let polarity = if s.inverted { -1.0 } else { 1.0 };
    polarity * line_slope(pos_x, pos_y, s.height) * env - s.bias
}

#[cfg(test)]
#[path = "../../tests/unit/field/lightning.rs"]
mod tests;
