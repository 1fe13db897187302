use crate::foundation::core::{CHANNELS, Rgba8};
use crate::frame::buffer::FrameBuffer;

/// Bilinearly sample an RGBA8 image at fractional pixel coordinates.
///
/// Reads with `x < 0`, `y < 0`, `x >= width - 1` or `y >= height - 1` (and non-finite
/// coordinates) return opaque black without touching `data`. Interpolated channels are
/// truncated, never rounded, so results are bit-reproducible.
pub fn sample_rgba8(data: &[u8], width: u32, height: u32, x: f64, y: f64) -> Rgba8 {
    let max_x = f64::from(width) - 1.0;
    let max_y = f64::from(height) - 1.0;
    if !(x >= 0.0 && y >= 0.0 && x < max_x && y < max_y) {
        return Rgba8::OPAQUE_BLACK;
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let stride = width as usize;
    let at = |xi: usize, yi: usize| (yi * stride + xi) * CHANNELS;
    let p00 = at(x0, y0);
    let p10 = at(x0 + 1, y0);
    let p01 = at(x0, y0 + 1);
    let p11 = at(x0 + 1, y0 + 1);

    let channel = |c: usize| -> u8 {
        let top = lerp(f64::from(data[p00 + c]), f64::from(data[p10 + c]), fx);
        let bottom = lerp(f64::from(data[p01 + c]), f64::from(data[p11 + c]), fx);
        lerp(top, bottom, fy) as u8
    };

    Rgba8::new(channel(0), channel(1), channel(2), channel(3))
}

/// [`sample_rgba8`] over a [`FrameBuffer`].
pub fn sample(buffer: &FrameBuffer, x: f64, y: f64) -> Rgba8 {
    sample_rgba8(buffer.as_bytes(), buffer.width(), buffer.height(), x, y)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/sampler.rs"]
mod tests;
