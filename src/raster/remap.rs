use crate::foundation::core::{CHANNELS, Rgba8};
use crate::frame::buffer::FrameBuffer;
use crate::raster::sampler::sample_rgba8;
use std::f64::consts::TAU;

/// Reinterpret a buffer's columns as angle and rows as radius, producing a ring.
///
/// For each destination pixel, relative to the buffer centre `((W-1)/2, (H-1)/2)`:
/// `r = |d|`, `theta = atan2(dy, dx)` in `[0, 2pi)`. Pixels with `r <= (H-1)/2` sample the
/// original image at `(theta / 2pi * (W-1), r / max_radius * (H-1))`; the rest become transparent
/// black. The result is built in a separate buffer and swapped in, so every read sees the
/// unmodified source.
///
/// The centre is the geometric pixel centre rather than `(W/2, H/2)`, so the ring is symmetric
/// and `max_radius` reaches the border exactly. Output sits half a pixel up and left of a
/// `W/2`-centred remap.
pub fn remap_to_ring(buffer: &mut FrameBuffer) {
    let width = buffer.width();
    let height = buffer.height();
    let src = buffer.as_bytes();

    let mut out = vec![0u8; src.len()];
    let max_radius = 0.5 * (f64::from(height) - 1.0);
    let cx = 0.5 * (f64::from(width) - 1.0);
    let cy = max_radius;
    let span_x = f64::from(width) - 1.0;
    let span_y = f64::from(height) - 1.0;

    for (i, px) in out.chunks_exact_mut(CHANNELS).enumerate() {
        let x = (i % width as usize) as f64;
        let y = (i / width as usize) as f64;
        let dx = x - cx;
        let dy = y - cy;
        let r = dx.hypot(dy);

        let color = if r <= max_radius {
            let mut theta = dy.atan2(dx);
            if theta < 0.0 {
                theta += TAU;
            }
            let in_x = theta / TAU * span_x;
            let in_y = r / max_radius * span_y;
            sample_rgba8(src, width, height, in_x, in_y)
        } else {
            Rgba8::TRANSPARENT
        };
        px.copy_from_slice(&color.to_array());
    }

    buffer.replace_bytes(out);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/remap.rs"]
mod tests;
