use crate::foundation::core::{CHANNELS, Rgba8, Vec2, pixel_to_normalized};
use crate::foundation::math::shade_unit;
use crate::frame::buffer::FrameBuffer;

/// How the quantized field value is written into the alpha channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaMode {
    /// Alpha is always 255; the shape is grey on opaque black.
    Opaque,
    /// Alpha equals the grey value (non-premultiplied grey with matching alpha).
    Luminance,
    /// Alpha is 255 wherever the grey value is non-zero, 0 elsewhere.
    Coverage,
}

impl AlphaMode {
    #[inline]
    fn pixel(self, grey: u8) -> Rgba8 {
        let a = match self {
            Self::Opaque => 255,
            Self::Luminance => grey,
            Self::Coverage => {
                if grey > 0 {
                    255
                } else {
                    0
                }
            }
        };
        Rgba8::grey(grey, a)
    }
}

/// Evaluate `field` at every pixel's normalized coordinate and write the shaded result.
///
/// Field values are clamped to `[0, 1]` (NaN counts as 0) and truncated to 8 bits.
pub fn paint_field(buffer: &mut FrameBuffer, alpha: AlphaMode, mut field: impl FnMut(Vec2) -> f64) {
    let width = buffer.width();
    let height = buffer.height();
    if width == 0 || height == 0 {
        return;
    }

    let xs: Vec<f64> = (0..width).map(|x| pixel_to_normalized(x, width)).collect();
    let row_bytes = width as usize * CHANNELS;
    for (y, row) in buffer.as_bytes_mut().chunks_exact_mut(row_bytes).enumerate() {
        let ny = pixel_to_normalized(y as u32, height);
        for (px, &nx) in row.chunks_exact_mut(CHANNELS).zip(&xs) {
            let grey = shade_unit(field(Vec2::new(nx, ny)));
            px.copy_from_slice(&alpha.pixel(grey).to_array());
        }
    }
}
