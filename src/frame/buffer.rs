use crate::foundation::core::{CHANNELS, Rgba8};

/// An RGBA8 pixel buffer owned by one animation frame.
///
/// Invariant: `data.len() == width * height * 4`. Resizing reallocates and zeroes the contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a zero-initialized (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Allocate a zero-initialized square buffer.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Wrap existing RGBA8 bytes. Returns `None` when the length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == byte_len(width, height)).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel, always 4.
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// RGBA8 bytes, tightly packed, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA8 bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Change dimensions. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; byte_len(width, height)];
    }

    /// Swap in a fully built replacement of identical dimensions.
    pub(crate) fn replace_bytes(&mut self, data: Vec<u8>) {
        debug_assert_eq!(data.len(), self.data.len());
        self.data = data;
    }

    /// Read one pixel. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.offset(x, y);
        Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Write one pixel. Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px.to_array());
    }

    /// Fill every pixel with `px`.
    pub fn fill(&mut self, px: Rgba8) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&px.to_array());
        }
    }

    /// Whether any pixel has non-zero alpha.
    pub fn has_visible_pixels(&self) -> bool {
        self.data.chunks_exact(CHANNELS).any(|px| px[3] != 0)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x},{y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(CHANNELS)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/buffer.rs"]
mod tests;
