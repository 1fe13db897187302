use crate::foundation::error::{SpriteError, SpriteResult};

pub use kurbo::Vec2;

/// Number of 8-bit samples per pixel. Frames are always RGBA.
pub const CHANNELS: usize = 4;

/// 0-based index of a frame inside a [`crate::FrameSequence`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

/// Straight-alpha RGBA8 pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black. Returned by the sampler for reads outside the interpolation domain.
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 255);

    /// Build a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Grey value written into R, G and B with an explicit alpha.
    pub const fn grey(v: u8, a: u8) -> Self {
        Self::new(v, v, v, a)
    }

    /// Channels as a packed array in RGBA order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Request for a batch: how many frames and at what (square) resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateRequest {
    /// Number of frames in the sequence, `>= 1`.
    pub frame_count: u32,
    /// Edge length of each square frame in pixels, `>= 1`.
    pub size: u32,
}

impl GenerateRequest {
    /// Create a validated request.
    pub fn new(frame_count: u32, size: u32) -> SpriteResult<Self> {
        let req = Self { frame_count, size };
        req.validate()?;
        Ok(req)
    }

    /// Reject empty sequences and zero-sized frames.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.frame_count == 0 {
            return Err(SpriteError::validation("frame_count must be >= 1"));
        }
        if self.size == 0 {
            return Err(SpriteError::validation("size must be >= 1"));
        }
        Ok(())
    }
}

/// Map a pixel index along one axis into normalized `[-1, 1]` space.
///
/// `p = 2 * index / (dim - 1) - 1`. A single-pixel axis maps to the centre (`0.0`).
#[inline]
pub fn pixel_to_normalized(index: u32, dim: u32) -> f64 {
    if dim <= 1 {
        return 0.0;
    }
    2.0 * (f64::from(index) / f64::from(dim - 1)) - 1.0
}

/// Normalized coordinate of pixel `(x, y)` in a `width x height` buffer.
#[inline]
pub fn normalized_point(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(pixel_to_normalized(x, width), pixel_to_normalized(y, height))
}

/// Time handed to a generator for frame `index` of a `frame_count`-frame batch.
///
/// Looping generators see `index / frame_count` and never reach `1.0`. Non-looping generators
/// see `index / (frame_count - 1)` so the last frame lands exactly on `1.0`; a single-frame
/// non-looping batch is pinned to `1.0`.
pub fn frame_time(index: u32, frame_count: u32, looping: bool) -> f64 {
    if looping {
        return f64::from(index) / f64::from(frame_count.max(1));
    }
    if frame_count <= 1 {
        return 1.0;
    }
    f64::from(index) / f64::from(frame_count - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
