use crate::foundation::core::FrameIndex;
use crate::frame::buffer::FrameBuffer;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f3a_91c2_d04e_b617;

/// Ordered frames of one animation, indexed from 0.
///
/// All frames share the same dimensions. The sequence is replaced wholesale on regeneration;
/// old buffers are released before new ones are allocated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<FrameBuffer>,
}

impl FrameSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release current frames, then allocate `count` zeroed `size x size` frames.
    pub fn allocate(&mut self, count: u32, size: u32) {
        self.release();
        self.frames = (0..count).map(|_| FrameBuffer::square(size)).collect();
    }

    /// Drop every frame.
    pub fn release(&mut self) {
        self.frames = Vec::new();
    }

    /// Resize every frame to `size x size`. Pixel contents are discarded, not resampled.
    pub fn resize(&mut self, size: u32) {
        for frame in &mut self.frames {
            frame.resize(size, size);
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the sequence holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame dimensions, or `None` when empty.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| (f.width(), f.height()))
    }

    /// Borrow one frame.
    pub fn frame(&self, idx: FrameIndex) -> Option<&FrameBuffer> {
        self.frames.get(idx.0 as usize)
    }

    /// Borrow all frames in order.
    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [FrameBuffer] {
        &mut self.frames
    }

    /// Stable digest of dimensions and pixel bytes of every frame.
    ///
    /// Equal fingerprints across two batches with the same inputs are the cheap way to observe
    /// that generation is deterministic.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Xxh3::with_seed(XXH3_SEED);
        h.update(&(self.frames.len() as u64).to_le_bytes());
        for frame in &self.frames {
            h.update(&frame.width().to_le_bytes());
            h.update(&frame.height().to_le_bytes());
            h.update(frame.as_bytes());
        }
        h.digest()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/sequence.rs"]
mod tests;
