/// Single-frame RGBA8 pixel buffer.
pub mod buffer;
/// Ordered collection of frames.
pub mod sequence;
