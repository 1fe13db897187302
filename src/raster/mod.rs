/// Rectangle-to-ring domain remapping.
pub mod remap;
/// Bilinear RGBA8 sampling.
pub mod sampler;
