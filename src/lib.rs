//! spritegen procedurally generates sprite animation frames from parametric shape fields.
//!
//! Every pixel is evaluated on the CPU from a scalar field over normalized `[-1, 1]^2`
//! coordinates. The public API is session-oriented:
//!
//! - Pick a generator from the [`GeneratorRegistry`]
//! - Fill a [`FrameSequence`] with [`BatchScheduler::generate_all`] (or a [`SpriteSession`])
//! - Receive the finished frames through a [`FrameSink`]
//!
//! Generation is deterministic: identical inputs give byte-identical frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Time easing curves.
pub mod animation;
/// JSON batch configuration.
pub mod config;
/// Commit sinks for finished frames.
pub mod encode;
/// Shape and distance fields.
pub mod field;
/// Core value types, errors and math helpers.
pub mod foundation;
/// Frame buffers and sequences.
pub mod frame;
/// Named frame generators.
pub mod generator;
/// Preview playback state.
pub mod playback;
/// Pixel sampling and domain remapping.
pub mod raster;
/// Batch scheduling.
pub mod render;
/// Editing session.
pub mod session;

pub use crate::foundation::core::{
    CHANNELS, FrameIndex, GenerateRequest, Rgba8, Vec2, frame_time, normalized_point,
    pixel_to_normalized,
};
pub use crate::foundation::error::{SpriteError, SpriteResult};

pub use crate::config::SpriteConfig;
pub use crate::encode::png::{PngSequenceSink, SpriteSheetSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, NullSink, SinkConfig, TeeSink};
pub use crate::field::ShapeKind;
pub use crate::frame::buffer::FrameBuffer;
pub use crate::frame::sequence::FrameSequence;
pub use crate::generator::FrameGenerator;
pub use crate::generator::lightning_beam::{LightningBeamGenerator, LightningBeamParams};
pub use crate::generator::registry::GeneratorRegistry;
pub use crate::generator::slash_trail::{SlashTrailGenerator, SlashTrailParams};
pub use crate::playback::Playback;
pub use crate::raster::remap::remap_to_ring;
pub use crate::raster::sampler::sample;
pub use crate::render::scheduler::{BatchOutcome, BatchScheduler, BatchStats, SkipReason};
pub use crate::session::SpriteSession;
