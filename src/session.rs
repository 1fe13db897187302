//! Interactive editing session: one active generator driving one frame sequence.

use crate::config::{DEFAULT_FRAME_COUNT, DEFAULT_SIZE, SpriteConfig};
use crate::encode::sink::FrameSink;
use crate::foundation::core::GenerateRequest;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::frame::sequence::FrameSequence;
use crate::generator::FrameGenerator;
use crate::generator::edit::EditTracker;
use crate::generator::registry::GeneratorRegistry;
use crate::playback::Playback;
use crate::render::scheduler::{BatchOutcome, BatchScheduler};
use std::sync::MutexGuard;

/// Ties the registry, the active generator, sequence settings and the scheduler together.
///
/// Generator selection and sequence settings have independent lifecycles: selecting a generator
/// never resizes the sequence and resizing never changes the generator.
#[derive(Debug)]
pub struct SpriteSession {
    registry: GeneratorRegistry,
    active: Option<Box<dyn FrameGenerator>>,
    frame_count: u32,
    size: u32,
    scheduler: BatchScheduler,
    edits: EditTracker,
}

impl Default for SpriteSession {
    fn default() -> Self {
        Self::new(GeneratorRegistry::with_builtins())
    }
}

impl SpriteSession {
    /// Session over `registry` with no generator selected and default settings.
    pub fn new(registry: GeneratorRegistry) -> Self {
        Self {
            registry,
            active: None,
            frame_count: DEFAULT_FRAME_COUNT,
            size: DEFAULT_SIZE,
            scheduler: BatchScheduler::new(),
            edits: EditTracker::new(),
        }
    }

    /// Session set up from a validated config: generator selected, parameters patched.
    pub fn from_config(cfg: &SpriteConfig) -> SpriteResult<Self> {
        cfg.validate()?;
        let mut session = Self {
            scheduler: BatchScheduler::with_threads(cfg.threads)?,
            ..Self::default()
        };
        session.select_generator(&cfg.generator)?;
        session.frame_count = cfg.frame_count;
        session.size = cfg.size;
        if let Some(patch) = &cfg.params {
            session.edit_params(patch)?;
            session.edits.release();
        }
        Ok(session)
    }

    /// Available generators.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Replace the active generator with a fresh default instance of `name`.
    pub fn select_generator(&mut self, name: &str) -> SpriteResult<()> {
        let generator = self.registry.create(name)?;
        tracing::debug!(generator = name, "generator selected");
        self.active = Some(generator);
        self.edits = EditTracker::new();
        Ok(())
    }

    /// The active generator, if any.
    pub fn active_generator(&self) -> Option<&dyn FrameGenerator> {
        self.active.as_deref()
    }

    /// Frames the next batch will produce.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Frame size the next batch will produce.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the frame count used by the next batch. Existing frames are kept until then.
    pub fn set_frame_count(&mut self, frame_count: u32) -> SpriteResult<()> {
        GenerateRequest::new(frame_count, self.size)?;
        self.frame_count = frame_count;
        Ok(())
    }

    /// Change the resolution and resize existing frames in place (contents are lost).
    ///
    /// Returns `false` if a batch was in flight and the existing frames were left alone.
    pub fn set_size(&mut self, size: u32) -> SpriteResult<bool> {
        let resized = self.scheduler.resize(size)?;
        if resized {
            self.size = size;
        }
        Ok(resized)
    }

    /// Regenerate every frame with the active generator and commit them to `sink`.
    pub fn generate(&self, sink: &mut dyn FrameSink) -> SpriteResult<BatchOutcome> {
        let req = GenerateRequest::new(self.frame_count, self.size)?;
        self.scheduler
            .generate_all(self.active_generator(), req, sink)
    }

    /// Current parameters of the active generator.
    pub fn params(&self) -> SpriteResult<serde_json::Value> {
        self.active
            .as_ref()
            .ok_or_else(|| SpriteError::validation("no generator selected"))?
            .params()
    }

    /// Apply a parameter patch mid-interaction. Does not regenerate.
    pub fn edit_params(&mut self, patch: &serde_json::Value) -> SpriteResult<bool> {
        if self.scheduler.is_generating() {
            return Err(SpriteError::validation(
                "parameters are read-only while a batch is generating",
            ));
        }
        let generator = self
            .active
            .as_mut()
            .ok_or_else(|| SpriteError::validation("no generator selected"))?;
        let changed = generator.edit_params(patch)?;
        tracing::debug!(generator = generator.name(), changed, "parameters edited");
        self.edits.record(changed);
        Ok(changed)
    }

    /// End the edit interaction; regenerates into `sink` only if something changed.
    pub fn release_edit(&mut self, sink: &mut dyn FrameSink) -> SpriteResult<Option<BatchOutcome>> {
        if !self.edits.release() {
            return Ok(None);
        }
        self.generate(sink).map(Some)
    }

    /// Advance preview playback by `dt` seconds.
    pub fn tick(&self, dt: f64) {
        self.scheduler.tick(dt);
    }

    /// Lock the committed sequence.
    pub fn sequence(&self) -> MutexGuard<'_, FrameSequence> {
        self.scheduler.sequence()
    }

    /// Lock the playback state.
    pub fn playback(&self) -> MutexGuard<'_, Playback> {
        self.scheduler.playback()
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &BatchScheduler {
        &self.scheduler
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
