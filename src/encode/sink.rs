use crate::foundation::core::FrameIndex;
use crate::foundation::error::SpriteResult;
use crate::frame::buffer::FrameBuffer;

/// Configuration provided to a [`FrameSink`] before the first frame of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: u32,
    /// Whether the sequence loops.
    pub looping: bool,
    /// Name of the generator that produced the frames.
    pub generator: &'static str,
}

/// Commit contract for finished frames.
///
/// Ordering contract: `push_frame` is called from the calling thread only, after every worker has
/// joined, in strictly increasing `FrameIndex` order.
pub trait FrameSink {
    /// Start of a batch.
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()>;
    /// Commit one finished frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameBuffer) -> SpriteResult<()>;
    /// End of a batch.
    fn end(&mut self) -> SpriteResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in commit order.
    pub frames: Vec<(FrameIndex, FrameBuffer)>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of the last batch, if one began.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Whether the last batch reached `end`.
    pub fn is_finished(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameBuffer) -> SpriteResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Discards every frame. For callers that only need the in-memory sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn begin(&mut self, _cfg: SinkConfig) -> SpriteResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameBuffer) -> SpriteResult<()> {
        Ok(())
    }

    fn end(&mut self) -> SpriteResult<()> {
        Ok(())
    }
}

/// Fans each call out to several sinks in order.
pub struct TeeSink<'a> {
    sinks: Vec<&'a mut dyn FrameSink>,
}

impl<'a> TeeSink<'a> {
    /// Combine `sinks`; each receives every call in the given order.
    pub fn new(sinks: Vec<&'a mut dyn FrameSink>) -> Self {
        Self { sinks }
    }
}

impl FrameSink for TeeSink<'_> {
    fn begin(&mut self, cfg: SinkConfig) -> SpriteResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.begin(cfg))
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameBuffer) -> SpriteResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.push_frame(idx, frame))
    }

    fn end(&mut self) -> SpriteResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.end())
    }
}
