use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, GenerateRequest, frame_time};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::frame::buffer::FrameBuffer;
use crate::frame::sequence::FrameSequence;
use crate::generator::FrameGenerator;
use crate::playback::Playback;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Worker count used when the platform cannot report its parallelism.
pub const FALLBACK_WORKERS: usize = 4;

/// Why a batch request did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Another batch was still running on this scheduler.
    AlreadyRunning,
    /// No generator was selected.
    NoGenerator,
}

/// Statistics of a completed batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchStats {
    /// Frames generated and committed.
    pub frames: u32,
    /// Edge length of each frame.
    pub size: u32,
    /// Worker lanes the frame indices were striped across.
    pub workers: usize,
    /// Wall time from allocation to the end of the commit.
    pub elapsed: Duration,
}

/// Result of [`BatchScheduler::generate_all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every frame was generated and committed.
    Completed(BatchStats),
    /// The request was a no-op; nothing changed.
    Skipped(SkipReason),
}

impl BatchOutcome {
    /// Stats of a completed batch.
    pub fn stats(&self) -> Option<&BatchStats> {
        match self {
            Self::Completed(stats) => Some(stats),
            Self::Skipped(_) => None,
        }
    }

    /// Return `true` for [`BatchOutcome::Skipped`].
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Owns the frame sequence and fills it from a generator, one batch at a time.
///
/// At most one batch (or resize) is in flight per scheduler. A second request while one runs is
/// skipped, never queued, and never touches the sequence being written.
#[derive(Debug, Default)]
pub struct BatchScheduler {
    in_flight: AtomicBool,
    sequence: Mutex<FrameSequence>,
    playback: Mutex<Playback>,
    threads: Option<usize>,
}

/// Clears the in-flight flag on every exit path, unwinding included.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Restores the saved playback flag on every exit path, unwinding included.
struct PlaybackGuard<'a> {
    scheduler: &'a BatchScheduler,
    was_playing: bool,
}

impl<'a> PlaybackGuard<'a> {
    fn suspend(scheduler: &'a BatchScheduler) -> Self {
        let was_playing = scheduler.playback().suspend();
        Self {
            scheduler,
            was_playing,
        }
    }
}

impl Drop for PlaybackGuard<'_> {
    fn drop(&mut self) {
        let frames = self.scheduler.sequence().len();
        let mut playback = self.scheduler.playback();
        playback.restore(self.was_playing);
        playback.clamp_selection(frames);
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // Poisoned by a panicking generator; the next batch reallocates the sequence.
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl BatchScheduler {
    /// Scheduler sized to the machine's parallelism.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler with an explicit worker count (`None` detects it).
    pub fn with_threads(threads: Option<usize>) -> SpriteResult<Self> {
        if let Some(n) = threads
            && n == 0
        {
            return Err(SpriteError::validation("'threads' must be >= 1 when set"));
        }
        Ok(Self {
            threads,
            ..Self::default()
        })
    }

    /// Configured worker override.
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Whether a batch or resize currently holds the scheduler.
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Lock the committed sequence. Blocks while a batch is writing it.
    pub fn sequence(&self) -> MutexGuard<'_, FrameSequence> {
        lock(&self.sequence)
    }

    /// Lock the playback state.
    pub fn playback(&self) -> MutexGuard<'_, Playback> {
        lock(&self.playback)
    }

    /// Advance playback by `dt` seconds. Does nothing while a batch runs.
    pub fn tick(&self, dt: f64) {
        if self.is_generating() {
            return;
        }
        let frames = self.sequence().len();
        self.playback().advance(dt, frames);
    }

    /// Number of worker lanes for a batch of `frame_count` frames.
    ///
    /// The override or the detected parallelism (falling back to [`FALLBACK_WORKERS`]), never
    /// more than there are frames.
    pub fn worker_count(&self, frame_count: u32) -> usize {
        let detected = self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(FALLBACK_WORKERS)
        });
        detected.min(frame_count as usize).max(1)
    }

    /// Resize every existing frame to `size x size`, discarding pixel contents.
    ///
    /// Returns `Ok(false)` without touching the sequence while a batch is in flight.
    pub fn resize(&self, size: u32) -> SpriteResult<bool> {
        if size == 0 {
            return Err(SpriteError::validation("size must be >= 1"));
        }
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!(size, "resize skipped: generation in progress");
            return Ok(false);
        };
        self.sequence().resize(size);
        Ok(true)
    }

    /// Generate every frame of `req` with `generator`, then commit them to `sink` in order.
    ///
    /// Skips (with a warning) when no generator is given or another batch is running. Playback is
    /// paused for the duration and restored afterwards. If any frame fails or panics, the batch
    /// is abandoned: the sequence is left empty, nothing is committed, and the error is returned.
    #[tracing::instrument(
        skip(self, generator, sink),
        fields(
            generator = generator.map(|g| g.name()),
            frames = req.frame_count,
            size = req.size
        )
    )]
    pub fn generate_all(
        &self,
        generator: Option<&dyn FrameGenerator>,
        req: GenerateRequest,
        sink: &mut dyn FrameSink,
    ) -> SpriteResult<BatchOutcome> {
        req.validate()?;

        let Some(generator) = generator else {
            tracing::warn!("generation skipped: no generator selected");
            return Ok(BatchOutcome::Skipped(SkipReason::NoGenerator));
        };
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!("generation skipped: already running");
            return Ok(BatchOutcome::Skipped(SkipReason::AlreadyRunning));
        };

        let workers = self.worker_count(req.frame_count);
        let pool = build_thread_pool(workers)?;

        let res = {
            let _playback = PlaybackGuard::suspend(self);
            self.run_batch(&pool, workers, generator, req, sink)
        };

        match &res {
            Ok(BatchOutcome::Completed(stats)) => tracing::info!(
                workers = stats.workers,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                "generation finished"
            ),
            Ok(BatchOutcome::Skipped(_)) => {}
            Err(e) => tracing::warn!(error = %e, "generation abandoned"),
        }
        res
    }

    fn run_batch(
        &self,
        pool: &rayon::ThreadPool,
        workers: usize,
        generator: &dyn FrameGenerator,
        req: GenerateRequest,
        sink: &mut dyn FrameSink,
    ) -> SpriteResult<BatchOutcome> {
        let started = Instant::now();
        let looping = generator.is_looping();
        tracing::info!(workers, looping, "generation started");

        let mut seq = self.sequence();
        seq.allocate(req.frame_count, req.size);

        // Worker `w` owns indices w, w + workers, w + 2 * workers, ...
        let mut lanes: Vec<Vec<(u32, &mut FrameBuffer)>> =
            (0..workers).map(|_| Vec::new()).collect();
        for (i, frame) in seq.frames_mut().iter_mut().enumerate() {
            lanes[i % workers].push((i as u32, frame));
        }

        let filled = std::panic::catch_unwind(AssertUnwindSafe(|| {
            pool.install(|| {
                lanes
                    .into_par_iter()
                    .enumerate()
                    .try_for_each(|(worker, lane)| -> SpriteResult<()> {
                        let count = lane.len();
                        for (i, frame) in lane {
                            let t = frame_time(i, req.frame_count, looping);
                            generator.generate(frame, t).inspect_err(|e| {
                                tracing::debug!(worker, frame = i, t, error = %e, "frame failed");
                            })?;
                        }
                        tracing::debug!(worker, frames = count, "worker finished");
                        Ok(())
                    })
            })
        }))
        .unwrap_or_else(|payload| {
            Err(SpriteError::generation(format!(
                "generator '{}' panicked: {}",
                generator.name(),
                panic_message(payload.as_ref())
            )))
        });

        if let Err(e) = filled {
            seq.release();
            return Err(e);
        }

        sink.begin(SinkConfig {
            width: req.size,
            height: req.size,
            frame_count: req.frame_count,
            looping,
            generator: generator.name(),
        })?;
        for (i, frame) in seq.frames().iter().enumerate() {
            sink.push_frame(FrameIndex(i as u32), frame)?;
        }
        sink.end()?;

        Ok(BatchOutcome::Completed(BatchStats {
            frames: req.frame_count,
            size: req.size,
            workers,
            elapsed: started.elapsed(),
        }))
    }
}

fn build_thread_pool(workers: usize) -> SpriteResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("spritegen-worker-{i}"))
        .build()
        .map_err(|e| SpriteError::generation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;
