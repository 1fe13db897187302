use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Rgba8;

/// Writes its frame time into every pixel and records each call.
struct Recorder {
    looping: bool,
    calls: Mutex<Vec<f64>>,
}

impl Recorder {
    fn new(looping: bool) -> Self {
        Self {
            looping,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FrameGenerator for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn generate(&self, frame: &mut FrameBuffer, t: f64) -> SpriteResult<()> {
        self.calls.lock().unwrap().push(t);
        frame.fill(Rgba8::grey((t * 100.0) as u8, 255));
        Ok(())
    }

    fn params(&self) -> SpriteResult<serde_json::Value> {
        Ok(serde_json::json!({}))
    }

    fn edit_params(&mut self, _patch: &serde_json::Value) -> SpriteResult<bool> {
        Ok(false)
    }
}

/// Fails on one frame time.
struct FailsAt(f64);

impl FrameGenerator for FailsAt {
    fn name(&self) -> &'static str {
        "fails"
    }

    fn is_looping(&self) -> bool {
        true
    }

    fn generate(&self, frame: &mut FrameBuffer, t: f64) -> SpriteResult<()> {
        if t == self.0 {
            return Err(SpriteError::generation("boom"));
        }
        frame.fill(Rgba8::OPAQUE_BLACK);
        Ok(())
    }

    fn params(&self) -> SpriteResult<serde_json::Value> {
        Ok(serde_json::json!({}))
    }

    fn edit_params(&mut self, _patch: &serde_json::Value) -> SpriteResult<bool> {
        Ok(false)
    }
}

/// Panics on one frame time after painting the frames before it.
struct PanicsAt(f64);

impl FrameGenerator for PanicsAt {
    fn name(&self) -> &'static str {
        "panics"
    }

    fn is_looping(&self) -> bool {
        true
    }

    fn generate(&self, frame: &mut FrameBuffer, t: f64) -> SpriteResult<()> {
        if t == self.0 {
            panic!("field exploded at t = {t}");
        }
        frame.fill(Rgba8::OPAQUE_BLACK);
        Ok(())
    }

    fn params(&self) -> SpriteResult<serde_json::Value> {
        Ok(serde_json::json!({}))
    }

    fn edit_params(&mut self, _patch: &serde_json::Value) -> SpriteResult<bool> {
        Ok(false)
    }
}

#[test]
fn every_frame_is_generated_once_with_its_time() {
    let sched = BatchScheduler::with_threads(Some(3)).unwrap();
    let g = Recorder::new(false);
    let mut sink = InMemorySink::new();
    let out = sched
        .generate_all(Some(&g), GenerateRequest::new(5, 2).unwrap(), &mut sink)
        .unwrap();

    let stats = out.stats().unwrap();
    assert_eq!(stats.frames, 5);
    assert_eq!(stats.workers, 3);

    let mut calls = g.calls.lock().unwrap().clone();
    calls.sort_by(f64::total_cmp);
    assert_eq!(calls, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let idx: Vec<u32> = sink.frames.iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    assert_eq!(sink.frames[4].1.pixel(0, 0), Rgba8::grey(100, 255));
    assert_eq!(sched.sequence().len(), 5);
    assert!(!sched.is_generating());
}

#[test]
fn looping_generators_never_reach_one() {
    let sched = BatchScheduler::with_threads(Some(2)).unwrap();
    let g = Recorder::new(true);
    sched
        .generate_all(Some(&g), GenerateRequest::new(4, 1).unwrap(), &mut NullSinkForTest)
        .unwrap();
    let mut calls = g.calls.lock().unwrap().clone();
    calls.sort_by(f64::total_cmp);
    assert_eq!(calls, vec![0.0, 0.25, 0.5, 0.75]);
}

struct NullSinkForTest;

impl FrameSink for NullSinkForTest {
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

#[test]
fn missing_generator_is_a_skip_not_an_error() {
    let sched = BatchScheduler::new();
    let mut sink = InMemorySink::new();
    let out = sched
        .generate_all(None, GenerateRequest::new(2, 2).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(out, BatchOutcome::Skipped(SkipReason::NoGenerator));
    assert!(sink.config().is_none());
}

#[test]
fn invalid_requests_are_rejected() {
    let sched = BatchScheduler::new();
    let g = Recorder::new(true);
    let req = GenerateRequest {
        frame_count: 0,
        size: 8,
    };
    let err = sched
        .generate_all(Some(&g), req, &mut NullSinkForTest)
        .unwrap_err();
    assert!(matches!(err, SpriteError::Validation(_)));
    assert!(BatchScheduler::with_threads(Some(0)).is_err());
}

#[test]
fn failing_frame_abandons_the_batch() {
    let sched = BatchScheduler::with_threads(Some(2)).unwrap();
    sched.playback().toggle();

    let mut sink = InMemorySink::new();
    let ok = Recorder::new(true);
    sched
        .generate_all(Some(&ok), GenerateRequest::new(4, 2).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sched.sequence().len(), 4);

    let bad = FailsAt(0.5);
    let mut sink = InMemorySink::new();
    let err = sched
        .generate_all(Some(&bad), GenerateRequest::new(4, 2).unwrap(), &mut sink)
        .unwrap_err();
    assert!(matches!(err, SpriteError::Generation(_)));
    assert!(sched.sequence().is_empty());
    assert!(sink.config().is_none());
    assert!(sink.frames.is_empty());
    assert!(sched.playback().playing);
    assert!(!sched.is_generating());
}

#[test]
fn worker_count_is_capped_by_frames() {
    let sched = BatchScheduler::with_threads(Some(8)).unwrap();
    assert_eq!(sched.worker_count(3), 3);
    assert_eq!(sched.worker_count(30), 8);
    assert!(BatchScheduler::new().worker_count(1000) >= 1);
}

#[test]
fn resize_keeps_frame_count_and_clears_pixels() {
    let sched = BatchScheduler::with_threads(Some(1)).unwrap();
    let g = Recorder::new(false);
    sched
        .generate_all(Some(&g), GenerateRequest::new(2, 4).unwrap(), &mut NullSinkForTest)
        .unwrap();
    assert!(sched.sequence().frames()[1].has_visible_pixels());

    assert!(sched.resize(6).unwrap());
    let seq = sched.sequence();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.dimensions(), Some((6, 6)));
    assert!(!seq.frames()[1].has_visible_pixels());
    drop(seq);

    assert!(sched.resize(0).is_err());
}

#[test]
fn resize_is_refused_while_in_flight() {
    let sched = BatchScheduler::new();
    let guard = InFlightGuard::acquire(&sched.in_flight).unwrap();
    assert!(!sched.resize(8).unwrap());
    drop(guard);
    assert!(sched.resize(8).unwrap());
}

#[test]
fn tick_advances_committed_frames() {
    let sched = BatchScheduler::with_threads(Some(1)).unwrap();
    let g = Recorder::new(true);
    sched
        .generate_all(Some(&g), GenerateRequest::new(2, 1).unwrap(), &mut NullSinkForTest)
        .unwrap();
    sched.playback().toggle();
    sched.tick(0.5);
    assert_eq!(sched.playback().selected_frame, Some(0));
    sched.tick(0.5);
    assert_eq!(sched.playback().selected_frame, Some(1));
}

#[test]
fn panicking_generator_is_reported_and_cleaned_up() {
    let sched = BatchScheduler::with_threads(Some(1)).unwrap();
    sched.playback().toggle();

    let mut sink = InMemorySink::new();
    let err = sched
        .generate_all(
            Some(&PanicsAt(0.75)),
            GenerateRequest::new(4, 2).unwrap(),
            &mut sink,
        )
        .unwrap_err();

    assert!(matches!(err, SpriteError::Generation(_)));
    assert!(err.to_string().contains("field exploded"));
    assert!(sched.sequence().is_empty());
    assert!(sink.config().is_none());
    assert!(sched.playback().playing);
    assert!(!sched.is_generating());

    // The scheduler stays usable afterwards.
    let ok = Recorder::new(true);
    sched
        .generate_all(Some(&ok), GenerateRequest::new(2, 2).unwrap(), &mut sink)
        .unwrap();
    assert_eq!(sched.sequence().len(), 2);
}
