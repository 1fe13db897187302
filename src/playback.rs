//! Preview playback state.
//!
//! The whole sequence plays once per second: each frame is shown for `1 / frame_count` seconds.

/// Play/pause state and the frame currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Playback {
    /// Whether frames advance on [`Playback::advance`].
    pub playing: bool,
    /// Frame shown by the preview, if any.
    pub selected_frame: Option<usize>,
    /// Time accumulated toward the next frame step, in seconds.
    pub elapsed: f64,
}

impl Playback {
    /// Paused, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds over a sequence of `frame_count` frames.
    ///
    /// Steps at most one frame per call and wraps at the end. Accumulated time above one second
    /// is dropped. While paused (or with nothing to show) the accumulator stays at zero.
    pub fn advance(&mut self, dt: f64, frame_count: usize) {
        if !self.playing || frame_count == 0 {
            self.elapsed = 0.0;
            return;
        }

        let frame_duration = 1.0 / frame_count as f64;
        self.elapsed += dt;
        if self.elapsed >= frame_duration {
            self.elapsed -= frame_duration;
            self.selected_frame = Some(match self.selected_frame {
                Some(i) => (i + 1) % frame_count,
                None => 0,
            });
        }
        if self.elapsed > 1.0 {
            self.elapsed = 0.0;
        }
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Show frame `index` and pause.
    pub fn select(&mut self, index: usize) {
        self.selected_frame = Some(index);
        self.playing = false;
    }

    /// Pause and return the prior `playing` flag for [`Playback::restore`].
    pub fn suspend(&mut self) -> bool {
        std::mem::replace(&mut self.playing, false)
    }

    /// Restore a flag saved by [`Playback::suspend`].
    pub fn restore(&mut self, was_playing: bool) {
        self.playing = was_playing;
    }

    /// Drop a selection that no longer fits a sequence of `frame_count` frames.
    pub fn clamp_selection(&mut self, frame_count: usize) {
        if self.selected_frame.is_some_and(|i| i >= frame_count) {
            self.selected_frame = frame_count.checked_sub(1);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/playback.rs"]
mod tests;
