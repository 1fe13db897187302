/// Tracks one parameter-edit interaction (for example a slider drag).
///
/// Edits during the interaction only mark the tracker dirty; the caller regenerates when
/// [`EditTracker::release`] reports that the settled interaction changed something.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditTracker {
    dirty: bool,
}

impl EditTracker {
    /// Fresh tracker with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of one parameter edit.
    pub fn record(&mut self, changed: bool) {
        self.dirty |= changed;
    }

    /// Whether an edit is waiting for release.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// End the interaction. Returns `true` once if anything changed since the last release.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
