/// Lower bound of the progress range.
pub const PROGRESS_MIN: i32 = 0;
/// Upper bound of the progress range.
pub const PROGRESS_MAX: i32 = 100;

/// Daily progress with separate committed and pending values. The slider
/// edits the pending value continuously; an explicit update action copies
/// pending into committed. Both are always clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    committed: i32,
    pending: i32,
}

impl Progress {
    pub fn new(initial: i32) -> Self {
        let v = initial.clamp(PROGRESS_MIN, PROGRESS_MAX);
        Progress {
            committed: v,
            pending: v,
        }
    }

    /// The displayed value.
    pub fn committed(&self) -> i32 {
        self.committed
    }

    /// The value being edited by the slider.
    pub fn pending(&self) -> i32 {
        self.pending
    }

    pub fn set_pending(&mut self, value: i32) {
        self.pending = value.clamp(PROGRESS_MIN, PROGRESS_MAX);
    }

    /// Copy pending into committed.
    pub fn commit(&mut self) {
        self.committed = self.pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(Progress::new(120).committed(), 100);
        assert_eq!(Progress::new(-5).pending(), 0);
        assert_eq!(Progress::new(66).committed(), 66);
    }

    #[test]
    fn set_pending_clamps() {
        let mut p = Progress::new(66);
        p.set_pending(150);
        assert_eq!(p.pending(), 100);
        p.set_pending(-10);
        assert_eq!(p.pending(), 0);
    }

    #[test]
    fn pending_is_decoupled_until_commit() {
        let mut p = Progress::new(66);
        p.set_pending(40);
        assert_eq!(p.committed(), 66);
        assert_eq!(p.pending(), 40);
        p.commit();
        assert_eq!(p.committed(), 40);
        assert_eq!(p.pending(), p.committed());
    }
}
