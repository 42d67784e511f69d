//! Bookkeeping for the timers a carousel host has armed.
//!
//! Both carousel hosts keep their handles here: [`crate::timeline::Timeline`]
//! stores virtual due times, the landing page stores browser interval and
//! timeout handles. Handles that come back out of a method are no longer
//! tracked and must be cancelled by the caller.

/// One repeating auto-advance slot plus any number of one-shot resume slots.
///
/// After [`TimerSlots::teardown`] nothing can be armed any more: handles
/// offered to a torn-down set are handed straight back.
#[derive(Debug)]
pub struct TimerSlots<A, R> {
    auto_advance: Option<A>,
    resumes: Vec<(u64, R)>,
    next_id: u64,
    torn_down: bool,
}

impl<A, R> Default for TimerSlots<A, R> {
    fn default() -> Self {
        Self {
            auto_advance: None,
            resumes: Vec::new(),
            next_id: 0,
            torn_down: false,
        }
    }
}

impl<A, R> TimerSlots<A, R> {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Armed timers (auto-advance plus pending resumes).
    pub fn pending(&self) -> usize {
        usize::from(self.auto_advance.is_some()) + self.resumes.len()
    }

    pub fn auto_advance(&self) -> Option<&A> {
        self.auto_advance.as_ref()
    }

    pub fn auto_advance_mut(&mut self) -> Option<&mut A> {
        self.auto_advance.as_mut()
    }

    /// Keep `handle` as the single auto-advance timer.
    ///
    /// Returns the handle to cancel: the one it replaced, or `handle` itself
    /// once torn down.
    pub fn arm_auto_advance(&mut self, handle: A) -> Option<A> {
        if self.torn_down {
            return Some(handle);
        }
        self.auto_advance.replace(handle)
    }

    pub fn cancel_auto_advance(&mut self) -> Option<A> {
        self.auto_advance.take()
    }

    /// Id for a resume timer that is about to be armed.
    ///
    /// Hosts whose timer callback has to know its own id reserve it first.
    pub fn reserve_resume(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Track a resume timer under `id`. Returns `handle` back once torn down.
    pub fn arm_resume(&mut self, id: u64, handle: R) -> Option<R> {
        if self.torn_down {
            return Some(handle);
        }
        self.resumes.push((id, handle));
        None
    }

    /// Stop tracking resume `id`, typically because it just fired.
    pub fn take_resume(&mut self, id: u64) -> Option<R> {
        let idx = self.resumes.iter().position(|(pending, _)| *pending == id)?;
        Some(self.resumes.remove(idx).1)
    }

    pub fn resumes(&self) -> impl Iterator<Item = (u64, &R)> {
        self.resumes.iter().map(|(id, handle)| (*id, handle))
    }

    /// Give up every slot for good. Returns all handles still armed.
    pub fn teardown(&mut self) -> (Option<A>, Vec<R>) {
        self.torn_down = true;
        let resumes = self.resumes.drain(..).map(|(_, handle)| handle).collect();
        (self.auto_advance.take(), resumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type Slots = TimerSlots<&'static str, &'static str>;

    #[test]
    fn auto_advance_is_single_flight() {
        let mut slots = Slots::default();
        assert_eq!(slots.arm_auto_advance("first"), None);
        assert_eq!(slots.arm_auto_advance("second"), Some("first"));
        assert_eq!(slots.auto_advance(), Some(&"second"));
        assert_eq!(slots.pending(), 1);

        assert_eq!(slots.cancel_auto_advance(), Some("second"));
        assert_eq!(slots.cancel_auto_advance(), None);
    }

    #[test]
    fn resumes_are_tracked_by_id() {
        let mut slots = Slots::default();
        let a = slots.reserve_resume();
        let b = slots.reserve_resume();
        assert_ne!(a, b);
        assert_eq!(slots.arm_resume(a, "a"), None);
        assert_eq!(slots.arm_resume(b, "b"), None);

        assert_eq!(slots.take_resume(a), Some("a"));
        assert_eq!(slots.take_resume(a), None);
        assert_eq!(slots.resumes().collect::<Vec<_>>(), vec![(b, &"b")]);
    }

    #[test]
    fn teardown_returns_everything_armed() {
        let mut slots = Slots::default();
        slots.arm_auto_advance("tick");
        let id = slots.reserve_resume();
        slots.arm_resume(id, "resume");

        assert_eq!(slots.teardown(), (Some("tick"), vec!["resume"]));
        assert!(slots.is_torn_down());
        assert_eq!(slots.pending(), 0);
    }

    #[test]
    fn nothing_can_be_armed_after_teardown() {
        let mut slots = Slots::default();
        slots.teardown();

        assert_eq!(slots.arm_auto_advance("late tick"), Some("late tick"));
        let id = slots.reserve_resume();
        assert_eq!(slots.arm_resume(id, "late resume"), Some("late resume"));
        assert_eq!(slots.pending(), 0);
    }
}
