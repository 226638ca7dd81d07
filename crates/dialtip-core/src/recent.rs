//! The shared "a tooltip was shown recently" flag.
//!
//! One [`RecentlyShown`] is shared by every tooltip of an application (it
//! lives in the [`TooltipContext`](crate::TooltipContext)). It starts out
//! false, becomes true the moment any tooltip is shown, and is cleared by a
//! delayed callback scheduled when a tooltip hides. At most one clear is
//! pending at a time; whoever schedules a newer one, or shows a tooltip,
//! cancels the older one.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;

use crate::scheduler::{Scheduler, TimerHandle};

/// Identity of a tooltip within one [`RecentlyShown`] group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipId(pub u64);

#[derive(Debug, Default)]
struct RecentState {
    shown: Cell<bool>,
    pending_clear: Cell<Option<(TimerHandle, TooltipId)>>,
    next_id: Cell<u64>,
}

/// Cheaply clonable handle to the shared recentness flag.
#[derive(Debug, Clone, Default)]
pub struct RecentlyShown(Rc<RecentState>);

impl RecentlyShown {
    /// A fresh flag, initially false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tooltip was visible within the last grace interval.
    pub fn get(&self) -> bool {
        self.0.shown.get()
    }

    /// Whether a delayed clear is waiting to fire.
    pub fn is_clear_pending(&self) -> bool {
        self.0.pending_clear.get().is_some()
    }

    /// Force the flag back to false and cancel any pending clear.
    pub fn reset(&self, scheduler: &dyn Scheduler) {
        self.cancel_clear(scheduler);
        self.0.shown.set(false);
    }

    pub(crate) fn allocate_id(&self) -> TooltipId {
        let id = self.0.next_id.get() + 1;
        self.0.next_id.set(id);
        TooltipId(id)
    }

    /// A tooltip became visible.
    pub(crate) fn mark_shown(&self, scheduler: &dyn Scheduler) {
        self.cancel_clear(scheduler);
        self.0.shown.set(true);
    }

    pub(crate) fn cancel_clear(&self, scheduler: &dyn Scheduler) {
        if let Some((handle, _)) = self.0.pending_clear.take() {
            scheduler.cancel(handle);
        }
    }

    /// A tooltip hid: clear the flag after `grace`, replacing any older clear.
    pub(crate) fn schedule_clear(
        &self,
        scheduler: &dyn Scheduler,
        grace: Duration,
        owner: TooltipId,
    ) {
        self.cancel_clear(scheduler);
        if !self.get() {
            return;
        }
        let weak = Rc::downgrade(&self.0);
        let handle = scheduler.schedule_once(
            grace,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.pending_clear.set(None);
                    state.shown.set(false);
                }
            }),
        );
        self.0.pending_clear.set(Some((handle, owner)));
    }

    /// The tooltip `owner` is going away.
    ///
    /// If it scheduled the pending clear, that clear is cancelled and the
    /// flag is cleared right away so it cannot stay stuck at true.
    pub(crate) fn release_owner(&self, scheduler: &dyn Scheduler, owner: TooltipId) {
        if let Some((handle, pending_owner)) = self.0.pending_clear.get()
            && pending_owner == owner
        {
            scheduler.cancel(handle);
            self.0.pending_clear.set(None);
            self.0.shown.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    const GRACE: Duration = Duration::from_millis(200);

    #[test]
    fn clear_fires_after_grace() {
        let sched = ManualScheduler::new();
        let recent = RecentlyShown::new();
        let id = recent.allocate_id();
        recent.mark_shown(&sched);
        recent.schedule_clear(&sched, GRACE, id);
        assert!(recent.get());
        assert!(recent.is_clear_pending());
        sched.advance(Duration::from_millis(199));
        assert!(recent.get());
        sched.advance(Duration::from_millis(1));
        assert!(!recent.get());
        assert!(!recent.is_clear_pending());
    }

    #[test]
    fn show_cancels_pending_clear() {
        let sched = ManualScheduler::new();
        let recent = RecentlyShown::new();
        let id = recent.allocate_id();
        recent.mark_shown(&sched);
        recent.schedule_clear(&sched, GRACE, id);
        recent.mark_shown(&sched);
        assert_eq!(sched.pending(), 0);
        sched.advance(GRACE * 2);
        assert!(recent.get());
    }

    #[test]
    fn nothing_scheduled_when_already_clear() {
        let sched = ManualScheduler::new();
        let recent = RecentlyShown::new();
        let id = recent.allocate_id();
        recent.schedule_clear(&sched, GRACE, id);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn releasing_owner_cancels_and_clears() {
        let sched = ManualScheduler::new();
        let recent = RecentlyShown::new();
        let a = recent.allocate_id();
        let b = recent.allocate_id();
        recent.mark_shown(&sched);
        recent.schedule_clear(&sched, GRACE, a);

        recent.release_owner(&sched, b);
        assert_eq!(sched.pending(), 1);

        recent.release_owner(&sched, a);
        assert_eq!(sched.pending(), 0);
        assert!(!recent.get());
    }

    #[test]
    fn ids_are_unique() {
        let recent = RecentlyShown::new();
        assert_ne!(recent.allocate_id(), recent.allocate_id());
    }
}
