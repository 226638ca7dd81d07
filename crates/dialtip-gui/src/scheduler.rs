//! Frame-driven timer service and window geometry for egui hosts.
//!
//! egui has no timer callbacks. [`FrameScheduler`] keeps tooltip timers on a
//! virtual clock and catches it up with `input.time` at the start of every
//! frame, asking egui for a repaint when the next timer is due.

use std::cell::Cell;
use std::time::Duration;

use dialtip_core::{
    ManualScheduler, Rect, Scheduler, ScreenGeometry, TimerCallback, TimerHandle,
};

use crate::surface::from_egui_rect;

/// Scheduler polled once per egui frame.
#[derive(Default)]
pub struct FrameScheduler {
    clock: ManualScheduler,
}

impl FrameScheduler {
    /// Create a scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock to `now`, firing due timers.
    ///
    /// Returns the number of callbacks that ran and how long until the next
    /// pending timer.
    pub fn tick(&self, now: Duration) -> (usize, Option<Duration>) {
        let fired = self.clock.advance_to(now);
        if fired > 0 {
            tracing::trace!(fired, "tooltip timers fired");
        }
        let wait = self
            .clock
            .next_deadline()
            .map(|due| due.saturating_sub(self.clock.now()));
        (fired, wait)
    }

    /// Catch up with the frame time of `ctx` and schedule the next wake-up.
    ///
    /// Returns whether any timer fired.
    pub fn sync(&self, ctx: &egui::Context) -> bool {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        let (fired, wait) = self.tick(now);
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
        fired > 0
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.clock.pending()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        self.clock.schedule_once(delay, callback)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.clock.cancel(handle);
    }
}

/// Usable area of the application window, refreshed every frame.
///
/// Dial events use window coordinates as screen coordinates, so tooltips
/// flip inside the window rather than the monitor.
#[derive(Debug, Default)]
pub struct WindowScreen {
    bounds: Cell<Rect>,
}

impl WindowScreen {
    /// Create with the given initial bounds.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Cell::new(bounds),
        }
    }

    /// Take the window size from the current frame.
    pub fn update(&self, ctx: &egui::Context) {
        self.bounds.set(from_egui_rect(ctx.screen_rect()));
    }
}

impl ScreenGeometry for WindowScreen {
    fn usable_bounds(&self) -> Rect {
        self.bounds.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn tick_fires_due_timers_and_reports_the_next() {
        let sched = FrameScheduler::new();
        let hits = Rc::new(Cell::new(0));
        for ms in [100, 250] {
            let hits = Rc::clone(&hits);
            sched.schedule_once(
                Duration::from_millis(ms),
                Box::new(move || hits.set(hits.get() + 1)),
            );
        }

        assert_eq!(
            sched.tick(Duration::from_millis(40)),
            (0, Some(Duration::from_millis(60)))
        );
        assert_eq!(
            sched.tick(Duration::from_millis(120)),
            (1, Some(Duration::from_millis(130)))
        );
        assert_eq!(sched.tick(Duration::from_secs(1)), (1, None));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn cancel_is_forwarded() {
        let sched = FrameScheduler::new();
        let h = sched.schedule_once(Duration::from_millis(5), Box::new(|| {}));
        assert_eq!(sched.pending(), 1);
        sched.cancel(h);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn window_screen_reports_its_bounds() {
        let screen = WindowScreen::new(Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(screen.usable_bounds().bottom(), 480.0);
    }
}
