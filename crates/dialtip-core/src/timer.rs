//! Tooltip timing state machine.
//!
//! ```text
//!            Enter                  timeout / Press, Drag, Wheel
//!  Hidden ─────────▶ ShowPending ──────────────────────────────▶ Visible
//!    ▲  │                 │                                        │
//!    │  └─── Press, Drag, Wheel ────────────────────────────────▶  │
//!    │                    │ Leave, Release, Hide                   │
//!    └────────────────────┴────────────────────────────────────────┘
//!                 (schedules the recentness clear)
//! ```
//!
//! The hover delay depends on the shared [`RecentlyShown`] flag: when a
//! tooltip was visible within the grace interval the shorter re-show delay
//! applies. Direct manipulation always shows at once.
//!
//! [`TooltipTimer`] only decides and schedules; the owning
//! [`ValueTooltip`](crate::ValueTooltip) applies the returned
//! [`Transition`] to its overlay.

use alloc::rc::Rc;
use core::fmt;
use core::time::Duration;

use crate::config::TooltipTiming;
use crate::event::EventKind;
use crate::recent::{RecentlyShown, TooltipId};
use crate::scheduler::{Scheduler, TimerCallback, TimerHandle};

/// Where the tooltip is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not shown, nothing pending.
    Hidden,
    /// A delayed show is scheduled.
    ShowPending {
        /// Delay the pending show was armed with.
        delay: Duration,
    },
    /// Shown.
    Visible,
}

/// Timing-relevant meaning of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerInput {
    /// Hover started: arm a delayed show.
    Enter,
    /// Direct manipulation: show immediately.
    Manipulate,
    /// Hover or gesture ended: hide.
    Dismiss,
    /// No effect on timing.
    Ignore,
}

impl TimerInput {
    /// Classify an event kind.
    pub fn from_event(kind: &EventKind) -> Self {
        match kind {
            EventKind::Enter => Self::Enter,
            EventKind::Press | EventKind::Drag | EventKind::Wheel { .. } => Self::Manipulate,
            EventKind::Leave | EventKind::Release | EventKind::Hide => Self::Dismiss,
            EventKind::Unfocus => Self::Ignore,
        }
    }
}

/// What the owner has to do after [`TooltipTimer::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed on screen.
    None,
    /// A delayed show was (re-)armed.
    Armed(Duration),
    /// The tooltip must become visible now.
    Shown,
    /// The tooltip must be hidden.
    Hidden,
}

/// Per-tooltip timing state plus its share of the recentness flag.
pub struct TooltipTimer {
    id: TooltipId,
    state: TimerState,
    pending_show: Option<TimerHandle>,
    timing: TooltipTiming,
    recent: RecentlyShown,
    scheduler: Rc<dyn Scheduler>,
}

impl fmt::Debug for TooltipTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipTimer")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("pending_show", &self.pending_show)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

impl TooltipTimer {
    /// Create a hidden timer that shares `recent` with its siblings.
    pub fn new(scheduler: Rc<dyn Scheduler>, recent: RecentlyShown, timing: TooltipTiming) -> Self {
        let id = recent.allocate_id();
        Self {
            id,
            state: TimerState::Hidden,
            pending_show: None,
            timing,
            recent,
            scheduler,
        }
    }

    /// Identity within the recentness group.
    pub fn id(&self) -> TooltipId {
        self.id
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whether the tooltip is currently shown.
    pub fn is_visible(&self) -> bool {
        self.state == TimerState::Visible
    }

    /// Handle of the pending delayed show, if any.
    pub fn pending_show(&self) -> Option<TimerHandle> {
        self.pending_show
    }

    /// Timing constants in use.
    pub fn timing(&self) -> TooltipTiming {
        self.timing
    }

    /// Delay a hover would use right now.
    pub fn hover_delay(&self) -> Duration {
        if self.recent.get() {
            self.timing.fast_reshow_delay
        } else {
            self.timing.hover_delay
        }
    }

    /// Feed one classified input.
    ///
    /// `on_elapsed` is only called when a delayed show is armed; the callback
    /// it returns must eventually call [`elapsed`](Self::elapsed) on this timer.
    pub fn handle(
        &mut self,
        input: TimerInput,
        on_elapsed: impl FnOnce() -> TimerCallback,
    ) -> Transition {
        match input {
            TimerInput::Enter => {
                if self.state == TimerState::Visible {
                    return Transition::None;
                }
                self.recent.cancel_clear(self.scheduler.as_ref());
                let delay = self.hover_delay();
                self.arm(delay, on_elapsed())
            }
            TimerInput::Manipulate => self.show_now(),
            TimerInput::Dismiss => self.dismiss(),
            TimerInput::Ignore => Transition::None,
        }
    }

    /// Arm a delayed show after `delay`, replacing any pending one.
    pub fn arm(&mut self, delay: Duration, callback: TimerCallback) -> Transition {
        self.cancel_pending_show();
        let handle = self.scheduler.schedule_once(delay, callback);
        self.pending_show = Some(handle);
        self.state = TimerState::ShowPending { delay };
        #[cfg(feature = "tracing")]
        tracing::debug!("tooltip {:?}: show armed ({delay:?}, {handle})", self.id);
        Transition::Armed(delay)
    }

    /// Show immediately, bypassing any pending delay.
    pub fn show_now(&mut self) -> Transition {
        self.cancel_pending_show();
        self.recent.mark_shown(self.scheduler.as_ref());
        if self.state == TimerState::Visible {
            return Transition::None;
        }
        self.state = TimerState::Visible;
        #[cfg(feature = "tracing")]
        tracing::debug!("tooltip {:?}: visible", self.id);
        Transition::Shown
    }

    /// The delayed show fired.
    pub fn elapsed(&mut self) -> Transition {
        // The scheduler already dropped the timer.
        self.pending_show = None;
        match self.state {
            TimerState::ShowPending { .. } => self.show_now(),
            TimerState::Hidden | TimerState::Visible => Transition::None,
        }
    }

    /// Hide and start the recentness grace interval.
    pub fn dismiss(&mut self) -> Transition {
        self.cancel_pending_show();
        self.recent
            .schedule_clear(self.scheduler.as_ref(), self.timing.recent_grace, self.id);
        if self.state == TimerState::Hidden {
            return Transition::None;
        }
        self.state = TimerState::Hidden;
        #[cfg(feature = "tracing")]
        tracing::debug!("tooltip {:?}: hidden", self.id);
        Transition::Hidden
    }

    fn cancel_pending_show(&mut self) {
        if let Some(handle) = self.pending_show.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl Drop for TooltipTimer {
    fn drop(&mut self) {
        self.cancel_pending_show();
        self.recent.release_owner(self.scheduler.as_ref(), self.id);
    }
}
