//! Fire-once timer service.
//!
//! The tooltip never blocks: delayed show and the recentness reset are
//! callbacks handed to a [`Scheduler`]. Every call returns a
//! [`TimerHandle`] that the scheduling instance keeps and cancels when
//! superseded or dropped.
//!
//! [`ManualScheduler`] runs on a virtual clock advanced by the host (or by a
//! test), which makes it suitable both for deterministic tests and for
//! frame-driven GUI loops that poll once per frame.
//!
//! ```rust
//! use core::cell::Cell;
//! use core::time::Duration;
//! use std::rc::Rc;
//! use dialtip_core::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&fired);
//! scheduler.schedule_once(Duration::from_millis(10), Box::new(move || flag.set(true)));
//!
//! scheduler.advance(Duration::from_millis(9));
//! assert!(!fired.get());
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

/// Identity of one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Callback run when a timer fires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Host timer service.
///
/// Methods take `&self`: a scheduler is shared between every tooltip of an
/// application and may be re-entered from inside a firing callback.
pub trait Scheduler {
    /// Run `callback` once after `delay`.
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;

    /// Cancel a pending callback. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

struct PendingTimer {
    handle: TimerHandle,
    due: Duration,
    callback: TimerCallback,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

/// Scheduler driven by an explicitly advanced virtual clock.
///
/// Timers due at the same instant fire in scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ClockState>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of callbacks waiting to fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Whether `handle` is still waiting to fire.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.state
            .borrow()
            .timers
            .iter()
            .any(|t| t.handle == handle)
    }

    /// Time of the earliest pending callback.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow().timers.iter().map(|t| t.due).min()
    }

    /// Advance the clock by `delta`, firing everything that comes due.
    ///
    /// Returns the number of callbacks that ran.
    pub fn advance(&self, delta: Duration) -> usize {
        let target = self.now() + delta;
        self.advance_to(target)
    }

    /// Advance the clock to `target`, firing everything due at or before it.
    ///
    /// The clock never runs backwards; an earlier `target` only fires what is
    /// already overdue. Callbacks scheduled by firing callbacks run in the same
    /// call if they come due before `target`.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let target = target.max(state.now);
                let earliest = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.handle.0))
                    .map(|(i, _)| i);
                match earliest {
                    Some(i) => {
                        let timer = state.timers.swap_remove(i);
                        state.now = state.now.max(timer.due);
                        Some(timer)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            // The borrow is released before the callback runs, so callbacks may
            // schedule or cancel freely.
            match next {
                Some(timer) => {
                    (timer.callback)();
                    fired += 1;
                }
                None => return fired,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let handle = TimerHandle(state.next_id);
        let due = state.now + delay;
        state.timers.push(PendingTimer {
            handle,
            due,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.state.borrow_mut().timers.retain(|t| t.handle != handle);
    }
}
