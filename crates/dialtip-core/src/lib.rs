//! Dialtip Core - rotary dial control with a timed value tooltip
//!
//! This crate holds everything about the dial that does not depend on a
//! windowing toolkit. Hosts feed it [`InputEvent`]s, drive its timers through
//! a [`Scheduler`], and hand it a [`DrawSurface`] to paint on.
//!
//! # Components
//!
//! ## Controls
//!
//! - [`Dial`] - Bounded value edited by drag and wheel gestures
//! - [`ValueTooltip`] - Floating panel showing the value, a description and
//!   a response-curve preview
//!
//! ## Timing
//!
//! - [`TooltipTimer`] - Hidden / pending / visible state machine
//! - [`RecentlyShown`] - Shared flag that shortens the hover delay right
//!   after another tooltip was dismissed
//! - [`Scheduler`] - One-shot timer service supplied by the host
//! - [`ManualScheduler`] - Deterministic clock for tests and frame loops
//!
//! ## Rendering
//!
//! - [`DrawSurface`] - Primitive drawing interface
//! - [`RecordingSurface`] - Surface that records commands
//! - [`render_curve`] - Log-log preview of `f^p` over 20 Hz .. 20 kHz
//!
//! # no_std Support
//!
//! The crate needs only `alloc`. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! dialtip-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Threading
//!
//! All state is single-threaded (`Rc`, `RefCell`). Timer callbacks run on
//! whatever thread calls into the [`Scheduler`], which must be the UI thread.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod curve;
pub mod dial;
pub mod event;
pub mod geometry;
pub mod palette;
pub mod recent;
pub mod scheduler;
pub mod surface;
pub mod timer;
pub mod tooltip;

// Re-export main types at crate root
pub use config::{DialConfig, DialSensitivity, TooltipLayout, TooltipTiming};
pub use curve::{
    CurveLayout, MAX_FREQUENCY, MIN_FREQUENCY, render_curve, response_exponent, response_segment,
};
pub use dial::{ChangeCallback, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, Dial, NotifyMode};
pub use event::{EventKind, InputEvent, Modifiers, PointerButton};
pub use geometry::{FixedScreen, Point, Rect, ScreenGeometry, Size};
pub use palette::{Color, PaletteIndex, default_color};
pub use recent::RecentlyShown;
pub use scheduler::{ManualScheduler, Scheduler, TimerCallback, TimerHandle};
pub use surface::{
    DrawCommand, DrawSurface, LineCap, RecordingSurface, Stroke, TextAlign, TextStyle,
};
pub use timer::{TimerInput, TimerState, TooltipTimer, Transition};
pub use tooltip::{TooltipContext, ValueFormatter, ValueTooltip};
