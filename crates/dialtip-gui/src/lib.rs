//! Dialtip GUI - egui host for dialtip dials
//!
//! Adapts the toolkit-independent dial to egui: a [`DrawSurface`] over
//! `egui::Painter`, a frame-polled [`Scheduler`], and synthesis of
//! enter/leave/press/drag/release events from egui's per-frame pointer state.
//! The `dialtip-demo` binary shows a row of dials sharing one tooltip context.
//!
//! [`DrawSurface`]: dialtip_core::DrawSurface
//! [`Scheduler`]: dialtip_core::Scheduler

pub mod app;
pub mod input;
pub mod scheduler;
pub mod surface;
pub mod theme;

pub use app::{DemoOptions, DialDemoApp};
pub use input::{PointerFrame, PointerTracker};
pub use scheduler::{FrameScheduler, WindowScreen};
pub use surface::EguiSurface;
pub use theme::Theme;
