//! The rotary parameter dial.
//!
//! A [`Dial`] maps pointer gestures to a bounded value:
//!
//! - The pointer's offset from the dial centre, doubled on both axes and
//!   summed, moves the value away from where it stood at the press: up or
//!   right increases it, down or left decreases it. The press itself already
//!   applies the offset, so pressing off-centre moves the value at once.
//! - Ctrl slows dragging down ten-fold (five-fold for the wheel); dragging
//!   with the secondary button slows it three-fold; the tertiary button
//!   leaves the value alone.
//! - The wheel steps relative to the current value and is ignored outside
//!   the dial's bounds.
//!
//! Every handled event is forwarded to the dial's [`ValueTooltip`] after the
//! value has been updated.
//!
//! ```rust
//! use std::rc::Rc;
//! use dialtip_core::{
//!     Dial, EventKind, FixedScreen, InputEvent, ManualScheduler, Point, Rect, TooltipContext,
//! };
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let ctx = TooltipContext::new(scheduler.clone(), Rc::new(FixedScreen::new(1024.0, 768.0)));
//! let mut dial = Dial::new(Rect::new(20.0, 40.0, 100.0, 100.0), Some("Cutoff"), &ctx);
//!
//! dial.handle_input(&InputEvent::new(EventKind::Press, Point::new(70.0, 90.0)));
//! dial.handle_input(&InputEvent::new(EventKind::Drag, Point::new(70.0, 65.0)));
//! assert_eq!(dial.value(), 127.0 * 50.0 / 200.0);
//! assert!(dial.tooltip().is_visible());
//! ```

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use core::f32::consts::PI;
use core::fmt;

use libm::{cosf, floorf, sinf};

use crate::config::DialSensitivity;
use crate::event::{EventKind, InputEvent, Modifiers, PointerButton};
use crate::geometry::{Point, Rect};
use crate::palette::{
    FOREGROUND, INACTIVE_LIT, INACTIVE_POINT, INACTIVE_RING, KNOB_HIGH, KNOB_LIT, KNOB_LOW,
    KNOB_POINT, KNOB_RING,
};
use crate::surface::{DrawSurface, LineCap, Stroke, TextAlign, TextStyle};
use crate::tooltip::{TooltipContext, ValueTooltip};

/// Default lower bound.
pub const DEFAULT_MINIMUM: f64 = 0.0;
/// Default upper bound.
pub const DEFAULT_MAXIMUM: f64 = 127.0;

/// Radii relative to the dial diameter.
const RING_RADIUS: f32 = 0.5;
const BODY_RADIUS: f32 = 13.0 / 35.0;
const CAP_RADIUS: f32 = 10.5 / 35.0;
const ARC_RADIUS: f32 = 15.0 / 35.0;
const HAND_LENGTH: f32 = 8.0 / 35.0;

/// Value arc starts at the lower left and sweeps 270° clockwise.
const ARC_START: f32 = 0.75 * PI;
const ARC_SWEEP: f32 = 1.5 * PI;

const LABEL_HEIGHT: f32 = 14.0;
const LABEL_SIZE: f32 = 12.0;

/// When the change callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyMode {
    /// On every value update, and once when a drag starts.
    #[default]
    Continuous,
    /// Once when the drag gesture ends.
    OnRelease,
}

/// Change notification callback; receives the dial value.
pub type ChangeCallback = Box<dyn FnMut(f64)>;

/// Rotary control for one bounded parameter.
pub struct Dial {
    bounds: Rect,
    label: Option<String>,
    minimum: f64,
    maximum: f64,
    value: f64,
    drag_anchor_value: f64,
    drag_button: PointerButton,
    dragging: bool,
    hovered: bool,
    active: bool,
    damaged: bool,
    notify_mode: NotifyMode,
    callback: Option<ChangeCallback>,
    sensitivity: DialSensitivity,
    tooltip: ValueTooltip,
}

impl fmt::Debug for Dial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dial")
            .field("bounds", &self.bounds)
            .field("label", &self.label)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("value", &self.value)
            .field("notify_mode", &self.notify_mode)
            .field("active", &self.active)
            .field("tooltip", &self.tooltip)
            .finish_non_exhaustive()
    }
}

impl Dial {
    /// Create a dial over `[0, 127]` at value 0.
    ///
    /// The label is drawn under the dial and doubles as the tooltip
    /// description.
    pub fn new(bounds: Rect, label: Option<&str>, ctx: &TooltipContext) -> Self {
        let tooltip = ValueTooltip::new(ctx);
        if let Some(label) = label {
            tooltip.set_description(label);
        }
        Self {
            bounds,
            label: label.map(ToOwned::to_owned),
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            value: DEFAULT_MINIMUM,
            drag_anchor_value: DEFAULT_MINIMUM,
            drag_button: PointerButton::Primary,
            dragging: false,
            hovered: false,
            active: true,
            damaged: true,
            notify_mode: NotifyMode::default(),
            callback: None,
            sensitivity: ctx.config.sensitivity,
            tooltip,
        }
    }

    /// Set the value range.
    ///
    /// # Panics
    ///
    /// Panics unless `min < max`.
    pub fn set_range(&mut self, min: f64, max: f64) {
        assert!(min < max, "dial range must satisfy min < max (got {min} .. {max})");
        self.minimum = min;
        self.maximum = max;
        #[cfg(feature = "tracing")]
        tracing::debug!("dial {:?}: range {min} .. {max}", self.label);
        let value = self.value;
        self.set_value(value);
        self.damaged = true;
    }

    /// Lower bound.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Clamp `value` into the range and store it. NaN is ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let value = value.clamp(self.minimum, self.maximum);
        if value != self.value {
            self.value = value;
            self.damaged = true;
        }
        self.tooltip.set_value(self.value);
        self.tooltip.set_display_mode(true);
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value mapped to `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        (self.value - self.minimum) / (self.maximum - self.minimum)
    }

    /// Choose when the change callback fires.
    pub fn set_notify_mode(&mut self, mode: NotifyMode) {
        self.notify_mode = mode;
    }

    /// Current notification policy.
    pub fn notify_mode(&self) -> NotifyMode {
        self.notify_mode
    }

    /// Register the change callback, replacing any previous one.
    pub fn set_callback(&mut self, callback: impl FnMut(f64) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Replace the tooltip's value formatter.
    pub fn set_value_format(&mut self, format: impl Fn(f64) -> String + 'static) {
        self.tooltip.set_value_format(format);
    }

    /// Replace the label (and tooltip description).
    pub fn set_label(&mut self, label: &str) {
        self.tooltip.set_description(label);
        self.label = Some(label.to_owned());
        self.damaged = true;
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Enable or disable the dial. Inactive dials paint greyed out and
    /// ignore input.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.damaged = true;
            if !active {
                self.dragging = false;
                self.tooltip.hide();
            }
        }
    }

    /// Whether the dial accepts input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the pointer is over the dial.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Move or resize the dial.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.damaged = true;
    }

    /// Dial bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the drag and wheel scaling.
    pub fn set_sensitivity(&mut self, sensitivity: DialSensitivity) {
        self.sensitivity = sensitivity;
    }

    /// The owned tooltip.
    pub fn tooltip(&self) -> &ValueTooltip {
        &self.tooltip
    }

    /// Whether the dial needs repainting, clearing the flag.
    pub fn take_damage(&mut self) -> bool {
        core::mem::take(&mut self.damaged)
    }

    /// Process one input event. Returns whether it was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.active {
            return false;
        }
        let consumed = match event.kind {
            EventKind::Press => {
                self.begin_gesture(event);
                true
            }
            EventKind::Drag => {
                self.continue_gesture(event);
                true
            }
            EventKind::Wheel { dy } => {
                if !self.bounds.contains(event.position) {
                    return false;
                }
                self.scroll(dy, event.modifiers);
                true
            }
            EventKind::Release => {
                self.dragging = false;
                if self.notify_mode == NotifyMode::OnRelease {
                    self.notify();
                }
                true
            }
            EventKind::Enter => {
                self.set_hovered(true);
                true
            }
            EventKind::Leave => {
                self.set_hovered(false);
                true
            }
            EventKind::Hide | EventKind::Unfocus => {
                self.dragging = false;
                self.set_hovered(false);
                false
            }
        };
        self.tooltip.set_value(self.value);
        self.tooltip.handle_event(event);
        consumed
    }

    fn begin_gesture(&mut self, event: &InputEvent) {
        self.drag_anchor_value = self.value;
        self.drag_button = event.button_or_primary();
        self.dragging = true;
        self.drag_to(event);
        if self.notify_mode == NotifyMode::Continuous {
            self.notify();
        }
    }

    fn continue_gesture(&mut self, event: &InputEvent) {
        if self.drag_to(event) && self.notify_mode == NotifyMode::Continuous {
            self.notify();
        }
    }

    /// Set the value from the pointer's offset to the dial centre. Returns
    /// false for the tertiary button, which leaves the value alone.
    fn drag_to(&mut self, event: &InputEvent) -> bool {
        let button = event.button.unwrap_or(self.drag_button);
        if button == PointerButton::Tertiary {
            return false;
        }
        let Rect {
            x,
            y,
            width,
            height,
        } = self.bounds;
        let dy = -((event.position.y - y) * 2.0 - height);
        let dx = (event.position.x - x) * 2.0 - width;
        let delta = f64::from(dy + dx);

        let mut sensitivity = self.sensitivity.drag;
        if event.modifiers.precision() {
            sensitivity *= self.sensitivity.precision_drag_factor;
        } else if button == PointerButton::Secondary {
            sensitivity *= self.sensitivity.secondary_button_factor;
        }

        let range = self.maximum - self.minimum;
        self.set_value(self.drag_anchor_value + delta / sensitivity * range);
        true
    }

    fn scroll(&mut self, dy: f32, modifiers: Modifiers) {
        let mut sensitivity = self.sensitivity.wheel;
        if modifiers.precision() {
            sensitivity *= self.sensitivity.precision_wheel_factor;
        }
        let range = self.maximum - self.minimum;
        self.set_value(self.value - f64::from(dy) / sensitivity * range);
        // A wheel notch is a complete gesture in either mode.
        self.notify();
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.damaged = true;
        }
    }

    fn notify(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback(self.value);
        }
    }

    /// Paint the dial face (and label) in host coordinates.
    pub fn paint(&self, surface: &mut dyn DrawSurface) {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.bounds;
        let d = width.min(height);
        let center = Point::new(x + d / 2.0, y + d / 2.0);
        let n = self.normalized() as f32;

        let (ring, lit, hand) = if self.active {
            let ring = surface.palette_color(KNOB_RING);
            let ring = if self.hovered || self.dragging {
                ring.scaled(1.25)
            } else {
                ring
            };
            (
                ring,
                surface.palette_color(KNOB_LIT),
                surface.palette_color(KNOB_POINT),
            )
        } else {
            (INACTIVE_RING, INACTIVE_LIT, INACTIVE_POINT)
        };

        let body = surface.palette_color(KNOB_HIGH);
        let cap = surface.palette_color(KNOB_LOW);
        surface.fill_circle(center, d * RING_RADIUS, ring);
        surface.fill_circle(center, d * BODY_RADIUS, body);
        surface.fill_circle(center, d * CAP_RADIUS, cap);

        let line_width = floorf(2.0 * width / 30.0).max(2.0);
        surface.arc(
            center,
            d * ARC_RADIUS,
            ARC_START,
            ARC_START + n * ARC_SWEEP,
            Stroke::new(line_width, lit),
        );

        // The hand points straight down at rest and is rotated clockwise.
        let angle = n * ARC_SWEEP + 0.25 * PI;
        let length = d * HAND_LENGTH;
        let tip = center.offset(-length * sinf(angle), length * cosf(angle));
        surface.line(
            center,
            tip,
            Stroke::new(line_width, hand).with_cap(LineCap::Round),
        );

        if let Some(label) = &self.label {
            let color = surface.palette_color(FOREGROUND);
            surface.text(
                label,
                Rect::new(x, y + height, width, LABEL_HEIGHT),
                TextStyle {
                    size: LABEL_SIZE,
                    align: TextAlign::Center,
                    wrap: false,
                    color,
                },
            );
        }
    }
}
