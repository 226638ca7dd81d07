//! Translate egui pointer state into dial events.
//!
//! egui is immediate mode: instead of delivering events to widgets it exposes
//! the pointer state of the current frame. [`PointerFrame`] captures the part
//! a dial needs, and a per-dial [`PointerTracker`] turns successive frames
//! into the enter/leave/press/drag/release stream a retained-mode toolkit
//! would deliver.
//!
//! Buttons follow the dial's three-button model: egui's middle button is the
//! dial's secondary button and egui's secondary (right) button the tertiary.

use dialtip_core::{EventKind, InputEvent, Modifiers, Point, PointerButton, Rect};

/// Scroll distance, in points, that counts as one wheel notch.
pub const POINTS_PER_NOTCH: f32 = 50.0;

const BUTTONS: [(egui::PointerButton, PointerButton); 3] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Middle, PointerButton::Secondary),
    (egui::PointerButton::Secondary, PointerButton::Tertiary),
];

/// Pointer state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerFrame {
    /// Pointer position in window coordinates, if known.
    pub position: Option<Point>,
    /// Button that went down this frame.
    pub pressed: Option<PointerButton>,
    /// Button that went up this frame.
    pub released: Option<PointerButton>,
    /// Scroll in wheel notches; negative is away from the user.
    pub wheel: f32,
    /// Keyboard modifiers.
    pub modifiers: Modifiers,
    /// Whether the window has keyboard focus.
    pub focused: bool,
}

impl PointerFrame {
    /// Read the current frame's input.
    pub fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| {
            let pressed = BUTTONS
                .iter()
                .find(|(egui_button, _)| i.pointer.button_pressed(*egui_button))
                .map(|&(_, button)| button);
            let released = BUTTONS
                .iter()
                .find(|(egui_button, _)| i.pointer.button_released(*egui_button))
                .map(|&(_, button)| button);
            Self {
                position: i.pointer.latest_pos().map(|p| Point::new(p.x, p.y)),
                pressed,
                released,
                wheel: -i.raw_scroll_delta.y / POINTS_PER_NOTCH,
                modifiers: Modifiers {
                    ctrl: i.modifiers.ctrl || i.modifiers.command,
                    shift: i.modifiers.shift,
                    alt: i.modifiers.alt,
                },
                focused: i.focused,
            }
        })
    }
}

/// Per-dial event synthesis.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    inside: bool,
    gesture: Option<PointerButton>,
    last_position: Option<Point>,
    focused: bool,
}

impl PointerTracker {
    /// Tracker for a dial the pointer is not over.
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    /// Whether a press on the dial is still held.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Events for a dial occupying `bounds` this frame, in delivery order.
    ///
    /// While a button is held the dial keeps the pointer: leaving its bounds
    /// is reported only after the release.
    pub fn events(&mut self, bounds: Rect, frame: &PointerFrame) -> Vec<InputEvent> {
        let mut out = Vec::new();
        let position = frame.position.or(self.last_position);
        let event = |kind: EventKind, at: Point| {
            InputEvent::new(kind, at).with_modifiers(frame.modifiers)
        };

        if self.focused && !frame.focused {
            self.focused = false;
            self.gesture = None;
            out.push(event(EventKind::Unfocus, position.unwrap_or_default()));
        } else if frame.focused {
            self.focused = true;
        }

        let Some(at) = position else {
            return out;
        };
        let inside = frame.position.is_some_and(|p| bounds.contains(p));

        // Hover changes outside of a gesture.
        if self.gesture.is_none() {
            if inside && !self.inside {
                out.push(event(EventKind::Enter, at));
            } else if !inside && self.inside {
                out.push(event(EventKind::Leave, at));
            }
            self.inside = inside;
        }

        if let Some(button) = self.gesture {
            if self.last_position != Some(at) {
                out.push(event(EventKind::Drag, at).with_button(button));
            }
            if frame.released == Some(button) {
                out.push(event(EventKind::Release, at).with_button(button));
                self.gesture = None;
                if !inside && self.inside {
                    out.push(event(EventKind::Leave, at));
                }
                self.inside = inside;
            }
        } else if let Some(button) = frame.pressed
            && inside
        {
            out.push(event(EventKind::Press, at).with_button(button));
            self.gesture = Some(button);
        }

        if frame.wheel != 0.0 && frame.position.is_some() {
            out.push(event(EventKind::Wheel { dy: frame.wheel }, at));
        }

        self.last_position = Some(at);
        out
    }

    /// Event for a dial that stops being shown.
    pub fn hide(&mut self) -> InputEvent {
        let at = self.last_position.unwrap_or_default();
        self.inside = false;
        self.gesture = None;
        InputEvent::new(EventKind::Hide, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(10.0, 10.0, 50.0, 50.0);

    fn at(x: f32, y: f32) -> PointerFrame {
        PointerFrame {
            position: Some(Point::new(x, y)),
            focused: true,
            ..PointerFrame::default()
        }
    }

    fn kinds(events: &[InputEvent]) -> Vec<EventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn hover_in_and_out() {
        let mut t = PointerTracker::new();
        assert!(t.events(BOUNDS, &at(0.0, 0.0)).is_empty());
        assert_eq!(kinds(&t.events(BOUNDS, &at(20.0, 20.0))), [EventKind::Enter]);
        assert!(t.events(BOUNDS, &at(21.0, 20.0)).is_empty());
        assert_eq!(kinds(&t.events(BOUNDS, &at(80.0, 20.0))), [EventKind::Leave]);
    }

    #[test]
    fn press_drag_release_keeps_the_pointer() {
        let mut t = PointerTracker::new();
        t.events(BOUNDS, &at(20.0, 20.0));

        let press = PointerFrame {
            pressed: Some(PointerButton::Secondary),
            ..at(20.0, 20.0)
        };
        let events = t.events(BOUNDS, &press);
        assert_eq!(kinds(&events), [EventKind::Press]);
        assert_eq!(events[0].button, Some(PointerButton::Secondary));

        // Dragging out of bounds is still a drag, not a leave.
        let events = t.events(BOUNDS, &at(20.0, -40.0));
        assert_eq!(kinds(&events), [EventKind::Drag]);
        assert!(t.is_dragging());

        let release = PointerFrame {
            released: Some(PointerButton::Secondary),
            ..at(20.0, -40.0)
        };
        assert_eq!(
            kinds(&t.events(BOUNDS, &release)),
            [EventKind::Release, EventKind::Leave]
        );
        assert!(!t.is_dragging());
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut t = PointerTracker::new();
        let press = PointerFrame {
            pressed: Some(PointerButton::Primary),
            ..at(0.0, 0.0)
        };
        assert!(t.events(BOUNDS, &press).is_empty());
        assert!(!t.is_dragging());
    }

    #[test]
    fn wheel_is_forwarded_with_modifiers() {
        let mut t = PointerTracker::new();
        t.events(BOUNDS, &at(20.0, 20.0));
        let scroll = PointerFrame {
            wheel: -1.0,
            modifiers: Modifiers::CTRL,
            ..at(20.0, 20.0)
        };
        let events = t.events(BOUNDS, &scroll);
        assert_eq!(kinds(&events), [EventKind::Wheel { dy: -1.0 }]);
        assert!(events[0].modifiers.precision());
    }

    #[test]
    fn losing_focus_ends_the_gesture() {
        let mut t = PointerTracker::new();
        t.events(BOUNDS, &at(20.0, 20.0));
        let press = PointerFrame {
            pressed: Some(PointerButton::Primary),
            ..at(20.0, 20.0)
        };
        t.events(BOUNDS, &press);
        let blur = PointerFrame {
            focused: false,
            ..at(20.0, 20.0)
        };
        assert_eq!(kinds(&t.events(BOUNDS, &blur)), [EventKind::Unfocus]);
        assert!(!t.is_dragging());
    }

    #[test]
    fn hide_resets_hover() {
        let mut t = PointerTracker::new();
        t.events(BOUNDS, &at(20.0, 20.0));
        assert_eq!(t.hide().kind, EventKind::Hide);
        assert_eq!(kinds(&t.events(BOUNDS, &at(20.0, 20.0))), [EventKind::Enter]);
    }
}
