//! Input events delivered by the host.
//!
//! Hosts translate their native pointer/keyboard events into [`InputEvent`]s.
//! The event kind is a closed enum so that every consumer matches it
//! exhaustively.

use crate::geometry::Point;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Pointer entered the control.
    Enter,
    /// Pointer left the control.
    Leave,
    /// A pointer button went down over the control.
    Press,
    /// Pointer moved while a button is held.
    Drag,
    /// The held pointer button was released.
    Release,
    /// Scroll wheel motion.
    ///
    /// `dy` is in wheel notches, positive when scrolling down (towards the
    /// user).
    Wheel {
        /// Vertical wheel delta in notches.
        dy: f32,
    },
    /// The control (or its window) was hidden.
    Hide,
    /// The control lost keyboard focus.
    Unfocus,
}

/// Modifier keys held during the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt/Option key.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Only Ctrl held.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    /// Whether the precision (fine adjustment) modifier is active.
    pub fn precision(&self) -> bool {
        self.ctrl
    }
}

/// Pointer button, numbered the way X11 numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Button 1, usually the left button.
    #[default]
    Primary,
    /// Button 2, usually the middle button or wheel click.
    Secondary,
    /// Button 3, usually the right button.
    Tertiary,
}

/// One input event with its pointer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    /// Event kind.
    pub kind: EventKind,
    /// Pointer position in the coordinate space of the control bounds.
    pub position: Point,
    /// Pointer position in screen coordinates (used for overlay placement).
    pub screen_position: Point,
    /// Modifier keys.
    pub modifiers: Modifiers,
    /// Button involved in the event, if any.
    pub button: Option<PointerButton>,
}

impl InputEvent {
    /// An event of `kind` at `position`; the screen position equals the
    /// control position, no modifiers, no button.
    pub fn new(kind: EventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            screen_position: position,
            modifiers: Modifiers::NONE,
            button: None,
        }
    }

    /// Set the screen position.
    pub fn with_screen_position(mut self, screen_position: Point) -> Self {
        self.screen_position = screen_position;
        self
    }

    /// Set the modifier keys.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the pointer button.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Button held during the event, defaulting to [`PointerButton::Primary`].
    pub fn button_or_primary(&self) -> PointerButton {
        self.button.unwrap_or_default()
    }
}
