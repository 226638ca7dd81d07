//! Floating value tooltip with the response-curve preview.
//!
//! A [`ValueTooltip`] owns the state of one overlay window: whether it is
//! shown, where, what it displays, and whether it needs repainting. The
//! host reads [`rect`](ValueTooltip::rect) and
//! [`take_damage`](ValueTooltip::take_damage) each frame and calls
//! [`paint`](ValueTooltip::paint) with a surface whose origin is the
//! overlay's top-left corner.
//!
//! Timing is delegated to a [`TooltipTimer`]; the delayed show callback only
//! holds a weak reference, and dropping the tooltip cancels every timer it
//! scheduled.
//!
//! # Positioning
//!
//! The overlay is placed at the pointer's x, one margin below the pointer,
//! or one margin above it when it would otherwise cross the bottom of the
//! usable screen area. The position is computed once per visible session and
//! stays put while the value changes.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use crate::config::{DialConfig, TooltipLayout};
use crate::curve::render_curve;
use crate::event::{EventKind, InputEvent};
use crate::geometry::{Point, Rect, ScreenGeometry, Size};
use crate::palette::{FOREGROUND, TOOLTIP_BG};
use crate::recent::RecentlyShown;
use crate::scheduler::{Scheduler, TimerCallback};
use crate::surface::{DrawSurface, Stroke, TextAlign, TextStyle};
use crate::timer::{TimerInput, TimerState, TooltipTimer, Transition};

/// Inner padding of the panel.
const PANEL_MARGIN: f32 = 3.0;
/// Height reserved for the description line.
const DESCRIPTION_HEIGHT: f32 = 40.0;
/// Height reserved for the formatted value.
const VALUE_HEIGHT: f32 = 10.0;
/// Font size of the description and value text.
const TEXT_SIZE: f32 = 12.0;

/// Formats the value line of the tooltip.
pub type ValueFormatter = Box<dyn Fn(f64) -> String>;

fn default_format(value: f64) -> String {
    format!("{value:.2}")
}

/// Host services and settings shared by every dial of an application.
///
/// Cloning is cheap; all clones share one scheduler, one screen and one
/// [`RecentlyShown`] flag.
#[derive(Clone)]
pub struct TooltipContext {
    /// Timer service.
    pub scheduler: Rc<dyn Scheduler>,
    /// Screen bounds query.
    pub screen: Rc<dyn ScreenGeometry>,
    /// The shared recentness flag.
    pub recent: RecentlyShown,
    /// Timing, sensitivity and layout.
    pub config: DialConfig,
}

impl fmt::Debug for TooltipContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipContext")
            .field("recent", &self.recent)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TooltipContext {
    /// Context with default configuration and a fresh recentness flag.
    pub fn new(scheduler: Rc<dyn Scheduler>, screen: Rc<dyn ScreenGeometry>) -> Self {
        Self {
            scheduler,
            screen,
            recent: RecentlyShown::new(),
            config: DialConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DialConfig) -> Self {
        self.config = config;
        self
    }
}

struct TooltipState {
    timer: TooltipTimer,
    screen: Rc<dyn ScreenGeometry>,
    layout: TooltipLayout,
    current_value: f64,
    only_value: bool,
    positioned: bool,
    position: Point,
    pointer: Point,
    description: String,
    format: ValueFormatter,
    damaged: bool,
}

impl TooltipState {
    fn is_visible(&self) -> bool {
        self.timer.is_visible()
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Shown => {
                self.reposition();
                self.damaged = true;
            }
            Transition::Hidden => {
                self.positioned = false;
                self.damaged = true;
            }
            Transition::Armed(_) | Transition::None => {}
        }
    }

    fn reposition(&mut self) {
        if self.positioned {
            return;
        }
        let screen = self.screen.usable_bounds();
        let height = self.layout.size.height;
        let margin = self.layout.pointer_margin;
        let below = self.pointer.y + margin;
        let y = if below + height > screen.bottom() {
            self.pointer.y - margin - height
        } else {
            below
        };
        self.position = Point::new(self.pointer.x, y);
        self.positioned = true;
    }
}

fn delayed_show(state: Weak<RefCell<TooltipState>>) -> TimerCallback {
    Box::new(move || {
        if let Some(state) = state.upgrade() {
            let mut state = state.borrow_mut();
            let transition = state.timer.elapsed();
            state.apply(transition);
        }
    })
}

/// The dial's floating value preview.
pub struct ValueTooltip {
    state: Rc<RefCell<TooltipState>>,
}

impl fmt::Debug for ValueTooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ValueTooltip")
            .field("timer", &state.timer)
            .field("current_value", &state.current_value)
            .field("only_value", &state.only_value)
            .field("positioned", &state.positioned)
            .field("position", &state.position)
            .finish_non_exhaustive()
    }
}

impl ValueTooltip {
    /// Create a hidden tooltip.
    pub fn new(ctx: &TooltipContext) -> Self {
        let timer = TooltipTimer::new(
            Rc::clone(&ctx.scheduler),
            ctx.recent.clone(),
            ctx.config.timing,
        );
        let state = TooltipState {
            timer,
            screen: Rc::clone(&ctx.screen),
            layout: ctx.config.layout,
            current_value: 0.0,
            only_value: false,
            positioned: false,
            position: Point::default(),
            pointer: Point::default(),
            description: String::new(),
            format: Box::new(default_format),
            damaged: false,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Show now (`immediate`) or after the hover delay.
    pub fn show(&self, immediate: bool) {
        let weak = Rc::downgrade(&self.state);
        let mut state = self.state.borrow_mut();
        let transition = if immediate {
            state.timer.show_now()
        } else {
            state.timer.handle(TimerInput::Enter, move || delayed_show(weak))
        };
        state.apply(transition);
    }

    /// Hide and start the recentness grace interval.
    pub fn hide(&self) {
        let mut state = self.state.borrow_mut();
        let transition = state.timer.dismiss();
        state.apply(transition);
    }

    /// Feed an input event that the owning control has already handled.
    pub fn handle_event(&self, event: &InputEvent) {
        let weak = Rc::downgrade(&self.state);
        let mut state = self.state.borrow_mut();
        state.pointer = event.screen_position;
        match event.kind {
            EventKind::Enter => set_mode(&mut state, false),
            EventKind::Press | EventKind::Drag | EventKind::Wheel { .. } => {
                set_mode(&mut state, true);
            }
            EventKind::Leave | EventKind::Release | EventKind::Hide | EventKind::Unfocus => {}
        }
        let input = TimerInput::from_event(&event.kind);
        let transition = state.timer.handle(input, move || delayed_show(weak));
        state.apply(transition);
    }

    /// Update the displayed value; repaints if visible, never repositions.
    pub fn set_value(&self, value: f64) {
        let mut state = self.state.borrow_mut();
        if state.current_value != value {
            state.current_value = value;
            if state.is_visible() {
                state.damaged = true;
            }
        }
    }

    /// Show only the value and graph (`true`) or also the description.
    pub fn set_display_mode(&self, only_value: bool) {
        set_mode(&mut self.state.borrow_mut(), only_value);
    }

    /// Text shown above the value unless in value-only mode.
    pub fn set_description(&self, description: &str) {
        let mut state = self.state.borrow_mut();
        description.clone_into(&mut state.description);
        if state.is_visible() {
            state.damaged = true;
        }
    }

    /// Replace the value formatter (default: two decimals).
    pub fn set_value_format(&self, format: impl Fn(f64) -> String + 'static) {
        let mut state = self.state.borrow_mut();
        state.format = Box::new(format);
        if state.is_visible() {
            state.damaged = true;
        }
    }

    /// Update the pointer position used for the next placement.
    pub fn set_pointer(&self, screen_position: Point) {
        self.state.borrow_mut().pointer = screen_position;
    }

    /// Displayed value.
    pub fn value(&self) -> f64 {
        self.state.borrow().current_value
    }

    /// Whether the description is suppressed.
    pub fn only_value(&self) -> bool {
        self.state.borrow().only_value
    }

    /// Description text.
    pub fn description(&self) -> String {
        self.state.borrow().description.clone()
    }

    /// The value line as it would be painted.
    pub fn formatted_value(&self) -> String {
        let state = self.state.borrow();
        (state.format)(state.current_value)
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }

    /// Whether the position is fixed for the current session.
    pub fn is_positioned(&self) -> bool {
        self.state.borrow().positioned
    }

    /// Timing state.
    pub fn timer_state(&self) -> TimerState {
        self.state.borrow().timer.state()
    }

    /// Overlay size.
    pub fn size(&self) -> Size {
        self.state.borrow().layout.size
    }

    /// Overlay rectangle in screen coordinates while visible.
    pub fn rect(&self) -> Option<Rect> {
        let state = self.state.borrow();
        state
            .is_visible()
            .then(|| Rect::from_origin_size(state.position, state.layout.size))
    }

    /// Whether the overlay changed since the last call, clearing the flag.
    pub fn take_damage(&self) -> bool {
        core::mem::take(&mut self.state.borrow_mut().damaged)
    }

    /// Paint the panel in overlay-local coordinates.
    pub fn paint(&self, surface: &mut dyn DrawSurface) {
        let state = self.state.borrow();
        let Size { width, height } = state.layout.size;
        let panel = Rect::new(0.0, 0.0, width, height);
        let ink = surface.palette_color(FOREGROUND);
        let background = surface.palette_color(TOOLTIP_BG);
        surface.fill_rect(panel, background);
        surface.stroke_rect(panel, Stroke::new(1.0, ink));

        let text_width = width - PANEL_MARGIN * 2.0;
        let mut style = TextStyle {
            size: TEXT_SIZE,
            align: TextAlign::Center,
            wrap: false,
            color: ink,
        };
        let mut y = PANEL_MARGIN;
        if !state.only_value {
            surface.text(
                &state.description,
                Rect::new(PANEL_MARGIN, y, text_width, DESCRIPTION_HEIGHT),
                style,
            );
            y += DESCRIPTION_HEIGHT;
        }

        style.wrap = true;
        let value_text = (state.format)(state.current_value);
        surface.text(
            &value_text,
            Rect::new(PANEL_MARGIN, y, text_width, VALUE_HEIGHT),
            style,
        );

        render_curve(state.current_value, width, height - PANEL_MARGIN, surface);
    }
}

fn set_mode(state: &mut TooltipState, only_value: bool) {
    if state.only_value != only_value {
        state.only_value = only_value;
        if state.is_visible() {
            state.damaged = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FixedScreen;
    use crate::scheduler::ManualScheduler;
    use crate::surface::RecordingSurface;
    use core::time::Duration;

    fn ctx() -> (Rc<ManualScheduler>, TooltipContext) {
        let sched = Rc::new(ManualScheduler::new());
        let ctx = TooltipContext::new(sched.clone(), Rc::new(FixedScreen::new(800.0, 600.0)));
        (sched, ctx)
    }

    fn at(kind: EventKind, x: f32, y: f32) -> InputEvent {
        InputEvent::new(kind, Point::new(x, y))
    }

    #[test]
    fn immediate_show_places_below_pointer() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.set_pointer(Point::new(100.0, 100.0));
        tip.show(true);
        assert!(tip.is_visible());
        assert!(tip.is_positioned());
        assert_eq!(tip.rect(), Some(Rect::new(100.0, 120.0, 286.0, 200.0)));
        assert!(tip.take_damage());
        assert!(!tip.take_damage());
    }

    #[test]
    fn flips_above_pointer_near_bottom_edge() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.set_pointer(Point::new(50.0, 500.0));
        tip.show(true);
        assert_eq!(tip.rect().map(|r| r.y), Some(500.0 - 20.0 - 200.0));
    }

    #[test]
    fn delayed_show_fires_through_scheduler() {
        let (sched, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.handle_event(&at(EventKind::Enter, 10.0, 10.0));
        assert_eq!(
            tip.timer_state(),
            TimerState::ShowPending {
                delay: ctx.config.timing.hover_delay
            }
        );
        assert!(!tip.only_value());
        sched.advance(ctx.config.timing.hover_delay - Duration::from_millis(1));
        assert!(!tip.is_visible());
        sched.advance(Duration::from_millis(1));
        assert!(tip.is_visible());
        assert_eq!(tip.rect().map(|r| r.origin()), Some(Point::new(10.0, 30.0)));
    }

    #[test]
    fn manipulation_switches_to_value_only() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.handle_event(&at(EventKind::Enter, 0.0, 0.0));
        tip.handle_event(&at(EventKind::Press, 0.0, 0.0));
        assert!(tip.only_value());
        assert!(tip.is_visible());
    }

    #[test]
    fn hide_clears_positioned() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.show(true);
        tip.hide();
        assert!(!tip.is_visible());
        assert!(!tip.is_positioned());
        assert_eq!(tip.rect(), None);
    }

    #[test]
    fn set_value_repaints_only_when_visible() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.set_value(5.0);
        assert!(!tip.take_damage());
        tip.show(true);
        tip.take_damage();
        tip.set_value(6.0);
        assert!(tip.take_damage());
        tip.set_value(6.0);
        assert!(!tip.take_damage());
    }

    #[test]
    fn paint_respects_display_mode() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.set_description("Cutoff");
        tip.set_value_format(|v| format!("{v:.0} Hz"));
        tip.set_value(64.0);

        let mut s = RecordingSurface::new();
        tip.paint(&mut s);
        let texts: alloc::vec::Vec<&str> = s.texts().collect();
        assert_eq!(&texts[..2], ["Cutoff", "64 Hz"]);

        tip.set_display_mode(true);
        s.clear();
        tip.paint(&mut s);
        assert_eq!(s.texts().next(), Some("64 Hz"));
        assert!(!s.texts().any(|t| t == "Cutoff"));
    }

    #[test]
    fn panel_border_uses_the_foreground_color() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        let mut s = RecordingSurface::new();
        tip.paint(&mut s);
        let border = s.commands().iter().find_map(|c| match c {
            crate::surface::DrawCommand::StrokeRect { rect, stroke } => Some((*rect, *stroke)),
            _ => None,
        });
        let (rect, stroke) = border.expect("panel border");
        assert_eq!(rect, Rect::new(0.0, 0.0, 286.0, 200.0));
        assert_eq!(stroke.width, 1.0);
        assert_eq!(stroke.color, crate::palette::default_color(FOREGROUND));
    }

    #[test]
    fn dropping_cancels_pending_show() {
        let (sched, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.show(false);
        assert_eq!(sched.pending(), 1);
        drop(tip);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn description_and_formatted_value_accessors() {
        let (_, ctx) = ctx();
        let tip = ValueTooltip::new(&ctx);
        tip.set_description("Resonance");
        tip.set_value(1.234);
        assert_eq!(tip.description(), "Resonance");
        assert_eq!(tip.formatted_value(), "1.23");
    }
}
