//! Integration tests for dialtip-core: dials, shared tooltip timing and
//! rendering driven together through one `ManualScheduler`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dialtip_core::{
    CurveLayout, Dial, DrawCommand, EventKind, FixedScreen, InputEvent, ManualScheduler,
    NotifyMode, Point, Rect, RecordingSurface, TimerState, TooltipContext, ValueTooltip,
    render_curve, response_exponent,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

struct Harness {
    scheduler: Rc<ManualScheduler>,
    ctx: TooltipContext,
}

impl Harness {
    fn new() -> Self {
        let scheduler = Rc::new(ManualScheduler::new());
        let ctx = TooltipContext::new(scheduler.clone(), Rc::new(FixedScreen::new(800.0, 600.0)));
        Self { scheduler, ctx }
    }

    fn dial(&self, x: f32) -> Dial {
        Dial::new(Rect::new(x, 100.0, 60.0, 60.0), Some("Drive"), &self.ctx)
    }
}

fn at(kind: EventKind, x: f32, y: f32) -> InputEvent {
    InputEvent::new(kind, Point::new(x, y))
}

// ---------------------------------------------------------------------------
// Shared hover timing
// ---------------------------------------------------------------------------

#[test]
fn hover_shows_after_full_delay() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.handle_input(&at(EventKind::Enter, 30.0, 130.0));
    assert!(matches!(
        dial.tooltip().timer_state(),
        TimerState::ShowPending { .. }
    ));

    h.scheduler.advance(ms(499));
    assert!(!dial.tooltip().is_visible());
    h.scheduler.advance(ms(1));
    assert!(dial.tooltip().is_visible());
    assert!(!dial.tooltip().only_value());
    assert!(dial.tooltip().take_damage());
}

#[test]
fn moving_to_a_neighbour_reshows_quickly() {
    let h = Harness::new();
    let mut first = h.dial(0.0);
    let mut second = h.dial(100.0);

    first.handle_input(&at(EventKind::Enter, 30.0, 130.0));
    h.scheduler.advance(ms(500));
    assert!(first.tooltip().is_visible());

    first.handle_input(&at(EventKind::Leave, 80.0, 130.0));
    assert!(!first.tooltip().is_visible());
    assert!(h.ctx.recent.get());

    h.scheduler.advance(ms(50));
    second.handle_input(&at(EventKind::Enter, 130.0, 130.0));
    assert_eq!(
        second.tooltip().timer_state(),
        TimerState::ShowPending { delay: ms(100) }
    );
    // Entering cancels the pending clear.
    assert!(!h.ctx.recent.is_clear_pending());

    h.scheduler.advance(ms(100));
    assert!(second.tooltip().is_visible());
}

#[test]
fn recentness_expires_after_grace() {
    let h = Harness::new();
    let mut first = h.dial(0.0);
    let mut second = h.dial(100.0);

    first.handle_input(&at(EventKind::Enter, 30.0, 130.0));
    h.scheduler.advance(ms(500));
    first.handle_input(&at(EventKind::Leave, 80.0, 130.0));

    h.scheduler.advance(ms(200));
    assert!(!h.ctx.recent.get());

    second.handle_input(&at(EventKind::Enter, 130.0, 130.0));
    assert_eq!(
        second.tooltip().timer_state(),
        TimerState::ShowPending { delay: ms(500) }
    );
}

#[test]
fn leaving_before_the_delay_never_shows() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.handle_input(&at(EventKind::Enter, 30.0, 130.0));
    h.scheduler.advance(ms(300));
    dial.handle_input(&at(EventKind::Leave, 90.0, 130.0));
    h.scheduler.advance(ms(1000));
    assert!(!dial.tooltip().is_visible());
    assert!(!h.ctx.recent.get());
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn destroying_a_dial_cancels_its_timers() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.handle_input(&at(EventKind::Enter, 30.0, 130.0));
    assert_eq!(h.scheduler.pending(), 1);
    drop(dial);
    assert_eq!(h.scheduler.pending(), 0);
    assert_eq!(h.scheduler.advance(ms(1000)), 0);
}

#[test]
fn destroying_the_clear_owner_resets_recentness() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.handle_input(&at(EventKind::Press, 30.0, 130.0));
    dial.handle_input(&at(EventKind::Release, 30.0, 130.0));
    assert!(h.ctx.recent.is_clear_pending());

    drop(dial);
    assert!(!h.ctx.recent.get());
    assert!(!h.ctx.recent.is_clear_pending());
    assert_eq!(h.scheduler.pending(), 0);
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

#[test]
fn tooltip_stays_put_while_visible() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    let press = at(EventKind::Press, 30.0, 130.0);
    dial.handle_input(&press);
    let first = dial.tooltip().rect().expect("visible after press");
    assert_eq!(first.origin(), Point::new(30.0, 150.0));

    dial.handle_input(&at(EventKind::Drag, 45.0, 90.0));
    assert_eq!(dial.tooltip().rect(), Some(first));

    // A new gesture after hiding places it afresh.
    dial.handle_input(&at(EventKind::Release, 45.0, 90.0));
    dial.handle_input(&at(EventKind::Press, 50.0, 140.0));
    assert_eq!(
        dial.tooltip().rect().map(|r| r.origin()),
        Some(Point::new(50.0, 160.0))
    );
}

#[test]
fn tooltip_flips_above_near_the_bottom_edge() {
    let h = Harness::new();
    let mut dial = Dial::new(Rect::new(0.0, 500.0, 60.0, 60.0), None, &h.ctx);
    dial.handle_input(&at(EventKind::Press, 30.0, 530.0));
    assert_eq!(
        dial.tooltip().rect().map(|r| r.y),
        Some(530.0 - 20.0 - 200.0)
    );
}

// ---------------------------------------------------------------------------
// Gestures end to end
// ---------------------------------------------------------------------------

#[test]
fn drag_to_full_scale_then_release() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    dial.set_callback(move |v| sink.borrow_mut().push(v));

    dial.handle_input(&at(EventKind::Press, 30.0, 130.0));
    assert!(dial.tooltip().is_visible());
    assert!(dial.tooltip().only_value());

    // 200 px up doubles to a 400 px delta, twice the full range.
    dial.handle_input(&at(EventKind::Drag, 30.0, -70.0));
    assert_eq!(dial.value(), 127.0);
    assert_eq!(dial.tooltip().value(), 127.0);
    assert_eq!(dial.tooltip().formatted_value(), "127.00");

    dial.handle_input(&at(EventKind::Release, 30.0, -70.0));
    assert_eq!(dial.tooltip().timer_state(), TimerState::Hidden);
    assert!(h.ctx.recent.is_clear_pending());
    assert_eq!(*seen.borrow(), [0.0, 127.0]);
}

#[test]
fn on_release_dial_reports_final_value_only() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.set_notify_mode(NotifyMode::OnRelease);
    dial.set_range(-1.0, 1.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    dial.set_callback(move |v| sink.borrow_mut().push(v));

    dial.handle_input(&at(EventKind::Press, 30.0, 130.0));
    dial.handle_input(&at(EventKind::Drag, 30.0, 120.0));
    dial.handle_input(&at(EventKind::Drag, 30.0, 105.0));
    assert!(seen.borrow().is_empty());
    dial.handle_input(&at(EventKind::Release, 30.0, 105.0));
    // 25 px up: a delta of 50 is a quarter of the sensitivity.
    assert_eq!(*seen.borrow(), [0.5]);
}

#[test]
fn wheel_outside_bounds_leaves_everything_alone() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.set_value(64.0);
    assert!(!dial.handle_input(&at(EventKind::Wheel { dy: -3.0 }, 300.0, 300.0)));
    assert_eq!(dial.value(), 64.0);
    assert_eq!(dial.tooltip().timer_state(), TimerState::Hidden);
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn wheel_inside_shows_value_only() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.set_value(64.0);
    assert!(dial.handle_input(&at(EventKind::Wheel { dy: 1.0 }, 30.0, 130.0)));
    assert!((dial.value() - (64.0 - 127.0 / 25.0)).abs() < 1e-9);
    assert!(dial.tooltip().is_visible());
    assert!(dial.tooltip().only_value());
}

#[test]
fn standalone_tooltip_follows_explicit_show_and_hide() {
    let h = Harness::new();
    let tip = ValueTooltip::new(&h.ctx);
    tip.set_pointer(Point::new(10.0, 10.0));
    tip.show(false);
    assert!(!tip.is_visible());
    h.scheduler.advance(ms(500));
    assert!(tip.is_visible());
    tip.hide();
    assert!(!tip.is_visible());
    tip.show(true);
    assert!(tip.is_visible());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn curve_segment(value: f64) -> (Point, Point) {
    let mut surface = RecordingSurface::new();
    render_curve(value, 286.0, 197.0, &mut surface);
    let (from, to, _) = surface.lines().last().expect("curve is drawn last");
    (from, to)
}

#[test]
fn sub_unit_values_draw_the_flat_identity() {
    let layout = CurveLayout::new(286.0, 197.0);
    for value in [0.0, 0.4, 0.999, -0.7] {
        assert_eq!(response_exponent(value), None);
        let (from, to) = curve_segment(value);
        assert_eq!(from.y, layout.cy);
        assert_eq!(to.y, layout.cy);
    }
}

#[test]
fn value_64_draws_a_cubic_response() {
    let layout = CurveLayout::new(286.0, 197.0);
    assert_eq!(response_exponent(64.0), Some(3.0));
    let (from, to) = curve_segment(64.0);
    assert!((from.y - (layout.cy - 10.0 * 3.0 * 50.0_f32.log10())).abs() < 1e-3);
    assert!((to.y - (layout.cy - 10.0 * 3.0 * 0.05_f32.log10())).abs() < 1e-3);
    assert_eq!(from.x, layout.x0);
    assert_eq!(to.x, layout.right());
}

#[test]
fn tooltip_paint_includes_description_only_on_hover() {
    let h = Harness::new();
    let mut dial = h.dial(0.0);
    dial.set_value(32.0);

    dial.handle_input(&at(EventKind::Enter, 30.0, 130.0));
    h.scheduler.advance(ms(500));
    let mut hover = RecordingSurface::new();
    dial.tooltip().paint(&mut hover);
    let texts: Vec<_> = hover.texts().collect();
    assert_eq!(texts[0], "Drive");
    assert_eq!(texts[1], "32.00");

    dial.handle_input(&at(EventKind::Press, 30.0, 130.0));
    let mut pressed = RecordingSurface::new();
    dial.tooltip().paint(&mut pressed);
    assert_eq!(pressed.texts().next(), Some("32.00"));
    assert!(matches!(
        pressed.commands()[0],
        DrawCommand::FillRect { .. }
    ));
}
