//! Demo application: a row of dials sharing one tooltip context.

use std::cell::Cell;
use std::rc::Rc;

use dialtip_core::{Dial, DialConfig, NotifyMode, Rect, TooltipContext};
use egui::{Context, Sense, vec2};

use crate::input::{PointerFrame, PointerTracker};
use crate::scheduler::{FrameScheduler, WindowScreen};
use crate::surface::{EguiSurface, from_egui_rect};
use crate::theme::Theme;

/// Dial diameter in points.
const DIAL_SIZE: f32 = 60.0;
/// Room under each dial for its label.
const LABEL_SPACE: f32 = 20.0;

const LABELS: [&str; 8] = [
    "Cutoff",
    "Resonance",
    "Drive",
    "Mix",
    "Attack",
    "Release",
    "Depth",
    "Rate",
];

/// Startup options for [`DialDemoApp`].
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    /// Number of dials to show.
    pub dials: usize,
    /// Notification policy for every dial.
    pub notify: NotifyMode,
    /// Timing, sensitivity and layout.
    pub config: DialConfig,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            dials: 4,
            notify: NotifyMode::Continuous,
            config: DialConfig::default(),
        }
    }
}

struct DemoDial {
    dial: Dial,
    tracker: PointerTracker,
    reported: Rc<Cell<f64>>,
}

/// Main application state.
pub struct DialDemoApp {
    theme: Theme,
    scheduler: Rc<FrameScheduler>,
    screen: Rc<WindowScreen>,
    dials: Vec<DemoDial>,
    show_dials: bool,
    dials_shown: bool,
    active: bool,
}

impl DialDemoApp {
    /// Build the demo and apply the theme to `ctx`.
    pub fn new(ctx: &Context, options: DemoOptions) -> Self {
        let theme = Theme::default();
        theme.apply(ctx);

        let scheduler = Rc::new(FrameScheduler::new());
        let screen = Rc::new(WindowScreen::new(from_egui_rect(ctx.screen_rect())));
        let tooltip_ctx =
            TooltipContext::new(scheduler.clone(), screen.clone()).with_config(options.config);

        let dials = (0..options.dials)
            .map(|i| {
                let label = LABELS[i % LABELS.len()];
                let mut dial = Dial::new(Rect::default(), Some(label), &tooltip_ctx);
                dial.set_notify_mode(options.notify);
                if i == 0 {
                    dial.set_value_format(|v| format!("{v:.0}"));
                }

                let reported = Rc::new(Cell::new(dial.value()));
                let sink = Rc::clone(&reported);
                dial.set_callback(move |value| {
                    tracing::debug!(dial = label, value, "value changed");
                    sink.set(value);
                });

                DemoDial {
                    dial,
                    tracker: PointerTracker::new(),
                    reported,
                }
            })
            .collect();

        tracing::info!(dials = options.dials, notify = ?options.notify, "demo ready");

        Self {
            theme,
            scheduler,
            screen,
            dials,
            show_dials: true,
            dials_shown: true,
            active: true,
        }
    }

    /// Number of dials.
    pub fn dial_count(&self) -> usize {
        self.dials.len()
    }

    /// Last value each dial reported through its callback.
    pub fn reported_values(&self) -> Vec<f64> {
        self.dials.iter().map(|d| d.reported.get()).collect()
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("dialtip");
            ui.separator();
            ui.checkbox(&mut self.show_dials, "Show dials");
            if ui.checkbox(&mut self.active, "Active").changed() {
                for d in &mut self.dials {
                    d.dial.set_active(self.active);
                }
            }
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for d in &self.dials {
                let label = d.dial.label().unwrap_or_default();
                ui.label(format!("{label}: {:.1}", d.reported.get()));
                ui.separator();
            }
            ui.label(format!("{} timers", self.scheduler.pending()));
        });
    }

    fn render_dials(&mut self, ui: &mut egui::Ui, pointer: &PointerFrame) {
        ui.horizontal_wrapped(|ui| {
            for d in &mut self.dials {
                let (rect, _) =
                    ui.allocate_exact_size(vec2(DIAL_SIZE, DIAL_SIZE + LABEL_SPACE), Sense::hover());
                let bounds = Rect::new(rect.min.x, rect.min.y, DIAL_SIZE, DIAL_SIZE);
                if d.dial.bounds() != bounds {
                    d.dial.set_bounds(bounds);
                }

                for event in d.tracker.events(bounds, pointer) {
                    d.dial.handle_input(&event);
                }

                let mut surface = EguiSurface::new(ui.painter(), &self.theme);
                d.dial.paint(&mut surface);
            }
        });
    }

    fn paint_tooltips(&self, ctx: &Context) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("dialtip-tooltips"),
        ));
        for d in &self.dials {
            let tooltip = d.dial.tooltip();
            if let Some(rect) = tooltip.rect() {
                let mut surface = EguiSurface::new(&painter, &self.theme).with_origin(rect.origin());
                tooltip.paint(&mut surface);
            }
        }
    }
}

impl eframe::App for DialDemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.screen.update(ctx);
        if self.scheduler.sync(ctx) {
            ctx.request_repaint();
        }
        let pointer = PointerFrame::capture(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        if self.dials_shown && !self.show_dials {
            for d in &mut self.dials {
                let event = d.tracker.hide();
                d.dial.handle_input(&event);
            }
        }
        self.dials_shown = self.show_dials;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.show_dials {
                ui.add_space(12.0);
                self.render_dials(ui, &pointer);
            }
        });

        if self.show_dials {
            self.paint_tooltips(ctx);
        }

        let mut damaged = false;
        for d in &mut self.dials {
            damaged |= d.dial.take_damage();
            damaged |= d.dial.tooltip().take_damage();
        }
        if damaged {
            ctx.request_repaint();
        }
    }
}
