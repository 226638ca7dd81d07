//! Logarithmic response-curve plot drawn inside the value tooltip.
//!
//! The plot has a log frequency axis from 20 Hz to 20 kHz and a symmetric
//! log ratio axis centred on unity (×10 … ×10k above, 10 % … 0.01 % below).
//! The curve is a straight log-log segment standing in for the power law
//! `50^p` at the low end and `0.05^p` at the high end, where the exponent
//! `p = trunc(value) / 64 × 3` comes straight from the dial value. It is a
//! visual hint of the response, not an exact transfer function.
//!
//! # Layout
//!
//! For a panel of `W × H` the plot area is 200 × 100 with its lower-left
//! corner at `(W/2 − 93, H − 21)`:
//!
//! ```text
//! x(f) = x0 + rx · (log10 f − log10 20),   rx = 200 / (log10 20000 − log10 20)
//! y(r) = cy − ry · log10 r,                ry = 50 / log10 100000
//! ```

use libm::{expf, log10f};

use crate::geometry::{Point, Rect};
use crate::palette::{
    CENTER_LINE, PaletteIndex, TOOLTIP_CURVE, TOOLTIP_FAINT_TEXT, TOOLTIP_GRID,
    TOOLTIP_MAJOR_GRID, TOOLTIP_TEXT,
};
use crate::surface::{DrawSurface, Stroke, TextAlign, TextStyle};

/// Lowest frequency on the axis.
pub const MIN_FREQUENCY: f32 = 20.0;
/// Highest frequency on the axis.
pub const MAX_FREQUENCY: f32 = 20_000.0;

/// Outer plot box before margins are taken off.
const FRAME_WIDTH: f32 = 256.0;
const FRAME_HEIGHT: f32 = 128.0;
/// Room for the axis labels.
const MARGIN: f32 = 28.0;

/// `ln(50)`.
const LN_50: f32 = 3.912_023;
/// `ln(0.05)`.
const LN_0_05: f32 = -2.995_732_3;

/// Decade gridlines and their labels.
const MAJOR_FREQUENCIES: [(f32, &str); 4] =
    [(20.0, "20"), (100.0, "100"), (1_000.0, "1k"), (10_000.0, "10k")];

/// Ratio labels above and below the unity line, indexed by decade.
const GAIN_LABELS: [&str; 4] = ["x10", "x100", "x1k", "x10k"];
const ATTENUATION_LABELS: [&str; 4] = ["10%", "1%", "0.1%", "0.01%"];

const CURVE_WIDTH: f32 = 1.5;

/// Raise `e` to `exponent` for a fixed base given by its natural log.
#[inline]
fn power(ln_base: f32, exponent: f32) -> f32 {
    expf(ln_base * exponent)
}

/// Plot coordinates for one panel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveLayout {
    /// Left edge of the plot (the 20 Hz line).
    pub x0: f32,
    /// Bottom edge of the plot.
    pub y0: f32,
    /// Plot width.
    pub width: f32,
    /// Plot height.
    pub height: f32,
    /// Vertical position of the unity ratio line.
    pub cy: f32,
    /// Pixels per frequency decade.
    pub rx: f32,
    /// Pixels per ratio decade.
    pub ry: f32,
}

impl CurveLayout {
    /// Layout for a tooltip panel of the given size.
    pub fn new(panel_width: f32, panel_height: f32) -> Self {
        let width = FRAME_WIDTH - MARGIN * 2.0;
        let height = FRAME_HEIGHT - MARGIN;
        let x0 = panel_width / 2.0 - FRAME_WIDTH / 2.0 + MARGIN * 1.25;
        let y0 = panel_height - MARGIN * 0.75;
        let rx = width / (log10f(MAX_FREQUENCY) - log10f(MIN_FREQUENCY));
        let ry = (height / 2.0) / log10f(100_000.0);
        Self {
            x0,
            y0,
            width,
            height,
            cy: y0 - height / 2.0,
            rx,
            ry,
        }
    }

    /// Horizontal position of `freq` (Hz).
    pub fn frequency_x(&self, freq: f32) -> f32 {
        self.x0 + self.rx * (log10f(freq) - log10f(MIN_FREQUENCY))
    }

    /// Vertical position of the amplitude ratio `ratio` (1.0 = unity).
    pub fn ratio_y(&self, ratio: f32) -> f32 {
        self.cy - self.ry * log10f(ratio)
    }

    /// Top edge of the plot.
    pub fn top(&self) -> f32 {
        self.y0 - self.height
    }

    /// Right edge of the plot.
    pub fn right(&self) -> f32 {
        self.x0 + self.width
    }
}

/// Non-decade gridline frequencies: 2×…9× of each decade, up to 20 kHz.
pub fn minor_frequencies() -> impl Iterator<Item = f32> {
    [10.0_f32, 100.0, 1_000.0, 10_000.0]
        .into_iter()
        .flat_map(|decade| (2..10u8).map(move |j| decade * f32::from(j)))
        .take_while(|&f| f <= MAX_FREQUENCY)
}

/// Curve exponent for a dial value, or `None` when the value truncates to
/// zero (the flat identity response).
pub fn response_exponent(value: f64) -> Option<f32> {
    let whole = libm::trunc(value);
    if !whole.is_finite() || whole == 0.0 {
        return None;
    }
    Some((whole as f32 / 64.0) * 3.0)
}

/// End points of the response segment.
pub fn response_segment(value: f64, layout: &CurveLayout) -> (Point, Point) {
    match response_exponent(value) {
        None => (
            Point::new(layout.x0, layout.cy),
            Point::new(layout.right(), layout.cy),
        ),
        Some(p) => (
            Point::new(layout.x0, layout.cy - layout.ry * log10f(power(LN_50, p))),
            Point::new(
                layout.right(),
                layout.cy - layout.ry * log10f(power(LN_0_05, p)),
            ),
        ),
    }
}

fn label_style(surface: &dyn DrawSurface, size: f32, align: TextAlign, index: PaletteIndex) -> TextStyle {
    TextStyle {
        size,
        align,
        wrap: false,
        color: surface.palette_color(index),
    }
}

/// Draw the grid, labels and response curve for `value` into a panel of
/// `panel_width × panel_height`.
pub fn render_curve(value: f64, panel_width: f32, panel_height: f32, surface: &mut dyn DrawSurface) {
    let l = CurveLayout::new(panel_width, panel_height);
    let grid = Stroke::new(1.0, surface.palette_color(TOOLTIP_GRID));

    // Ratio lines: ×10 / 10 %, ×100 / 1 %, ...
    let faint = label_style(surface, 8.0, TextAlign::Right, TOOLTIP_FAINT_TEXT);
    for (i, (above, below)) in GAIN_LABELS.iter().zip(ATTENUATION_LABELS).enumerate() {
        let y = l.ry * (i as f32 + 1.0);
        surface.line(Point::new(l.x0, l.cy - y), Point::new(l.right(), l.cy - y), grid);
        surface.line(Point::new(l.x0, l.cy + y), Point::new(l.right(), l.cy + y), grid);
        surface.text(above, Rect::new(l.x0 - MARGIN, l.cy - y - 4.0, 24.0, 12.0), faint);
        surface.text(below, Rect::new(l.x0 - MARGIN, l.cy + y - 4.0, 24.0, 12.0), faint);
    }

    // Lighter inner frequency lines, nudged one pixel right.
    for freq in minor_frequencies() {
        let x = l.frequency_x(freq) + 1.0;
        surface.line(Point::new(x, l.y0), Point::new(x, l.top()), grid);
    }

    // Darker decade lines with their labels.
    let major = Stroke::new(1.0, surface.palette_color(TOOLTIP_MAJOR_GRID));
    let hz_label = label_style(surface, 10.0, TextAlign::Center, TOOLTIP_TEXT);
    for (freq, label) in MAJOR_FREQUENCIES {
        let x = l.frequency_x(freq);
        surface.line(Point::new(x, l.y0), Point::new(x, l.top()), major);
        surface.text(label, Rect::new(x - 20.0, l.y0 + 4.0, 40.0, 12.0), hz_label);
    }
    surface.text(
        "Hz",
        Rect::new(l.right(), l.y0 + 4.0, 20.0, 12.0),
        TextStyle {
            align: TextAlign::Left,
            ..hz_label
        },
    );

    // Unity line across the label column and the plot.
    let center = Stroke::new(1.0, surface.palette_color(CENTER_LINE));
    surface.line(Point::new(l.x0 - MARGIN, l.cy), Point::new(l.right(), l.cy), center);

    let curve = Stroke::new(CURVE_WIDTH, surface.palette_color(TOOLTIP_CURVE));
    let (from, to) = response_segment(value, &l);
    surface.line(from, to, curve);
}
