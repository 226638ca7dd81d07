//! [`DrawSurface`] backed by an egui painter.

use dialtip_core::{
    Color, DrawSurface, LineCap, PaletteIndex, Point, Rect, Stroke, TextAlign, TextStyle,
};
use egui::{Align2, CornerRadius, FontId, Pos2, StrokeKind, Vec2, pos2, vec2};

use crate::theme::{Theme, to_color32};

/// Segments per full turn when flattening arcs.
const ARC_SEGMENTS_PER_TURN: f32 = 48.0;

/// Convert a core point to an egui position.
pub fn to_pos2(p: Point) -> Pos2 {
    pos2(p.x, p.y)
}

/// Convert an egui rectangle to a core rectangle.
pub fn from_egui_rect(r: egui::Rect) -> Rect {
    Rect::new(r.min.x, r.min.y, r.width(), r.height())
}

/// Convert a core rectangle to an egui rectangle.
pub fn to_egui_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(pos2(r.x, r.y), vec2(r.width, r.height))
}

fn to_stroke(s: Stroke) -> egui::Stroke {
    egui::Stroke::new(s.width, to_color32(s.color))
}

/// Paints dial and tooltip commands through an [`egui::Painter`].
///
/// Every coordinate is shifted by `origin`, so the tooltip can paint in its
/// own local space onto an overlay layer.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    theme: &'a Theme,
    origin: Vec2,
}

impl<'a> EguiSurface<'a> {
    /// Surface drawing in the painter's own coordinates.
    pub fn new(painter: &'a egui::Painter, theme: &'a Theme) -> Self {
        Self {
            painter,
            theme,
            origin: Vec2::ZERO,
        }
    }

    /// Shift all drawing by `origin`.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = vec2(origin.x, origin.y);
        self
    }

    fn pos(&self, p: Point) -> Pos2 {
        to_pos2(p) + self.origin
    }

    fn rect(&self, r: Rect) -> egui::Rect {
        to_egui_rect(r).translate(self.origin)
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let (from, to) = (self.pos(from), self.pos(to));
        self.painter.line_segment([from, to], to_stroke(stroke));
        if stroke.cap == LineCap::Round {
            let color = to_color32(stroke.color);
            self.painter.circle_filled(from, stroke.width / 2.0, color);
            self.painter.circle_filled(to, stroke.width / 2.0, color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter
            .rect_filled(self.rect(rect), CornerRadius::ZERO, to_color32(color));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.painter.rect_stroke(
            self.rect(rect),
            CornerRadius::ZERO,
            to_stroke(stroke),
            StrokeKind::Inside,
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.pos(center), radius, to_color32(color));
    }

    fn arc(&mut self, center: Point, radius: f32, start: f32, end: f32, stroke: Stroke) {
        let sweep = end - start;
        if sweep.abs() < f32::EPSILON {
            return;
        }
        draw_arc(
            self.painter,
            self.pos(center),
            radius,
            start,
            end,
            to_stroke(stroke),
        );
    }

    fn text(&mut self, text: &str, rect: Rect, style: TextStyle) {
        let font = FontId::proportional(style.size);
        let color = to_color32(style.color);
        let area = self.rect(rect);
        if !style.wrap {
            let (anchor, x) = match style.align {
                TextAlign::Left => (Align2::LEFT_CENTER, area.left()),
                TextAlign::Center => (Align2::CENTER_CENTER, area.center().x),
                TextAlign::Right => (Align2::RIGHT_CENTER, area.right()),
            };
            self.painter
                .text(pos2(x, area.center().y), anchor, text, font, color);
            return;
        }

        let galley = self
            .painter
            .layout(text.to_owned(), font, color, area.width());
        let size = galley.size();
        let x = match style.align {
            TextAlign::Left => area.left(),
            TextAlign::Center => area.center().x - size.x / 2.0,
            TextAlign::Right => area.right() - size.x,
        };
        let y = area.center().y - size.y / 2.0;
        self.painter.galley(pos2(x, y), galley, color);
    }

    fn palette_color(&self, index: PaletteIndex) -> Color {
        self.theme.palette_color(index)
    }
}

/// Draw an arc using line segments.
///
/// Angles are clockwise from +x with y pointing down.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    stroke: egui::Stroke,
) {
    let sweep = end_angle - start_angle;
    let turns = sweep.abs() / std::f32::consts::TAU;
    let segments = (turns * ARC_SEGMENTS_PER_TURN).ceil().max(2.0) as usize;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], stroke);
    }
}
