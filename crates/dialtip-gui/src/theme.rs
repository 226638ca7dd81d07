//! Visual styling for the dial demo.

use dialtip_core::palette::{
    CENTER_LINE, FOREGROUND, KNOB_HIGH, KNOB_LIT, KNOB_LOW, KNOB_POINT, KNOB_RING, TOOLTIP_BG,
    TOOLTIP_CURVE, TOOLTIP_FAINT_TEXT, TOOLTIP_GRID, TOOLTIP_MAJOR_GRID, TOOLTIP_TEXT,
};
use dialtip_core::{Color, PaletteIndex, default_color};
use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the demo and the dial palette.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Panel/card background color.
    pub panel_bg: Color32,
    /// Primary accent color for active elements.
    pub accent: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Outer ring of a dial.
    pub knob_ring: Color32,
    /// Dial body.
    pub knob_body: Color32,
    /// Dial centre cap.
    pub knob_cap: Color32,
    /// Tooltip panel background.
    pub tooltip_bg: Color32,
    /// Minor gridlines in the curve preview.
    pub grid_minor: Color32,
    /// Decade gridlines in the curve preview.
    pub grid_major: Color32,
    /// Response curve.
    pub curve: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(25, 25, 30),
            panel_bg: Color32::from_rgb(35, 35, 42),
            accent: Color32::from_rgb(100, 180, 255),
            text_primary: Color32::from_rgb(230, 230, 235),
            text_secondary: Color32::from_rgb(150, 150, 160),
            knob_ring: Color32::from_rgb(50, 50, 60),
            knob_body: Color32::from_rgb(65, 65, 78),
            knob_cap: Color32::from_rgb(55, 55, 68),
            tooltip_bg: Color32::from_rgb(30, 30, 36),
            grid_minor: Color32::from_rgb(48, 48, 58),
            grid_major: Color32::from_rgb(80, 80, 92),
            curve: Color32::from_rgb(220, 60, 60),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.panel_bg;
        visuals.panel_fill = self.panel_bg;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.panel_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);

        visuals.widgets.inactive.bg_fill = Color32::from_rgb(45, 45, 55);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 55, 68);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);

        ctx.set_style(style);
    }

    /// Dial palette entry for `index`; indices the theme does not cover use
    /// the stock palette.
    pub fn palette_color(&self, index: PaletteIndex) -> Color {
        let color = match index {
            KNOB_RING => self.knob_ring,
            KNOB_HIGH => self.knob_body,
            KNOB_LOW => self.knob_cap,
            KNOB_LIT => self.accent,
            KNOB_POINT | FOREGROUND => self.text_primary,
            TOOLTIP_BG => self.tooltip_bg,
            TOOLTIP_TEXT | CENTER_LINE => self.text_secondary,
            TOOLTIP_GRID => self.grid_minor,
            TOOLTIP_FAINT_TEXT | TOOLTIP_MAJOR_GRID => self.grid_major,
            TOOLTIP_CURVE => self.curve,
            _ => return default_color(index),
        };
        from_color32(color)
    }
}

/// Convert an egui color to a palette color.
pub fn from_color32(c: Color32) -> Color {
    Color {
        r: c.r(),
        g: c.g(),
        b: c.b(),
        a: c.a(),
    }
}

/// Convert a palette color to an egui color.
pub fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_overrides_knob_colors() {
        let theme = Theme::default();
        assert_eq!(theme.palette_color(KNOB_LIT), Color::rgb(100, 180, 255));
        assert_eq!(theme.palette_color(PaletteIndex(3)), default_color(PaletteIndex(3)));
    }

    #[test]
    fn opaque_colors_convert_both_ways() {
        let c = Color::rgb(12, 34, 56);
        assert_eq!(from_color32(to_color32(c)), c);
    }
}
