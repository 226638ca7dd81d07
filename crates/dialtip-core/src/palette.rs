//! Colors and palette indices.
//!
//! Drawing code refers to colors by [`PaletteIndex`] so that the host can
//! re-theme the dial without touching the renderers. [`default_color`]
//! supplies the stock palette.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque grey.
    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Scale the RGB components by `factor`, leaving alpha untouched.
    pub fn scaled(self, factor: f32) -> Self {
        let s = |c: u8| (f32::from(c) * factor).clamp(0.0, 255.0) as u8;
        Self {
            r: s(self.r),
            g: s(self.g),
            b: s(self.b),
            a: self.a,
        }
    }
}

/// Index into the host palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteIndex(pub u8);

/// Minor gridlines of the curve plot.
pub const TOOLTIP_GRID: PaletteIndex = PaletteIndex(146);
/// Ratio axis labels.
pub const TOOLTIP_FAINT_TEXT: PaletteIndex = PaletteIndex(67);
/// Frequency axis labels.
pub const TOOLTIP_TEXT: PaletteIndex = PaletteIndex(66);
/// Response curve.
pub const TOOLTIP_CURVE: PaletteIndex = PaletteIndex(177);
/// Decade gridlines.
pub const TOOLTIP_MAJOR_GRID: PaletteIndex = PaletteIndex(105);
/// Unity ratio line.
pub const CENTER_LINE: PaletteIndex = PaletteIndex(38);
/// Tooltip panel background.
pub const TOOLTIP_BG: PaletteIndex = PaletteIndex(215);
/// Panel borders, tooltip text and dial labels.
pub const FOREGROUND: PaletteIndex = PaletteIndex(56);
/// Outer ring of the dial.
pub const KNOB_RING: PaletteIndex = PaletteIndex(144);
/// Dark shade of the dial body.
pub const KNOB_LOW: PaletteIndex = PaletteIndex(244);
/// Light shade of the dial body.
pub const KNOB_HIGH: PaletteIndex = PaletteIndex(207);
/// Lit value arc.
pub const KNOB_LIT: PaletteIndex = PaletteIndex(199);
/// Dial hand.
pub const KNOB_POINT: PaletteIndex = PaletteIndex(145);

/// Ring color of an inactive dial.
pub const INACTIVE_RING: Color = Color::grey(102);
/// Value arc color of an inactive dial.
pub const INACTIVE_LIT: Color = Color::rgb(153, 178, 204);
/// Hand color of an inactive dial.
pub const INACTIVE_POINT: Color = Color::grey(111);

/// Stock color for a palette index.
///
/// Unknown indices map to mid grey.
pub fn default_color(index: PaletteIndex) -> Color {
    match index {
        TOOLTIP_GRID => Color::rgb(210, 210, 215),
        TOOLTIP_FAINT_TEXT => Color::rgb(120, 120, 130),
        TOOLTIP_TEXT => Color::rgb(60, 60, 70),
        TOOLTIP_CURVE => Color::rgb(255, 0, 0),
        TOOLTIP_MAJOR_GRID => Color::rgb(150, 150, 160),
        CENTER_LINE => Color::rgb(85, 85, 85),
        TOOLTIP_BG => Color::rgb(255, 255, 204),
        FOREGROUND => Color::rgb(0, 0, 0),
        KNOB_RING => Color::grey(51),
        KNOB_LOW => Color::rgb(186, 198, 211),
        KNOB_HIGH => Color::rgb(231, 235, 239),
        KNOB_LIT => Color::rgb(0, 197, 255),
        KNOB_POINT => Color::grey(61),
        _ => Color::grey(128),
    }
}
