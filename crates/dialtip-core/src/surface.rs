//! Drawing surface abstraction.
//!
//! [`DrawSurface`] is the minimal set of primitives the dial face, the
//! tooltip panel and the curve plot need. Coordinates are local to whatever
//! the host decides (window for the dial, overlay for the tooltip); angles
//! are radians measured clockwise from the positive x axis, since y grows
//! downwards.
//!
//! [`RecordingSurface`] captures every call as a [`DrawCommand`], which is
//! how the renderers are tested and how headless hosts can replay a frame.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::geometry::{Point, Rect};
use crate::palette::{Color, PaletteIndex, default_color};

/// How the ends of a line are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Square ends flush with the end points.
    #[default]
    Butt,
    /// Half-disc ends centred on the end points.
    Round,
}

/// Line color, width and cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line width in pixels.
    pub width: f32,
    /// Line color.
    pub color: Color,
    /// End style for [`DrawSurface::line`].
    pub cap: LineCap,
}

impl Stroke {
    /// Create a stroke with butt caps.
    pub const fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::Butt,
        }
    }

    /// The same stroke with another cap.
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Horizontal placement of text inside its layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Flush with the left edge.
    Left,
    /// Centred horizontally.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
}

/// Text layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal alignment inside the box.
    pub align: TextAlign,
    /// Wrap at the box width instead of overflowing.
    pub wrap: bool,
    /// Text color.
    pub color: Color,
}

/// Host drawing surface.
pub trait DrawSurface {
    /// Straight line segment.
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    /// Filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Circular arc from `start` to `end` (radians, clockwise).
    fn arc(&mut self, center: Point, radius: f32, start: f32, end: f32, stroke: Stroke);

    /// Text laid out inside `rect`, vertically centred.
    fn text(&mut self, text: &str, rect: Rect, style: TextStyle);

    /// Resolve a palette index. Hosts with their own theme override this.
    fn palette_color(&self, index: PaletteIndex) -> Color {
        default_color(index)
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`DrawSurface::line`].
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke.
        stroke: Stroke,
    },
    /// [`DrawSurface::fill_rect`].
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`DrawSurface::stroke_rect`].
    StrokeRect {
        /// Rectangle.
        rect: Rect,
        /// Stroke.
        stroke: Stroke,
    },
    /// [`DrawSurface::fill_circle`].
    FillCircle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// [`DrawSurface::arc`].
    Arc {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f32,
        /// Start angle.
        start: f32,
        /// End angle.
        end: f32,
        /// Stroke.
        stroke: Stroke,
    },
    /// [`DrawSurface::text`].
    Text {
        /// The string.
        text: String,
        /// Layout box.
        rect: Rect,
        /// Style.
        style: TextStyle,
    },
}

/// Surface that records commands instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded lines as `(from, to, stroke)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    /// Recorded text strings in call order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn arc(&mut self, center: Point, radius: f32, start: f32, end: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }

    fn text(&mut self, text: &str, rect: Rect, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            style,
        });
    }
}
