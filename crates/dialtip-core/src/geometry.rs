//! Points, sizes and rectangles in host coordinates, plus the screen query.
//!
//! All coordinates are `f32` with the y axis pointing down, matching the
//! convention of every drawing backend the dial is hosted on.

/// A position in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate (grows downwards).
    pub y: f32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at `origin` with the given size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Centre point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `p` lies inside the rectangle (left/top inclusive, right/bottom exclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Query for the usable display area, used by the tooltip to avoid the
/// bottom screen edge.
pub trait ScreenGeometry {
    /// Usable screen bounds in the same coordinate space as
    /// [`InputEvent::screen_position`](crate::InputEvent::screen_position).
    fn usable_bounds(&self) -> Rect;
}

/// A screen of fixed dimensions.
///
/// Hosts that do not track monitor geometry (or that draw the overlay
/// inside their own window) can hand the window rectangle in here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScreen(pub Rect);

impl FixedScreen {
    /// A screen with origin `(0, 0)` and the given size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self(Rect::new(0.0, 0.0, width, height))
    }
}

impl ScreenGeometry for FixedScreen {
    fn usable_bounds(&self) -> Rect {
        self.0
    }
}
