//! Layout geometry for the bar and its icon slots.
//!
//! Everything here is pure arithmetic over screen coordinates (y-down,
//! origin at the top-left of the screen).

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point offset by the given deltas.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size centered on a point.
    #[must_use]
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns this rectangle translated by the given deltas.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Returns this rectangle scaled about its own center.
    #[must_use]
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        let center = self.center();
        Self::centered_at(center, self.width * factor, self.height * factor)
    }
}

/// Resolved layout inputs for the bar.
///
/// Derived once from configuration plus the screen size; every frame's
/// geometry falls out of these numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetrics {
    /// Number of icon slots.
    pub icon_count: usize,
    /// Side length of a (square) icon slot.
    pub icon_size: f32,
    /// Padding between the bar edge and the icon row.
    pub padding: f32,
    /// Horizontal gap between adjacent slots.
    pub spacing: f32,
    /// Screen width in logical pixels.
    pub screen_width: f32,
    /// Screen height in logical pixels.
    pub screen_height: f32,
}

impl BarMetrics {
    /// Gap between the bar's bottom edge and the screen's bottom edge.
    pub const BOTTOM_MARGIN: f32 = 16.0;

    /// Creates metrics for the given slot count and screen size.
    #[must_use]
    pub const fn new(
        icon_count: usize,
        icon_size: f32,
        padding: f32,
        spacing: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        Self {
            icon_count,
            icon_size,
            padding,
            spacing,
            screen_width,
            screen_height,
        }
    }

    /// Total bar width: `n*s + 2p + (n-1)*g`.
    #[must_use]
    pub fn bar_width(&self) -> f32 {
        let n = self.icon_count as f32;
        n * self.icon_size + 2.0 * self.padding + (n - 1.0) * self.spacing
    }

    /// Total bar height: `s + 2p`.
    #[must_use]
    pub fn bar_height(&self) -> f32 {
        self.icon_size + 2.0 * self.padding
    }

    /// The bar's bounding rectangle: centered horizontally, anchored
    /// [`Self::BOTTOM_MARGIN`] above the bottom of the screen.
    #[must_use]
    pub fn bar_frame(&self) -> Rect {
        let width = self.bar_width();
        let height = self.bar_height();
        let x = (self.screen_width - width) / 2.0;
        let y = self.screen_height - height - Self::BOTTOM_MARGIN;
        Rect::new(x, y, width, height)
    }

    /// Slot rectangle for icon `index`, in screen coordinates.
    ///
    /// Horizontal offset from the bar's left edge is `p + i*s + i*g`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Rect {
        let frame = self.bar_frame();
        let i = index as f32;
        Rect::new(
            frame.x + self.padding + i * self.icon_size + i * self.spacing,
            frame.y + self.padding,
            self.icon_size,
            self.icon_size,
        )
    }

    /// Index of the middle icon: `n / 2` (rounded down).
    #[must_use]
    pub fn middle_index(&self) -> usize {
        self.icon_count / 2
    }
}
