//! Geometry value types shared by every resolver.
//!
//! All coordinates are `f64` and are carried exactly as computed: no rounding,
//! no snapping. Derived quantities (`mid_x`, `max_x`, ...) are recomputed on
//! every access so a rect can never drift out of sync with itself.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D extent. Zero extents are valid; a zero-sized rect still has
/// well-defined edges and midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle as origin plus size, expressed in the owning view's parent
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a zero-sized rect at the origin
    pub fn zero() -> Self {
        Self::default()
    }

    /// Rect spanning the given extents. `max` below `min` collapses to a
    /// zero extent rather than a negative one.
    pub fn from_extents(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(
            min_x,
            min_y,
            (max_x - min_x).max(0.0),
            (max_y - min_y).max(0.0),
        )
    }

    /// Left edge x-coordinate
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Horizontal center x-coordinate
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Right edge x-coordinate
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Top edge y-coordinate
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Vertical center y-coordinate
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Bottom edge y-coordinate
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Center point of the rect
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The four corners in top-left, top-right, bottom-left, bottom-right order.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.min_x(), self.max_y()),
            Point::new(self.max_x(), self.max_y()),
        ]
    }
}
