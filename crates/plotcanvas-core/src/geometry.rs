//! Geometric primitives for canvas-local coordinates.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in a container's local space
//! - [`Size`] - Width and height extents of a canvas
//! - [`Bounds`] - An axis-aligned box with normalized minimum and maximum corners
//!
//! # Coordinate System
//!
//! Coordinates follow the TikZ convention used by the renderer:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward

use serde::Deserialize;

/// A 2D point in a container's local coordinate space.
///
/// # Examples
///
/// ```
/// # use plotcanvas_core::geometry::Point;
/// let p = Point::new(0.1, 0.2);
/// assert_eq!(p.x(), 0.1);
/// assert_eq!(p.y(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Width and height of a drawing sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }
}

/// An axis-aligned box whose minimum corner is never greater than its maximum.
///
/// Shapes are free to store their corners in any order; [`Bounds`] is the
/// normalized view for consumers that need min/max semantics.
///
/// # Examples
///
/// ```
/// # use plotcanvas_core::geometry::{Bounds, Point};
/// let bounds = Bounds::from_corners(Point::new(3.0, 1.0), Point::new(1.0, 4.0));
/// assert_eq!(bounds.min_x(), 1.0);
/// assert_eq!(bounds.max_y(), 4.0);
/// assert_eq!(bounds.width(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Builds bounds from two arbitrary opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn min_x(self) -> f64 {
        self.min_x
    }

    pub fn min_y(self) -> f64 {
        self.min_y
    }

    pub fn max_x(self) -> f64 {
        self.max_x
    }

    pub fn max_y(self) -> f64 {
        self.max_y
    }

    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the size of the box
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns true if `point` lies inside the box or on its edge
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
