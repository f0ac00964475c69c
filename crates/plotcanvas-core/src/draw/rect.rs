//! Axis-aligned rectangle primitive.

use std::{any::Any, fmt};

use crate::{
    draw::Drawable,
    geometry::{Bounds, Point},
};

/// A rectangle given by two opposite corners in the container's local space.
///
/// Corners are stored exactly as given; `x1` may be greater than `x2` and
/// `y1` greater than `y2`. Use [`Rect::bounds`] for a normalized view.
///
/// # Examples
///
/// ```
/// # use plotcanvas_core::draw::{Drawable, Rect};
/// let rect = Rect::new(0.6, 0.2, 0.1, 0.7).with_z_index(2);
///
/// assert_eq!(rect.x1(), 0.6);
/// assert_eq!(rect.bounds().min_x(), 0.1);
/// assert_eq!(rect.z_index(), Some(2));
/// assert_eq!(rect.to_string(), "Rect[0.6, 0.2, 0.1, 0.7]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    z_index: Option<i32>,
}

impl Rect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            z_index: None,
        }
    }

    /// Creates a rectangle from two corner points.
    pub fn from_corners(first: Point, second: Point) -> Self {
        Self::new(first.x(), first.y(), second.x(), second.y())
    }

    /// Sets the z-index (builder style).
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn set_x1(&mut self, x1: f64) {
        self.x1 = x1;
    }

    pub fn set_y1(&mut self, y1: f64) {
        self.y1 = y1;
    }

    pub fn set_x2(&mut self, x2: f64) {
        self.x2 = x2;
    }

    pub fn set_y2(&mut self, y2: f64) {
        self.y2 = y2;
    }

    /// Returns the two corners in the order they were given.
    pub fn corners(&self) -> (Point, Point) {
        (Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    /// Returns the normalized bounding box of the rectangle.
    pub fn bounds(&self) -> Bounds {
        let (first, second) = self.corners();
        Bounds::from_corners(first, second)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}

impl Drawable for Rect {
    fn z_index(&self) -> Option<i32> {
        self.z_index
    }

    fn set_z_index(&mut self, z_index: Option<i32>) {
        self.z_index = z_index;
    }

    fn kind(&self) -> &'static str {
        "rect"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_rect_new_keeps_corners() {
        let rect = Rect::new(0.1, 0.2, 0.6, 0.7);

        assert_approx_eq!(f64, rect.x1(), 0.1);
        assert_approx_eq!(f64, rect.y1(), 0.2);
        assert_approx_eq!(f64, rect.x2(), 0.6);
        assert_approx_eq!(f64, rect.y2(), 0.7);
        assert_eq!(rect.z_index(), None);
    }

    #[test]
    fn test_rect_is_not_normalized() {
        let rect = Rect::new(5.0, 4.0, 1.0, 2.0);
        let (first, second) = rect.corners();

        assert_eq!(first, Point::new(5.0, 4.0));
        assert_eq!(second, Point::new(1.0, 2.0));

        let bounds = rect.bounds();
        assert_approx_eq!(f64, bounds.min_x(), 1.0);
        assert_approx_eq!(f64, bounds.max_y(), 4.0);
    }

    #[test]
    fn test_rect_from_corners() {
        let rect = Rect::from_corners(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rect_z_index() {
        let mut rect = Rect::new(0.0, 0.0, 1.0, 1.0).with_z_index(7);
        assert_eq!(rect.z_index(), Some(7));

        rect.set_z_index(None);
        assert_eq!(rect.z_index(), None);
    }

    #[test]
    fn test_rect_display() {
        let rect = Rect::new(0.1, 0.2, 0.6, 0.7);
        assert_eq!(rect.to_string(), "Rect[0.1, 0.2, 0.6, 0.7]");
    }

    #[test]
    fn test_rect_kind() {
        assert_eq!(Rect::new(0.0, 0.0, 0.0, 0.0).kind(), "rect");
    }
}
