//! Integer geometry primitives shared by components, snapping and rendering.
//!
//! Rectangles follow the usual pixel conventions: the origin is the top-left
//! corner, `x + width` is the first column outside the rectangle and
//! `y + height` the first row below it.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    pub const ZERO: IPoint = IPoint { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a floating point position (e.g. a cursor position reported by
    /// the windowing system) to the pixel containing it.
    pub fn from_kurbo(point: Point) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
        }
    }
}

impl Add for IPoint {
    type Output = IPoint;

    fn add(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for IPoint {
    type Output = IPoint;

    fn sub(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<IPoint> for Point {
    fn from(point: IPoint) -> Self {
        Point::new(point.x as f64, point.y as f64)
    }
}

/// Axis-aligned rectangle with integer position and size.
///
/// Width and height must be non-negative. This is a precondition of every
/// constructor and mutator rather than something that gets clamped: a
/// negative size is a caller bug. The position may be negative; edge
/// coordinates past the `i32` range saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IRect {
    /// Create a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(
            width >= 0 && height >= 0,
            "rectangle size must be non-negative, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> IPoint {
        IPoint::new(self.x, self.y)
    }

    /// The same rectangle moved so its top-left corner is at `origin`.
    pub fn with_origin(self, origin: IPoint) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Left, top, right and bottom edges without saturation.
    pub(crate) fn edges(&self) -> (i64, i64, i64, i64) {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        (x, y, x + i64::from(self.width), y + i64::from(self.height))
    }

    /// A rectangle with no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Point-in-rectangle test: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, point: IPoint) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check whether two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge do not intersect, and an
    /// empty rectangle never intersects anything.
    pub fn intersects(&self, other: &IRect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (x1, y1, right1, bottom1) = self.edges();
        let (x2, y2, right2, bottom2) = other.edges();
        x1 < right2 && x2 < right1 && y1 < bottom2 && y2 < bottom1
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn to_kurbo(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}

impl From<IRect> for Rect {
    fn from(rect: IRect) -> Self {
        rect.to_kurbo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = IRect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
        assert_eq!(rect.origin(), IPoint::new(10, 20));
    }

    #[test]
    fn test_negative_position_is_allowed() {
        let rect = IRect::new(-30, -40, 10, 10);
        assert_eq!(rect.right(), -20);
        assert!(rect.contains(IPoint::new(-25, -35)));
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let rect = IRect::new(i32::MAX - 10, i32::MIN, 100, 100);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MIN + 100);
        assert_eq!(IPoint::new(i32::MIN, 0) - IPoint::new(1, 0), IPoint::new(i32::MIN, 0));
        assert!(rect.intersects(&IRect::new(i32::MAX - 5, i32::MIN, 10, 10)));
        assert!(!rect.intersects(&IRect::new(i32::MIN, i32::MIN, 10, 10)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-negative")]
    fn test_negative_size_is_a_precondition_violation() {
        let _ = IRect::new(0, 0, -1, 10);
    }

    #[test]
    fn test_contains_edges() {
        let rect = IRect::new(0, 0, 100, 100);
        assert!(rect.contains(IPoint::new(0, 0)));
        assert!(rect.contains(IPoint::new(50, 50)));
        assert!(rect.contains(IPoint::new(99, 99)));
        assert!(!rect.contains(IPoint::new(100, 50)));
        assert!(!rect.contains(IPoint::new(50, 100)));
        assert!(!rect.contains(IPoint::new(-1, 50)));
    }

    #[test]
    fn test_intersects() {
        let a = IRect::new(0, 0, 100, 100);
        assert!(a.intersects(&IRect::new(50, 50, 100, 100)));
        assert!(a.intersects(&IRect::new(10, 10, 10, 10)));
        // Touching edges only
        assert!(!a.intersects(&IRect::new(100, 0, 50, 50)));
        assert!(!a.intersects(&IRect::new(0, 100, 50, 50)));
        // Empty rectangles never intersect
        assert!(!a.intersects(&IRect::new(10, 10, 0, 10)));
    }

    #[test]
    fn test_with_origin() {
        let rect = IRect::new(0, 0, 30, 40).with_origin(IPoint::new(5, -5));
        assert_eq!(rect, IRect::new(5, -5, 30, 40));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = IPoint::new(10, 20);
        let b = IPoint::new(3, 4);
        assert_eq!(a - b, IPoint::new(7, 16));
        assert_eq!(a + b, IPoint::new(13, 24));
    }

    #[test]
    fn test_from_kurbo_floors() {
        assert_eq!(IPoint::from_kurbo(Point::new(10.7, 20.2)), IPoint::new(10, 20));
        assert_eq!(IPoint::from_kurbo(Point::new(-0.5, 3.0)), IPoint::new(-1, 3));
    }

    #[test]
    fn test_to_kurbo() {
        let rect = IRect::new(10, 20, 100, 50).to_kurbo();
        assert!((rect.x0 - 10.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 20.0).abs() < f64::EPSILON);
        assert!((rect.x1 - 110.0).abs() < f64::EPSILON);
        assert!((rect.y1 - 70.0).abs() < f64::EPSILON);
    }
}
