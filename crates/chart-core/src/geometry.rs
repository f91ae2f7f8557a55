//! 2-D geometry primitives in screen space
//!
//! Screen space has its origin at the top-left corner with y growing
//! downward. Angles are in degrees, measured counter-clockwise from the
//! positive x axis as seen on screen, which means the y component of a
//! polar offset is *subtracted*. [`polar_to_screen`] is the only place
//! that convention is encoded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Rectangle of the given size sharing this rectangle's center
    pub fn centered(&self, width: f64, height: f64) -> Rect {
        let c = self.center();
        Rect::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
    }

    /// Smaller of width and height
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(x={:.3}, y={:.3}, w={:.3}, h={:.3})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Project a point from `center` along `degrees` by independent x/y radii.
///
/// `x = cx + cos(a) * rx`, `y = cy - sin(a) * ry`. The subtraction keeps
/// increasing angles turning counter-clockwise on a y-down surface.
#[inline]
pub fn polar_to_screen(center: Point, rx: f64, ry: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radians.cos() * rx,
        center.y - radians.sin() * ry,
    )
}
