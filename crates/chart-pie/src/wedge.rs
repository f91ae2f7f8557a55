//! Wedge geometry

use chart_core::{polar_to_screen, Point, Rect};
use serde::{Deserialize, Serialize};

/// Angular sector of the pie for one entry
///
/// Angles are in degrees on the screen convention of
/// [`chart_core::geometry`]: 0 points right, 90 points up, and increasing
/// angles turn counter-clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    /// Box of the full ellipse this wedge is cut from
    pub bounds: Rect,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl WedgeGeometry {
    pub fn new(bounds: Rect, start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            bounds,
            start_angle,
            sweep_angle,
        }
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Horizontal and vertical radius
    pub fn radii(&self) -> (f64, f64) {
        (self.bounds.width / 2.0, self.bounds.height / 2.0)
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Angle halfway between the two boundary rays
    pub fn bisector(&self) -> f64 {
        self.start_angle + self.sweep_angle / 2.0
    }

    /// Point at `angle` on the ellipse scaled by `scale` (1.0 is the rim)
    pub fn point_at(&self, angle: f64, scale: f64) -> Point {
        let (rx, ry) = self.radii();
        polar_to_screen(self.center(), rx * scale, ry * scale, angle)
    }

    /// Closed polygon approximating the filled wedge.
    ///
    /// Starts at the center, then walks the rim from the start angle to the
    /// end angle in steps of at most `max_step_degrees`.
    pub fn outline(&self, max_step_degrees: f64) -> Vec<Point> {
        let step = if max_step_degrees.is_finite() && max_step_degrees > 0.0 {
            max_step_degrees
        } else {
            1.0
        };
        let steps = (self.sweep_angle.abs() / step).ceil().max(1.0) as usize;

        let mut points = Vec::with_capacity(steps + 2);
        points.push(self.center());
        for i in 0..=steps {
            let angle = self.start_angle + self.sweep_angle * i as f64 / steps as f64;
            points.push(self.point_at(angle, 1.0));
        }
        points
    }
}
