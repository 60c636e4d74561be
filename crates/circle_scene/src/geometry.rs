//! Circle primitive used by the packing engine.
use std::fmt;

use glam::DVec2;

use crate::field::BoundaryValue;

/// A placed circle with its boundary value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center in scene coordinates.
    pub center: DVec2,
    /// Radius in scene units, always > 0 for accepted circles.
    pub radius: f64,
    /// Boundary value `(r, g, b)`.
    pub boundary: BoundaryValue,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64, boundary: BoundaryValue) -> Self {
        Self {
            center,
            radius,
            boundary,
        }
    }

    /// Signed distance from `point` to the circle's edge.
    ///
    /// Negative inside, zero on the boundary, positive outside.
    #[inline]
    pub fn distance_to_boundary(&self, point: DVec2) -> f64 {
        self.center.distance(point) - self.radius
    }

    /// Clearance between the edges of two circles; negative when they overlap.
    #[inline]
    pub fn gap_to(&self, other: &Circle) -> f64 {
        other.distance_to_boundary(self.center) - self.radius
    }
}

/// Formats as the scene-file record `cx,cy,r,br,bg,bb`.
impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.center.x,
            self.center.y,
            self.radius,
            self.boundary.x,
            self.boundary.y,
            self.boundary.z
        )
    }
}
