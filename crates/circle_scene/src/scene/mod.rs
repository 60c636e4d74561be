//! Scene extents, accepted circles, and the plain-text scene file.
use glam::DVec2;

use crate::geometry::Circle;

pub mod file;

pub use file::{SceneFile, SceneWindow};

/// Absolute extents and radius limits of a scene, in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneBounds {
    pub width: f64,
    pub height: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Clearance enforced between circle edges on top of non-overlap.
    pub extra_spacing: f64,
}

impl SceneBounds {
    /// Builds bounds from scene extents and radius/spacing fractions of `min(width, height)`.
    pub fn from_fractions(
        width: f64,
        height: f64,
        min_radius_fraction: f64,
        max_radius_fraction: f64,
        extra_spacing_fraction: f64,
    ) -> Self {
        let min_dimension = width.min(height);
        Self {
            width,
            height,
            min_radius: min_radius_fraction * min_dimension,
            max_radius: max_radius_fraction * min_dimension,
            extra_spacing: extra_spacing_fraction * min_dimension,
        }
    }

    #[inline]
    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Maps a point of the unit square into scene coordinates.
    #[inline]
    pub fn to_scene(&self, unit: DVec2) -> DVec2 {
        unit * self.extent()
    }

    /// Whether `p` lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A generated scene: its bounds plus the accepted circles in acceptance order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub bounds: SceneBounds,
    pub circles: Vec<Circle>,
}

impl Scene {
    pub fn new(bounds: SceneBounds, circles: Vec<Circle>) -> Self {
        Self { bounds, circles }
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Bounding window of the scene, anchored at the origin.
    pub fn window(&self) -> SceneWindow {
        SceneWindow::new(0.0, 0.0, self.bounds.width, self.bounds.height)
    }
}
