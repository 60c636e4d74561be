//! Single-placement primitive: largest free radius at a point and one placement attempt.
//!
//! Overlap queries scan every placed circle, so one attempt costs O(n) and filling a scene of
//! n circles costs O(n²). That is fine up to a few thousand circles; past that a spatial grid
//! over the centers would be needed.
use glam::DVec2;
use rand::RngCore;

use crate::field::BoundaryField;
use crate::geometry::Circle;
use crate::sampling::{rand_range, unit_point};
use crate::scene::{Scene, SceneBounds};

/// Owns the circles placed so far and proposes new non-overlapping ones.
#[derive(Debug, Clone)]
pub struct PackingEngine {
    bounds: SceneBounds,
    circles: Vec<Circle>,
}

impl PackingEngine {
    pub fn new(bounds: SceneBounds) -> Self {
        Self {
            bounds,
            circles: Vec::new(),
        }
    }

    pub fn with_capacity(bounds: SceneBounds, capacity: usize) -> Self {
        Self {
            bounds,
            circles: Vec::with_capacity(capacity),
        }
    }

    pub fn bounds(&self) -> &SceneBounds {
        &self.bounds
    }

    /// Circles placed so far, in acceptance order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn reserved(&self) -> usize {
        self.circles.capacity()
    }

    /// Largest radius a circle centered at `point` can have without overlapping any placed circle.
    ///
    /// Returns `f64::INFINITY` when nothing has been placed, and exactly `0.0` as soon as `point`
    /// lies inside a placed circle.
    pub fn max_free_radius(&self, point: DVec2) -> f64 {
        let mut free = f64::INFINITY;
        for circle in &self.circles {
            let d = circle.distance_to_boundary(point);
            if d < 0.0 {
                return 0.0;
            }
            if d < free {
                free = d;
            }
        }
        free
    }

    /// Attempts one placement at a uniformly drawn point.
    ///
    /// The radius is drawn from `[min_radius, avail]`, where `avail` is the free radius at the
    /// point minus the extra spacing, capped at `max_radius`. The boundary value is sampled at
    /// the unit-square draw, not the scene-space point. The circle is not inserted.
    pub fn attempt_placement(
        &self,
        field: &BoundaryField,
        rng: &mut dyn RngCore,
    ) -> Option<Circle> {
        let unit = unit_point(rng);
        let center = self.bounds.to_scene(unit);

        let avail = self.max_free_radius(center) - self.bounds.extra_spacing;
        if avail < 0.0 {
            return None;
        }
        let avail = avail.min(self.bounds.max_radius);
        if avail < self.bounds.min_radius {
            return None;
        }

        let radius = rand_range(rng, self.bounds.min_radius, avail);
        let boundary = field.sample(unit);
        Some(Circle::new(center, radius, boundary))
    }

    /// Appends an accepted circle.
    pub fn insert(&mut self, circle: Circle) {
        debug_assert!(
            self.circles
                .iter()
                .all(|c| c.gap_to(&circle) >= self.bounds.extra_spacing - 1e-9),
            "inserted circle violates spacing"
        );
        self.circles.push(circle);
    }

    /// Consumes the engine, returning the finished scene.
    pub fn into_scene(self) -> Scene {
        Scene::new(self.bounds, self.circles)
    }
}
