//! Scene generation: configuration resolution, field construction and the placement loop.
use rand::RngCore;
use tracing::{debug, info};

use crate::error::Result;
use crate::field::{BoundaryField, ImageField, NoiseField};
use crate::geometry::Circle;
use crate::packing::config::{ResolvedConfig, SceneConfig};
use crate::packing::engine::PackingEngine;
use crate::packing::events::{EventSink, SceneEvent, SceneEventKind};
use crate::scene::{Scene, SceneBounds};

/// Most circles reserved up front, whatever `num_circles` asks for.
const MAX_RESERVED_CIRCLES: usize = 4096;

/// Counts collected by one run of the placement loop.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Slots attempted.
    pub requested: usize,
    /// Circles accepted.
    pub placed: usize,
    /// Placement attempts made across all slots.
    pub attempts: usize,
    /// Attempts that did not produce a circle.
    pub rejected: usize,
    /// Slots that ran out of attempts.
    pub abandoned_slots: usize,
}

/// Drives repeated placement attempts over a resolved scene.
pub struct SceneGenerator {
    config: ResolvedConfig,
    field: BoundaryField,
    engine: PackingEngine,
}

impl SceneGenerator {
    /// Builds a generator, loading the configured image or falling back to a noise field.
    pub fn try_new(config: &SceneConfig) -> Result<Self> {
        let field: BoundaryField = match config.image_path() {
            Some(path) => ImageField::open(path)?.into(),
            None => NoiseField::new(config.noise).into(),
        };
        Self::with_field(config, field)
    }

    /// Builds a generator around an explicit boundary field.
    ///
    /// When `field` is an image, its pixel size takes part in extent resolution.
    pub fn with_field(config: &SceneConfig, field: BoundaryField) -> Result<Self> {
        let resolved = config.resolve(field.image_size())?;
        let bounds = resolved.bounds;
        debug!(
            "Resolved scene {} x {} | radius [{}, {}] | spacing {}.",
            bounds.width, bounds.height, bounds.min_radius, bounds.max_radius, bounds.extra_spacing
        );
        Ok(Self {
            engine: PackingEngine::with_capacity(
                bounds,
                resolved.num_circles.min(MAX_RESERVED_CIRCLES),
            ),
            config: resolved,
            field,
        })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn bounds(&self) -> &SceneBounds {
        self.engine.bounds()
    }

    pub fn field(&self) -> &BoundaryField {
        &self.field
    }

    /// Circles accepted so far.
    pub fn circles(&self) -> &[Circle] {
        self.engine.circles()
    }

    /// Runs `num_circles` placement slots. Further calls keep adding to the same scene.
    pub fn generate<R: RngCore>(&mut self, rng: &mut R) -> GenerationReport {
        self.generate_with_events(rng, &mut ())
    }

    pub fn generate_with_events<R: RngCore>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> GenerationReport {
        let num_circles = self.config.num_circles;
        let max_attempts = self.config.max_attempts;

        if sink.wants(SceneEventKind::RunStarted) {
            sink.send(SceneEvent::RunStarted {
                bounds: *self.engine.bounds(),
                num_circles,
                max_attempts,
            });
        }

        let mut report = GenerationReport {
            requested: num_circles,
            ..Default::default()
        };

        for slot in 0..num_circles {
            let mut accepted = None;
            let mut attempts = 0;
            while attempts < max_attempts {
                attempts += 1;
                if let Some(circle) = self.engine.attempt_placement(&self.field, rng) {
                    accepted = Some(circle);
                    break;
                }
            }
            report.attempts += attempts;

            match accepted {
                Some(circle) => {
                    self.engine.insert(circle);
                    report.placed += 1;
                    report.rejected += attempts - 1;
                    if sink.wants(SceneEventKind::PlacementMade) {
                        sink.send(SceneEvent::PlacementMade {
                            slot,
                            attempts,
                            circle,
                        });
                    }
                }
                None => {
                    report.rejected += attempts;
                    report.abandoned_slots += 1;
                    debug!("Slot {} abandoned after {} attempts.", slot, attempts);
                    if sink.wants(SceneEventKind::SlotAbandoned) {
                        sink.send(SceneEvent::SlotAbandoned { slot, attempts });
                    }
                }
            }
        }

        info!(
            "Placed {} of {} circles ({} attempts, {} rejected).",
            report.placed, report.requested, report.attempts, report.rejected
        );

        if sink.wants(SceneEventKind::RunFinished) {
            sink.send(SceneEvent::RunFinished { report });
        }

        report
    }

    /// Consumes the generator, returning the scene built so far.
    pub fn into_scene(self) -> Scene {
        self.engine.into_scene()
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::packing::events::VecSink;

    fn scenario_config() -> SceneConfig {
        SceneConfig::new(10.0, 10.0)
            .with_num_circles(5)
            .with_radius_fractions(0.05, 0.2)
            .with_extra_spacing_fraction(0.0)
    }

    #[test]
    fn scenario_scene_respects_radius_bounds_and_window() {
        let mut generator = SceneGenerator::try_new(&scenario_config()).unwrap();
        assert!(matches!(generator.field(), BoundaryField::Noise(_)));
        let mut rng = StdRng::seed_from_u64(42);
        let report = generator.generate(&mut rng);

        assert!(report.placed <= 5);
        assert_eq!(report.requested, 5);
        let scene = generator.into_scene();
        assert_eq!(scene.len(), report.placed);
        for c in &scene.circles {
            assert!(c.radius >= 0.5 && c.radius <= 2.0);
        }
        let text = scene.to_file_string();
        assert_eq!(text.lines().next(), Some("0,0,10,10"));
    }

    #[test]
    fn dense_scene_keeps_all_invariants() {
        let config = SceneConfig::new(40.0, 25.0)
            .with_num_circles(400)
            .with_radius_fractions(0.01, 0.08)
            .with_extra_spacing_fraction(0.005);
        let mut generator = SceneGenerator::try_new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let report = generator.generate(&mut rng);
        let b = *generator.bounds();
        let circles = generator.circles();

        assert_eq!(circles.len(), report.placed);
        assert!(report.placed > 0 && report.placed <= 400);
        for (i, a) in circles.iter().enumerate() {
            assert!(a.radius >= b.min_radius && a.radius <= b.max_radius);
            assert!((0.0..=b.width).contains(&a.center.x));
            assert!((0.0..=b.height).contains(&a.center.y));
            for c in &circles[i + 1..] {
                let d = a.center.distance(c.center);
                assert!(d >= a.radius + c.radius + b.extra_spacing - 1e-9);
            }
        }
    }

    #[test]
    fn report_counts_are_consistent() {
        // Room for a handful of max-size circles only, so most slots are abandoned.
        let config = SceneConfig::new(10.0, 10.0)
            .with_num_circles(50)
            .with_radius_fractions(0.3, 0.3)
            .with_max_attempts(10);
        let mut generator = SceneGenerator::try_new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let report = generator.generate(&mut rng);

        assert!(report.placed >= 1);
        assert!(report.abandoned_slots > 0);
        assert_eq!(report.placed + report.abandoned_slots, 50);
        assert_eq!(report.attempts, report.placed + report.rejected);
        assert!(report.attempts <= 50 * 10);
    }

    #[test]
    fn events_follow_the_slot_sequence() {
        let mut generator = SceneGenerator::try_new(&scenario_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut sink = VecSink::new();
        let report = generator.generate_with_events(&mut rng, &mut sink);

        let events = sink.into_inner();
        assert!(matches!(events.first(), Some(SceneEvent::RunStarted { num_circles: 5, .. })));
        assert!(matches!(events.last(), Some(SceneEvent::RunFinished { report: r }) if *r == report));

        let slots: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                SceneEvent::PlacementMade { slot, .. } | SceneEvent::SlotAbandoned { slot, .. } => {
                    Some(*slot)
                }
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);

        let placed: Vec<Circle> = events
            .iter()
            .filter_map(|e| match e {
                SceneEvent::PlacementMade { circle, .. } => Some(*circle),
                _ => None,
            })
            .collect();
        assert_eq!(placed.as_slice(), generator.circles());
    }

    #[test]
    fn image_field_drives_extents_and_colors() {
        let field: BoundaryField =
            ImageField::from_rgb(RgbImage::from_pixel(200, 100, Rgb([255, 51, 0]))).into();
        let config = SceneConfig::default().with_width(50.0).with_num_circles(30);
        let mut generator = SceneGenerator::with_field(&config, field).unwrap();
        assert_eq!(generator.bounds().height, 25.0);

        let mut rng = StdRng::seed_from_u64(5);
        generator.generate(&mut rng);
        assert!(!generator.circles().is_empty());
        for c in generator.circles() {
            assert!((c.boundary - glam::DVec3::new(1.0, 0.2, 0.0)).abs().max_element() < 1e-12);
        }
    }

    #[test]
    fn zero_slots_place_nothing() {
        let mut generator =
            SceneGenerator::try_new(&scenario_config().with_num_circles(0)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let report = generator.generate(&mut rng);
        assert_eq!(report, GenerationReport::default());
        assert!(generator.into_scene().is_empty());
    }

    #[test]
    fn huge_slot_count_does_not_reserve_per_slot() {
        let config = scenario_config()
            .with_num_circles(usize::MAX / 2)
            .with_max_attempts(1);
        let generator = SceneGenerator::try_new(&config).unwrap();
        assert_eq!(generator.config().num_circles, usize::MAX / 2);
        assert!(generator.circles().is_empty());
        assert!(generator.engine.reserved() <= MAX_RESERVED_CIRCLES);
    }

    #[test]
    fn invalid_configuration_fails_before_generation() {
        let err = SceneGenerator::try_new(&SceneConfig::default())
            .err()
            .expect("missing extents");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn unreadable_image_fails_construction() {
        let config = SceneConfig::from_image("no/such/image.png").with_width(10.0);
        let err = SceneGenerator::try_new(&config).err().expect("missing image");
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
