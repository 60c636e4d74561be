use std::time::Duration;

use circle_scene::field::BoundaryField;
use circle_scene::packing::{PackingEngine, SceneConfig};
use circle_scene::scene::SceneBounds;
use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

/// Side length of the square scene every packing bench runs in.
pub const SCENE_SIZE: f64 = 100.0;

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in placed circles; empty runs still count as one element.
pub fn circles_throughput(circles: usize) -> Throughput {
    Throughput::Elements(circles.max(1) as u64)
}

/// Small radii and tight spacing, so every slot count stays fillable.
pub fn dense_config(slots: usize) -> SceneConfig {
    SceneConfig::new(SCENE_SIZE, SCENE_SIZE)
        .with_num_circles(slots)
        .with_radius_fractions(0.002, 0.03)
        .with_extra_spacing_fraction(0.001)
}

/// Packs circles into `bounds` until `fill` of them are placed.
///
/// `fill` must fit into `bounds`, otherwise this never returns.
pub fn filled_engine(
    bounds: SceneBounds,
    field: &BoundaryField,
    fill: usize,
    seed: u64,
) -> PackingEngine {
    let mut engine = PackingEngine::new(bounds);
    let mut rng = StdRng::seed_from_u64(seed);
    while engine.len() < fill {
        if let Some(circle) = engine.attempt_placement(field, &mut rng) {
            engine.insert(circle);
        }
    }
    engine
}
