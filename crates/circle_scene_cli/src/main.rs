//! `circle-scene`: generate a circle scene and write it as a CSV scene file.
mod args;
mod output;

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use circle_scene::packing::events::{FnSink, SceneEvent, SceneEventKind};
use circle_scene::packing::SceneGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{CliArgs, USAGE};
use crate::output::output_path;

fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = args.scene_config();
    let mut generator =
        SceneGenerator::try_new(&config).context("failed to set up scene generation")?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("Using seed {seed}.");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut progress = FnSink::only(
        [SceneEventKind::RunStarted, SceneEventKind::PlacementMade],
        log_progress,
    );
    let report = generator.generate_with_events(&mut rng, &mut progress);

    let path = output_path(
        config.image_path(),
        args.output.as_deref(),
        args.output_dir.as_deref(),
        report.placed,
    );
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }

    info!("Saving scene file '{}'.", path.display());
    generator
        .into_scene()
        .save(&path)
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    Ok(())
}

fn log_progress(event: SceneEvent) {
    match event {
        SceneEvent::RunStarted {
            bounds,
            num_circles,
            max_attempts,
        } => info!(
            "Packing up to {} circles into {} x {} (radius {} to {}, {} attempts each).",
            num_circles,
            bounds.width,
            bounds.height,
            bounds.min_radius,
            bounds.max_radius,
            max_attempts
        ),
        SceneEvent::PlacementMade {
            slot,
            attempts,
            circle,
        } => trace!("Slot {slot} placed r={} after {attempts} attempts.", circle.radius),
        _ => {}
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
