//! Constrained random packing of circles into a scene.
//!
//! Each placement draws a uniform point, asks how large a circle can grow there without
//! touching its neighbours, and samples a radius from what is left. Slots that fail
//! `max_attempts` times in a row are abandoned.
pub mod config;
pub mod engine;
pub mod events;
pub mod generator;

pub use config::{
    ResolvedConfig, SceneConfig, DEFAULT_EXTRA_SPACING_FRACTION, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_RADIUS_FRACTION, DEFAULT_MIN_RADIUS_FRACTION, DEFAULT_NUM_CIRCLES,
};
pub use engine::PackingEngine;
pub use generator::{GenerationReport, SceneGenerator};
