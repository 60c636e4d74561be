#![forbid(unsafe_code)]
//! circle_scene: random non-overlapping circle scenes for Dirichlet walk-on-spheres solvers.
//!
//! Modules:
//! - field: boundary value sources over the unit square (image pixels, per-channel Perlin noise)
//! - geometry: the circle primitive and its signed distance
//! - packing: configuration, the packing engine, the placement loop, and run events
//! - scene: scene bounds and the plain-text scene file
//! - sampling: uniform draws from any `RngCore`
pub mod error;
pub mod field;
pub mod geometry;
pub mod packing;
pub mod sampling;
pub mod scene;

/// Convenient re-exports for common types. Import with `use circle_scene::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{
        BoundaryField, BoundaryValue, Channel, ImageField, NoiseField, NoiseSettings,
    };
    pub use crate::geometry::Circle;
    pub use crate::packing::events::{EventSink, FnSink, SceneEvent, SceneEventKind, VecSink};
    pub use crate::packing::{
        GenerationReport, PackingEngine, ResolvedConfig, SceneConfig, SceneGenerator,
    };
    pub use crate::scene::{Scene, SceneBounds, SceneFile, SceneWindow};
}
