//! Scene configuration and its resolution into absolute scene bounds.
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};
use crate::field::NoiseSettings;
use crate::scene::SceneBounds;

pub const DEFAULT_NUM_CIRCLES: usize = 20;
pub const DEFAULT_MIN_RADIUS_FRACTION: f64 = 0.01;
pub const DEFAULT_MAX_RADIUS_FRACTION: f64 = 0.1;
pub const DEFAULT_EXTRA_SPACING_FRACTION: f64 = 0.01;
pub const DEFAULT_MAX_ATTEMPTS: usize = 25;

/// Configuration for generating a scene.
///
/// Radius and spacing values are fractions of `min(width, height)`. Width and height may be left
/// unset when a boundary image is used; see [`SceneConfig::resolve`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Scene width in scene units.
    pub width: Option<f64>,
    /// Scene height in scene units.
    pub height: Option<f64>,
    /// Number of placement slots.
    pub num_circles: usize,
    pub min_radius_fraction: f64,
    pub max_radius_fraction: f64,
    pub extra_spacing_fraction: f64,
    /// Image providing boundary values. Noise is used when unset.
    pub image_path: Option<PathBuf>,
    /// Placement attempts per slot before the slot is abandoned.
    pub max_attempts: usize,
    /// Noise parameters used when no image is configured.
    pub noise: NoiseSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            num_circles: DEFAULT_NUM_CIRCLES,
            min_radius_fraction: DEFAULT_MIN_RADIUS_FRACTION,
            max_radius_fraction: DEFAULT_MAX_RADIUS_FRACTION,
            extra_spacing_fraction: DEFAULT_EXTRA_SPACING_FRACTION,
            image_path: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            noise: NoiseSettings::default(),
        }
    }
}

impl SceneConfig {
    /// Creates a new [`SceneConfig`] with explicit scene extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Creates a new [`SceneConfig`] whose boundary values come from an image.
    pub fn from_image(path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the number of placement slots.
    pub fn with_num_circles(mut self, num_circles: usize) -> Self {
        self.num_circles = num_circles;
        self
    }

    /// Sets the minimum and maximum radius fractions.
    pub fn with_radius_fractions(mut self, min: f64, max: f64) -> Self {
        self.min_radius_fraction = min;
        self.max_radius_fraction = max;
        self
    }

    pub fn with_min_radius_fraction(mut self, min: f64) -> Self {
        self.min_radius_fraction = min;
        self
    }

    pub fn with_max_radius_fraction(mut self, max: f64) -> Self {
        self.max_radius_fraction = max;
        self
    }

    /// Sets the extra spacing fraction.
    pub fn with_extra_spacing_fraction(mut self, spacing: f64) -> Self {
        self.extra_spacing_fraction = spacing;
        self
    }

    pub fn with_image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Sets the per-slot attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_noise(mut self, noise: NoiseSettings) -> Self {
        self.noise = noise;
        self
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// Validates the size-independent settings, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("min_radius_fraction", self.min_radius_fraction),
            ("max_radius_fraction", self.max_radius_fraction),
            ("extra_spacing_fraction", self.extra_spacing_fraction),
        ];
        for (name, value) in fractions {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite")));
            }
        }
        if self.min_radius_fraction <= 0.0 {
            return Err(Error::InvalidConfig("min_radius_fraction must be > 0".into()));
        }
        if self.max_radius_fraction < self.min_radius_fraction {
            return Err(Error::InvalidConfig(
                "max_radius_fraction must be >= min_radius_fraction".into(),
            ));
        }
        if self.extra_spacing_fraction < 0.0 {
            return Err(Error::InvalidConfig(
                "extra_spacing_fraction must be >= 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }
        if self.noise.octaves == 0 {
            return Err(Error::InvalidConfig("noise octaves must be > 0".into()));
        }
        Ok(())
    }

    /// Resolves scene extents and absolute radius bounds.
    ///
    /// `image_size` is the pixel size of the boundary image, if one is used. With an image, a
    /// missing extent is derived from the image aspect ratio, and when both are missing the
    /// scene takes the image's pixel size. Without an image both extents are required.
    pub fn resolve(&self, image_size: Option<(u32, u32)>) -> Result<ResolvedConfig> {
        self.validate()?;

        let (width, height) = match (image_size, self.width, self.height) {
            (_, Some(w), Some(h)) => (w, h),
            (Some((iw, ih)), Some(w), None) => (w, ih as f64 / iw as f64 * w),
            (Some((iw, ih)), None, Some(h)) => (iw as f64 / ih as f64 * h, h),
            (Some((iw, ih)), None, None) => (iw as f64, ih as f64),
            (None, _, _) => {
                return Err(Error::InvalidConfig(
                    "width and height are required when no image is given".into(),
                ))
            }
        };

        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "width and height must be non-zero (got {width} x {height})"
            )));
        }

        if self.min_radius_fraction == self.max_radius_fraction {
            warn!(
                "min_radius_fraction equals max_radius_fraction ({}); every circle gets the same radius.",
                self.min_radius_fraction
            );
        }

        Ok(ResolvedConfig {
            bounds: SceneBounds::from_fractions(
                width,
                height,
                self.min_radius_fraction,
                self.max_radius_fraction,
                self.extra_spacing_fraction,
            ),
            num_circles: self.num_circles,
            max_attempts: self.max_attempts,
        })
    }
}

/// Configuration after extents and radius bounds have been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    pub bounds: SceneBounds,
    pub num_circles: usize,
    pub max_attempts: usize,
}
