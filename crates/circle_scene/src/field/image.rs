//! Boundary values read from decoded image pixels.
use std::path::Path;

use glam::{DVec2, DVec3};
use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

/// CPU-side snapshot of an image, converted to 8-bit RGB.
///
/// Normalized `y = 0` maps to the bottom pixel row, so the field follows the usual mathematical
/// orientation rather than raster order.
#[derive(Clone, Debug)]
pub struct ImageField {
    pixels: RgbImage,
}

impl ImageField {
    /// Opens and decodes the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let field = Self::from_image(image);
        debug!(
            "Loaded boundary image '{}' ({}x{} px).",
            path.display(),
            field.width_px(),
            field.height_px()
        );
        Ok(field)
    }

    /// Creates a field from an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self::from_rgb(image.to_rgb8())
    }

    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    #[inline]
    pub fn width_px(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height_px(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel size as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width_px(), self.height_px())
    }

    /// Raw RGB bytes at raster position `(col, row)`, row 0 being the top of the image.
    pub fn pixel(&self, col: u32, row: u32) -> Option<[u8; 3]> {
        self.pixels.get_pixel_checked(col, row).map(|px| px.0)
    }

    /// Maps a normalized position to its raster `(col, row)`.
    ///
    /// `col = floor(x * width)` and `row = height - floor(y * height) - 1`, clamped to the
    /// image so that `x = 1` or `y = 1` land on the last column or the top row.
    pub fn texel(&self, p: DVec2) -> (u32, u32) {
        let (w, h) = self.size();
        let max_col = w.saturating_sub(1) as f64;
        let max_row = h.saturating_sub(1) as f64;
        let col = (p.x * w as f64).floor().clamp(0.0, max_col) as u32;
        let from_bottom = (p.y * h as f64).floor().clamp(0.0, max_row) as u32;
        (col, h.saturating_sub(1) - from_bottom)
    }

    /// Samples the pixel under `p`, each channel scaled to `[0, 1]`.
    pub fn sample(&self, p: DVec2) -> DVec3 {
        let (w, h) = self.size();
        if w == 0 || h == 0 {
            return DVec3::ZERO;
        }
        let (col, row) = self.texel(p);
        let [r, g, b] = self.pixels.get_pixel(col, row).0;
        DVec3::new(r as f64, g as f64, b as f64) / 255.0
    }
}
