//! Boundary value fields sampled over the unit square.
//!
//! A [`BoundaryField`] maps a normalized position `(x, y) ∈ [0, 1]²` to a real triple that becomes
//! the Dirichlet boundary value of a circle placed at that position:
//! - [`ImageField`] reads decoded pixel colors.
//! - [`NoiseField`] evaluates one coherent-noise generator per channel.
use glam::{DVec2, DVec3};

pub mod image;
pub mod noise;

pub use self::image::ImageField;
pub use self::noise::{NoiseField, NoiseSettings};

/// Boundary value carried by a circle, as `(r, g, b)`.
pub type BoundaryValue = DVec3;

/// Channel of a [`BoundaryValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Picks this channel out of a boundary value.
    #[inline]
    pub fn of(self, value: BoundaryValue) -> f64 {
        match self {
            Channel::R => value.x,
            Channel::G => value.y,
            Channel::B => value.z,
        }
    }
}

/// Source of boundary values. Stateless after construction and safe to share across threads.
#[derive(Clone, Debug)]
pub enum BoundaryField {
    Image(ImageField),
    Noise(NoiseField),
}

impl BoundaryField {
    /// Samples the field at a normalized position in `[0, 1]²`.
    #[inline]
    pub fn sample(&self, p: DVec2) -> BoundaryValue {
        match self {
            BoundaryField::Image(image) => image.sample(p),
            BoundaryField::Noise(noise) => noise.sample(p),
        }
    }

    /// Samples a single channel at a normalized position in `[0, 1]²`.
    pub fn sample_channel(&self, channel: Channel, p: DVec2) -> f64 {
        match self {
            BoundaryField::Image(image) => channel.of(image.sample(p)),
            BoundaryField::Noise(noise) => noise.sample_channel(channel, p),
        }
    }

    /// Pixel size `(width, height)` of the backing image, if any.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        match self {
            BoundaryField::Image(image) => Some(image.size()),
            BoundaryField::Noise(_) => None,
        }
    }
}

impl From<ImageField> for BoundaryField {
    fn from(value: ImageField) -> Self {
        BoundaryField::Image(value)
    }
}

impl From<NoiseField> for BoundaryField {
    fn from(value: NoiseField) -> Self {
        BoundaryField::Noise(value)
    }
}
