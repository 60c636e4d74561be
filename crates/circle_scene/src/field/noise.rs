//! Procedural boundary values from per-channel Perlin noise.
use std::fmt;

use glam::{DVec2, DVec3};
use noise::{NoiseFn, Perlin};

use crate::field::Channel;

/// Fixed seeds for the red, green and blue generators.
pub const CHANNEL_SEEDS: [u32; 3] = [1, 2, 3];

/// Octave count and per-channel amplitudes of a [`NoiseField`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseSettings {
    /// Lattice cells per unit length, shared by all channels.
    pub octaves: u32,
    /// Amplitude applied to the red, green and blue channel.
    pub amplitudes: DVec3,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            octaves: 10,
            amplitudes: DVec3::new(0.5, 1.0, 2.0),
        }
    }
}

impl NoiseSettings {
    pub fn new(octaves: u32, amplitudes: DVec3) -> Self {
        Self {
            octaves,
            amplitudes,
        }
    }

    /// Sets the octave count.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the red, green and blue amplitudes.
    pub fn with_amplitudes(mut self, red: f64, green: f64, blue: f64) -> Self {
        self.amplitudes = DVec3::new(red, green, blue);
        self
    }
}

/// Three independent coherent-noise generators, one per channel.
///
/// Values are the generator's native output times the channel amplitude and are not clamped.
#[derive(Clone)]
pub struct NoiseField {
    settings: NoiseSettings,
    generators: [Perlin; 3],
}

impl NoiseField {
    pub fn new(settings: NoiseSettings) -> Self {
        Self {
            settings,
            generators: CHANNEL_SEEDS.map(Perlin::new),
        }
    }

    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    #[inline]
    fn lattice_point(&self, p: DVec2) -> [f64; 2] {
        let scale = self.settings.octaves as f64;
        [p.x * scale, p.y * scale]
    }

    /// Samples one channel at a normalized position.
    pub fn sample_channel(&self, channel: Channel, p: DVec2) -> f64 {
        let idx = channel as usize;
        self.generators[idx].get(self.lattice_point(p)) * channel.of(self.settings.amplitudes)
    }

    /// Samples all three channels at a normalized position.
    pub fn sample(&self, p: DVec2) -> DVec3 {
        let q = self.lattice_point(p);
        let raw = DVec3::new(
            self.generators[0].get(q),
            self.generators[1].get(q),
            self.generators[2].get(q),
        );
        raw * self.settings.amplitudes
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(NoiseSettings::default())
    }
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField")
            .field("settings", &self.settings)
            .field("seeds", &CHANNEL_SEEDS)
            .finish()
    }
}
