//! Multi-octave fractal Brownian motion (fBm) height sampler over the
//! horizontal plane.

use noise::{NoiseFn, Simplex};

/// Configuration for multi-octave fBm noise.
#[derive(Clone, Debug)]
pub struct HeightmapParams {
    /// Seed for deterministic generation.
    pub seed: u32,
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first octave, in cycles per world unit.
    pub base_frequency: f64,
    /// Amplitude of the first octave in world units.
    pub amplitude: f64,
}

impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 0.02,
            amplitude: 6.0,
        }
    }
}

/// fBm over 2D simplex noise: each octave doubles in frequency and halves
/// in amplitude (with the default lacunarity/persistence).
pub struct HeightmapSampler {
    noise: Simplex,
    params: HeightmapParams,
}

impl HeightmapSampler {
    pub fn new(params: HeightmapParams) -> Self {
        Self {
            noise: Simplex::new(params.seed),
            params,
        }
    }

    /// Height at `(x, z)`, roughly within `[-max_amplitude, max_amplitude]`.
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = self.params.amplitude;

        for _ in 0..self.params.octaves {
            total += self.noise.get([x * frequency, z * frequency]) * amplitude;
            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }

    /// Geometric sum of the octave amplitudes.
    pub fn max_amplitude(&self) -> f64 {
        (0..self.params.octaves)
            .map(|i| self.params.amplitude * self.params.persistence.powi(i as i32))
            .sum()
    }

    pub fn params(&self) -> &HeightmapParams {
        &self.params
    }
}
