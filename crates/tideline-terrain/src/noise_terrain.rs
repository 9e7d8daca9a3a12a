//! Procedural ground built on the fBm heightmap sampler.

use crate::Terrain;
use crate::heightmap::{HeightmapParams, HeightmapSampler};

/// Procedural rolling terrain with an optional square extent.
///
/// Heights are `base_height + fBm(x, z)`. Outside `[-extent, extent]` on
/// either axis there is no ground data.
pub struct NoiseTerrain {
    sampler: HeightmapSampler,
    base_height: f32,
    extent: Option<f32>,
}

impl NoiseTerrain {
    pub fn new(params: HeightmapParams, base_height: f32) -> Self {
        Self {
            sampler: HeightmapSampler::new(params),
            base_height,
            extent: None,
        }
    }

    /// Limit ground data to the square `[-extent, extent]^2`.
    pub fn with_extent(mut self, extent: f32) -> Self {
        self.extent = Some(extent.abs());
        self
    }

    pub fn sampler(&self) -> &HeightmapSampler {
        &self.sampler
    }
}

impl Terrain for NoiseTerrain {
    fn elevation(&self, x: f32, z: f32) -> Option<f32> {
        if let Some(extent) = self.extent
            && (x.abs() > extent || z.abs() > extent)
        {
            return None;
        }
        Some(self.base_height + self.sampler.sample(f64::from(x), f64::from(z)) as f32)
    }
}
