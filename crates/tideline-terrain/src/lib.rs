//! Ground elevation queries consumed by the avatar and camera clamps.
//!
//! The kinematics only ever ask one question: how high is the ground at
//! `(x, z)`? [`Terrain`] answers it, returning `None` where there is no data
//! (outside generated chunks) so callers can pick their own fallback instead
//! of treating `0.0` as "missing".

mod heightmap;
mod noise_terrain;

pub use heightmap::{HeightmapParams, HeightmapSampler};
pub use noise_terrain::NoiseTerrain;

/// Source of ground elevation.
pub trait Terrain {
    /// Ground height at world `(x, z)`, or `None` where no data exists.
    fn elevation(&self, x: f32, z: f32) -> Option<f32>;
}

impl<F> Terrain for F
where
    F: Fn(f32, f32) -> Option<f32>,
{
    fn elevation(&self, x: f32, z: f32) -> Option<f32> {
        self(x, z)
    }
}

/// Constant-height ground everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlatTerrain {
    pub height: f32,
}

impl FlatTerrain {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Terrain for FlatTerrain {
    fn elevation(&self, _x: f32, _z: f32) -> Option<f32> {
        Some(self.height)
    }
}

/// No ground data anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTerrain;

impl Terrain for NoTerrain {
    fn elevation(&self, _x: f32, _z: f32) -> Option<f32> {
        None
    }
}
