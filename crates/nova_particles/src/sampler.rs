//! Canvas to point cloud sampling
//!
//! Scans a two-channel text canvas on a regular grid and emits one particle
//! per lit cell. Red marks the primary label, green the secondary one.

use crate::cloud::ParticleCloud;
use image::RgbaImage;
use nova_core::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid sampler that converts lit pixels into particles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSampler {
    /// Grid spacing in pixels (values below 1 are treated as 1)
    pub stride: u32,
    /// A channel must be strictly above this to count as lit
    pub threshold: u8,
    /// World units per pixel
    pub world_scale: f32,
    /// Size class for particles lit by the red channel
    pub primary_size: f32,
    /// Size class for particles lit only by the green channel
    pub secondary_size: f32,
}

impl Default for ParticleSampler {
    fn default() -> Self {
        Self {
            stride: 3,
            threshold: 50,
            world_scale: 0.06,
            primary_size: 1.0,
            secondary_size: 0.45,
        }
    }
}

impl ParticleSampler {
    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    fn step(&self) -> usize {
        self.stride.max(1) as usize
    }

    /// Sample `canvas` into a cloud; phases are drawn from `rng`
    pub fn sample(&self, canvas: &RgbaImage, rng: &mut impl Rng) -> ParticleCloud {
        let (width, height) = canvas.dimensions();
        let half_w = width as f32 * 0.5;
        let half_h = height as f32 * 0.5;
        let k = self.world_scale;

        let mut cloud = ParticleCloud::new();
        for y in (0..height).step_by(self.step()) {
            for x in (0..width).step_by(self.step()) {
                let [r, g, _, _] = canvas.get_pixel(x, y).0;
                let primary = r > self.threshold;
                if !primary && g <= self.threshold {
                    continue;
                }

                let position = Vec3::new((x as f32 - half_w) * k, -(y as f32 - half_h) * k, 0.0);
                let size_class = if primary {
                    self.primary_size
                } else {
                    self.secondary_size
                };
                cloud.push(position, size_class, rng.gen::<f32>());
            }
        }

        tracing::debug!(
            "Sampled {} particles from {}x{} canvas (stride {}, threshold {})",
            cloud.len(),
            width,
            height,
            self.step(),
            self.threshold
        );
        cloud
    }

    /// Number of particles [`sample`](Self::sample) would emit
    pub fn count(&self, canvas: &RgbaImage) -> usize {
        let (width, height) = canvas.dimensions();
        (0..height)
            .step_by(self.step())
            .flat_map(|y| (0..width).step_by(self.step()).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let [r, g, _, _] = canvas.get_pixel(x, y).0;
                r > self.threshold || g > self.threshold
            })
            .count()
    }
}
