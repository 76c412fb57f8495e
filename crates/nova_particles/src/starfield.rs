//! Static star backdrop

use nova_core::{Color, Mat4, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Starfield placement and motion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Side length of the square the stars cover in x and y, centered on 0
    pub range: f32,
    pub z_min: f32,
    pub z_max: f32,
    pub point_size: f32,
    /// Radians added to the Z rotation every frame
    pub rotation_speed: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 50_000,
            range: 1500.0,
            z_min: -500.0,
            z_max: 2500.0,
            point_size: 0.6,
            rotation_speed: 0.001,
        }
    }
}

/// A fixed set of white points rotating slowly around the view axis
#[derive(Clone, Debug)]
pub struct Starfield {
    positions: Vec<Vec3>,
    point_size: f32,
    rotation_speed: f32,
    rotation: f32,
}

impl Starfield {
    pub fn new(config: &StarfieldConfig, rng: &mut impl Rng) -> Self {
        let half = config.range * 0.5;
        let depth = (config.z_max - config.z_min).max(0.0);
        let positions = (0..config.count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * config.range,
                    (rng.gen::<f32>() - 0.5) * config.range,
                    config.z_min + rng.gen::<f32>() * depth,
                )
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Starfield: {} stars in ±{} x/y, z {}..{}",
            positions.len(),
            half,
            config.z_min,
            config.z_max
        );
        Self {
            positions,
            point_size: config.point_size,
            rotation_speed: config.rotation_speed,
            rotation: 0.0,
        }
    }

    /// Rotate by one frame's worth
    pub fn update(&mut self) {
        self.rotation += self.rotation_speed;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::rotation_z(self.rotation)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn color(&self) -> Color {
        Color::WHITE
    }
}
