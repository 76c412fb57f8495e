//! Force affectors for burst particles

use nova_core::Vec3;
use serde::{Deserialize, Serialize};

/// A per-tick modification of a particle velocity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ForceAffector {
    /// Constant acceleration added every tick
    Gravity(Vec3),
    /// Velocity multiplied by this factor every tick
    Damping(f32),
}

impl ForceAffector {
    /// Downward gravity of `strength` units per tick
    pub fn gravity(strength: f32) -> Self {
        Self::Gravity(Vec3::new(0.0, -strength, 0.0))
    }

    pub fn damping(factor: f32) -> Self {
        Self::Damping(factor.clamp(0.0, 1.0))
    }

    pub fn apply(&self, velocity: &mut Vec3) {
        match *self {
            ForceAffector::Gravity(acceleration) => *velocity += acceleration,
            ForceAffector::Damping(factor) => *velocity *= factor,
        }
    }

    /// Apply `forces` in order
    pub fn apply_all(forces: &[ForceAffector], velocity: &mut Vec3) {
        for force in forces {
            force.apply(velocity);
        }
    }
}
