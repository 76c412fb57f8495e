//! Burst direction sampling

use nova_core::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// How burst directions are distributed over the sphere
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurstSampling {
    /// Polar angle uniform in `[0, π)`; directions cluster near the poles
    #[default]
    Polar,
    /// Uniform over the sphere surface
    Uniform,
}

impl BurstSampling {
    /// Unit direction `(sinφ cosθ, sinφ sinθ, cosφ)`
    pub fn sample_direction(&self, rng: &mut impl Rng) -> Vec3 {
        let theta = rng.gen::<f32>() * TAU;
        let phi = match self {
            BurstSampling::Polar => rng.gen::<f32>() * PI,
            BurstSampling::Uniform => (1.0 - 2.0 * rng.gen::<f32>()).acos(),
        };
        Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_directions_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for sampling in [BurstSampling::Polar, BurstSampling::Uniform] {
            for _ in 0..500 {
                let d = sampling.sample_direction(&mut rng);
                assert!((d.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_uniform_has_no_pole_bias() {
        let mut rng = StdRng::seed_from_u64(12);
        let n = 20_000;
        let near_pole = |sampling: BurstSampling, rng: &mut StdRng| {
            (0..n)
                .filter(|_| sampling.sample_direction(rng).z.abs() > 0.9)
                .count() as f32
                / n as f32
        };
        // Uniform: 10% of the sphere has |z| > 0.9; polar sampling puts ~29% there
        let uniform = near_pole(BurstSampling::Uniform, &mut rng);
        let polar = near_pole(BurstSampling::Polar, &mut rng);
        assert!((uniform - 0.1).abs() < 0.02, "uniform {}", uniform);
        assert!(polar > 0.2, "polar {}", polar);
    }
}
