//! Fireworks
//!
//! A firework is a two-phase particle effect. While rising, a single head
//! particle eases up towards the target height. Once it is close enough it
//! bursts into a fixed number of particles that fly outward under gravity and
//! drag while the whole burst fades. When the fade completes the firework is
//! done and its buffers are released.

use crate::emitter::BurstSampling;
use crate::forces::ForceAffector;
use nova_animation::Approach;
use nova_core::{Color, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable firework physics (per-tick units)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworkConfig {
    /// Particles spawned by the burst
    pub burst_count: usize,
    /// Fraction of the remaining height covered per rising tick
    pub rise_ease: f32,
    /// Constant upward push per rising tick
    pub rise_bias: f32,
    /// Launch height below the target
    pub launch_offset: f32,
    /// Burst once the head is closer than this below the target
    pub explode_distance: f32,
    /// Downward acceleration per tick (0 disables gravity)
    pub gravity: f32,
    /// Velocity multiplier per tick
    pub damping: f32,
    /// Opacity lost per exploded tick
    pub fade_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Sprite point size
    pub point_size: f32,
    pub sampling: BurstSampling,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            burst_count: 100,
            rise_ease: 0.15,
            rise_bias: 0.2,
            launch_offset: 50.0,
            explode_distance: 1.0,
            gravity: 0.03,
            damping: 0.96,
            fade_step: 0.02,
            min_speed: 0.2,
            max_speed: 1.0,
            point_size: 3.0,
            sampling: BurstSampling::Polar,
        }
    }
}

impl FireworkConfig {
    /// Forces applied to burst velocities, in order
    pub fn forces(&self) -> Vec<ForceAffector> {
        let mut forces = Vec::with_capacity(2);
        if self.gravity != 0.0 {
            forces.push(ForceAffector::gravity(self.gravity));
        }
        forces.push(ForceAffector::damping(self.damping));
        forces
    }
}

/// Lifecycle phase of a firework
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireworkState {
    Rising,
    Exploded,
}

/// A single firework
#[derive(Clone, Debug, PartialEq)]
pub struct Firework {
    config: FireworkConfig,
    forces: Vec<ForceAffector>,
    state: FireworkState,
    target: Vec3,
    rise: Approach,
    color: Color,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    opacity: f32,
    done: bool,
}

impl Firework {
    /// Launch a firework below `target`, with a random tint
    pub fn new(target: Vec3, config: FireworkConfig, rng: &mut impl Rng) -> Self {
        let launch = Vec3::new(target.x, target.y - config.launch_offset, target.z);
        let mut rise = Approach::new(launch.y, config.rise_ease).with_bias(config.rise_bias);
        rise.set_target(target.y);
        let color = Color::from_hex(rng.gen_range(0..0xFF_FFFF));

        tracing::debug!("Launching firework towards {:?}", target);
        Self {
            forces: config.forces(),
            config,
            state: FireworkState::Rising,
            target,
            rise,
            color,
            positions: vec![launch],
            velocities: Vec::new(),
            opacity: 1.0,
            done: false,
        }
    }

    /// Advance one tick; a no-op once the firework is done
    pub fn update(&mut self, rng: &mut impl Rng) {
        if self.done {
            return;
        }

        match self.state {
            FireworkState::Rising => {
                let y = self.rise.step();
                if let Some(head) = self.positions.first_mut() {
                    head.y = y;
                }
                if self.target.y - y < self.config.explode_distance {
                    self.explode(rng);
                }
            }
            FireworkState::Exploded => {
                for (position, velocity) in self.positions.iter_mut().zip(&mut self.velocities) {
                    *position += *velocity;
                    ForceAffector::apply_all(&self.forces, velocity);
                }
                self.opacity = (self.opacity - self.config.fade_step).max(0.0);
                if self.opacity <= 0.0 {
                    self.done = true;
                    self.positions = Vec::new();
                    self.velocities = Vec::new();
                    tracing::trace!("Firework at {:?} finished", self.target);
                }
            }
        }
    }

    fn explode(&mut self, rng: &mut impl Rng) {
        let origin = self.positions.first().copied().unwrap_or(self.target);
        let count = self.config.burst_count;
        let sampling = self.config.sampling;
        let min_speed = self.config.min_speed;
        let max_speed = self.config.max_speed.max(min_speed);

        self.positions = vec![origin; count];
        self.velocities = (0..count)
            .map(|_| {
                let speed = min_speed + rng.gen::<f32>() * (max_speed - min_speed);
                sampling.sample_direction(rng) * speed
            })
            .collect();
        self.state = FireworkState::Exploded;
        tracing::trace!("Firework burst into {} particles at {:?}", count, origin);
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn state(&self) -> FireworkState {
        self.state
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// The rising head, the burst particles, or nothing once done
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Burst velocities; empty unless exploded and not yet done
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn point_size(&self) -> f32 {
        self.config.point_size
    }
}
