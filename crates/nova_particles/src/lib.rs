//! Particle systems for Nova
//!
//! Everything that evolves point data frame by frame:
//!
//! - [`ParticleSampler`] turns a two-channel text canvas into a [`ParticleCloud`]
//! - [`TextParticleSystem`] owns the text banners and animates their drift and twinkle
//! - [`Starfield`] is the static backdrop, rotated slowly as a whole
//! - [`Firework`] rises to a target, bursts, fades and retires
//!
//! # Example
//!
//! ```ignore
//! use nova_core::Color;
//! use nova_particles::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let cloud = ParticleSampler::default().sample(&canvas, &mut rng);
//! let mut banners = TextParticleSystem::new();
//! let id = banners.add(TextBanner::new("2026", None, 1180.0, Color::from_hex(0xffdd44), cloud));
//! banners.update(0.016);
//! ```

mod cloud;
mod emitter;
mod firework;
mod forces;
mod sampler;
mod shading;
mod sprite;
mod starfield;
mod text;

pub use cloud::{ParticleCloud, ParticleRecord, PointVertex};
pub use emitter::BurstSampling;
pub use firework::{Firework, FireworkConfig, FireworkState};
pub use forces::ForceAffector;
pub use sampler::ParticleSampler;
pub use shading::PointShading;
pub use sprite::sprite_texture;
pub use starfield::{Starfield, StarfieldConfig};
pub use text::{oscillation, twinkle, BannerId, TextBanner, TextParticleSystem};
