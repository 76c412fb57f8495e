//! Text banners made of particles
//!
//! A banner keeps the sampled cloud as its immutable base and derives the
//! displayed positions and point sizes from it every frame. Each particle
//! drifts on a small Lissajous-like path and twinkles, both driven by its
//! phase so neighbours never move in lockstep.

use crate::cloud::ParticleCloud;
use crate::shading::PointShading;
use nova_core::{Color, Mat4, Vec3};

/// Global animation speed applied to elapsed seconds
const TIME_SCALE: f32 = 0.8;
/// Point size in pixels at unit view depth for size class 1
pub const BASE_POINT_SIZE: f32 = 280.0;

/// Per-particle drift offset at `elapsed` seconds
pub fn oscillation(elapsed: f32, phase: f32) -> Vec3 {
    let t = elapsed * TIME_SCALE;
    Vec3::new(
        (t + phase * 10.0).sin() * 0.15,
        (t * 0.9 + phase * 20.0).cos() * 0.15,
        (t * 0.5 + phase * 5.0).sin() * 0.5,
    )
}

/// Per-particle brightness/size factor at `elapsed` seconds, in `[0.6, 1.2]`
pub fn twinkle(elapsed: f32, phase: f32) -> f32 {
    let t = elapsed * TIME_SCALE;
    0.9 + (t * 2.5 + phase * 100.0).sin() * 0.3
}

/// Handle to a banner owned by a [`TextParticleSystem`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BannerId(usize);

impl BannerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One label (plus optional sub-label) rendered as a particle cloud
#[derive(Clone, Debug)]
pub struct TextBanner {
    label: String,
    sub_label: Option<String>,
    depth: f32,
    tint: Color,
    cloud: ParticleCloud,
    opacity: f32,
    scale: f32,
    elapsed: f32,
    displaced: Vec<Vec3>,
    point_sizes: Vec<f32>,
}

impl TextBanner {
    pub fn new(
        label: impl Into<String>,
        sub_label: Option<String>,
        depth: f32,
        tint: Color,
        cloud: ParticleCloud,
    ) -> Self {
        let mut banner = Self {
            label: label.into(),
            sub_label,
            depth,
            tint,
            displaced: Vec::with_capacity(cloud.len()),
            point_sizes: Vec::with_capacity(cloud.len()),
            cloud,
            opacity: 1.0,
            scale: 1.0,
            elapsed: 0.0,
        };
        banner.update(0.0);
        banner
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sub_label(&self) -> Option<&str> {
        self.sub_label.as_deref()
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Base (undisplaced) particle data
    pub fn cloud(&self) -> &ParticleCloud {
        &self.cloud
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set opacity, clamped to `[0, 1]`
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the uniform scale; non-positive values collapse to `f32::EPSILON`
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = if scale > f32::EPSILON {
            scale
        } else {
            f32::EPSILON
        };
    }

    /// Seconds of animation last applied
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && !self.cloud.is_empty()
    }

    /// Recompute displayed positions and point sizes for `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        self.displaced.clear();
        self.point_sizes.clear();
        for particle in self.cloud.iter() {
            self.displaced
                .push(particle.position + oscillation(elapsed, particle.phase));
            self.point_sizes
                .push(BASE_POINT_SIZE * particle.size_class * twinkle(elapsed, particle.phase));
        }
    }

    /// Positions after drift, in banner-local space
    pub fn displaced_positions(&self) -> &[Vec3] {
        &self.displaced
    }

    /// Unprojected point sizes; divide by view depth to get pixels
    pub fn point_sizes(&self) -> &[f32] {
        &self.point_sizes
    }

    /// Uniform scale, then translation to the banner depth
    pub fn model_transform(&self) -> Mat4 {
        Mat4::translation(0.0, 0.0, self.depth).mul(&Mat4::scale(self.scale, self.scale, self.scale))
    }

    pub fn shading(&self) -> PointShading {
        PointShading::new(self.tint, self.opacity)
    }
}

/// Owner of all text banners in a scene
#[derive(Clone, Debug, Default)]
pub struct TextParticleSystem {
    banners: Vec<TextBanner>,
}

impl TextParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, banner: TextBanner) -> BannerId {
        tracing::debug!(
            "Adding banner {:?} with {} particles at z={}",
            banner.label(),
            banner.cloud().len(),
            banner.depth()
        );
        self.banners.push(banner);
        BannerId(self.banners.len() - 1)
    }

    pub fn get(&self, id: BannerId) -> Option<&TextBanner> {
        self.banners.get(id.0)
    }

    pub fn get_mut(&mut self, id: BannerId) -> Option<&mut TextBanner> {
        self.banners.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextBanner> {
        self.banners.iter()
    }

    /// Advance every banner's drift and twinkle to `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) {
        for banner in &mut self.banners {
            banner.update(elapsed);
        }
    }

    /// Total particle count across banners
    pub fn particle_count(&self) -> usize {
        self.banners.iter().map(|b| b.cloud().len()).sum()
    }
}
