//! Render boundary
//!
//! The session never owns a GPU pipeline. Each frame it hands a borrowed
//! [`FrameSnapshot`] to a [`RenderSurface`], which draws it however it likes.

use crate::camera::PerspectiveCamera;
use crate::input::Hint;
use crate::Result;
use image::RgbaImage;
use nova_core::Color;
use nova_particles::{Firework, Starfield, TextParticleSystem};
use nova_platform::SurfaceSize;

/// Exponential-squared distance fog
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub density: f32,
}

impl Fog {
    /// Fraction of fog color at view distance `distance`, in `[0, 1]`
    pub fn factor(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
    }
}

/// Everything a renderer needs to draw one frame
pub struct FrameSnapshot<'a> {
    /// Number of ticks run so far
    pub frame: u64,
    pub elapsed: f32,
    pub surface: SurfaceSize,
    pub camera: &'a PerspectiveCamera,
    pub fog: Fog,
    pub banners: &'a TextParticleSystem,
    pub starfield: &'a Starfield,
    pub fireworks: &'a [Firework],
    /// Sprite texture for firework points
    pub sprite: &'a RgbaImage,
    pub hint: &'a Hint,
}

impl FrameSnapshot<'_> {
    /// Points that would be drawn this frame
    pub fn point_count(&self) -> usize {
        let banners: usize = self
            .banners
            .iter()
            .filter(|b| b.is_visible())
            .map(|b| b.cloud().len())
            .sum();
        let fireworks: usize = self.fireworks.iter().map(|f| f.positions().len()).sum();
        banners + fireworks + self.starfield.len()
    }
}

/// Consumer of frame snapshots
pub trait RenderSurface {
    fn present(&mut self, frame: &FrameSnapshot<'_>) -> Result<()>;
}
