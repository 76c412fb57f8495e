//! Soft round point shading
//!
//! Evaluates the fragment stage of a glowing point sprite on the CPU so the
//! look can be tested and reused by any renderer behind the render boundary.

use nova_core::Color;

/// Shading parameters of one point batch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointShading {
    pub tint: Color,
    pub opacity: f32,
}

impl PointShading {
    /// Blend weight towards white at the center of a point
    const WHITE_MIX: f32 = 0.6;

    pub fn new(tint: Color, opacity: f32) -> Self {
        Self { tint, opacity }
    }

    /// Radial strength at point-sprite coordinate `uv`, `None` outside the disc
    pub fn strength(uv: [f32; 2]) -> Option<f32> {
        let dx = uv[0] - 0.5;
        let dy = uv[1] - 0.5;
        let d = (dx * dx + dy * dy).sqrt();
        if d > 0.5 {
            return None;
        }
        let falloff = 1.0 - d * 2.0;
        Some(falloff * falloff)
    }

    /// Fragment color (straight alpha) or `None` when discarded
    pub fn fragment(&self, uv: [f32; 2]) -> Option<Color> {
        let strength = Self::strength(uv)?;
        let color = Color::lerp(&self.tint, &Color::WHITE, Self::WHITE_MIX * strength);
        Some(color.with_alpha(self.opacity * strength))
    }

    /// Additive blend of a fragment onto a destination color
    pub fn blend_additive(dst: Color, src: Color) -> Color {
        Color::rgba(
            dst.r + src.r * src.a,
            dst.g + src.g * src.a,
            dst.b + src.b * src.a,
            dst.a,
        )
    }
}
