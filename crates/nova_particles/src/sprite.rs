//! Firework sprite texture

use image::{Rgba, RgbaImage};

/// Square radial gradient: opaque white at the center, transparent at the edge
///
/// A zero `size` yields an empty image.
pub fn sprite_texture(size: u32) -> RgbaImage {
    if size == 0 {
        return RgbaImage::new(0, 0);
    }

    let radius = size as f32 * 0.5;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
        let alpha = ((1.0 - t) * 255.0).round() as u8;
        Rgba([255, 255, 255, alpha])
    })
}
