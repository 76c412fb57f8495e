//! Two-channel banner canvas
//!
//! Paints a label and an optional sub-label onto an opaque black RGBA canvas.
//! The label is drawn in pure red and the sub-label in pure green, so a later
//! pass can tell the two regions apart by channel alone.

use crate::font::FontFace;
use crate::rasterizer::{GlyphRasterizer, RasterizedGlyph};
use crate::registry::{FontRegistry, GenericFont};
use crate::shaper::TextShaper;
use crate::Result;
use image::{Rgba, RgbaImage};

/// Font and placement of one line of banner text
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Pixel size of the em box
    pub font_size: f32,
    /// Numeric weight (700 = bold)
    pub weight: u16,
    /// Fill color
    pub color: [u8; 3],
    /// Vertical offset of the middle anchor from the canvas center
    pub offset_y: f32,
}

impl TextStyle {
    /// Large bold red line, centered on the canvas
    pub fn label() -> Self {
        Self {
            font_size: 350.0,
            weight: 700,
            color: [255, 0, 0],
            offset_y: 0.0,
        }
    }

    /// Smaller bold green line below the label
    pub fn sub_label() -> Self {
        Self {
            font_size: 120.0,
            weight: 700,
            color: [0, 255, 0],
            offset_y: 250.0,
        }
    }
}

/// Renders banner text into an RGBA canvas
pub struct BannerCanvas {
    width: u32,
    height: u32,
    family: Option<String>,
    label_style: TextStyle,
    sub_label_style: TextStyle,
    registry: FontRegistry,
    shaper: TextShaper,
    rasterizer: GlyphRasterizer,
}

impl BannerCanvas {
    pub const DEFAULT_WIDTH: u32 = 2048;
    pub const DEFAULT_HEIGHT: u32 = 1024;

    /// Canvas of the given size backed by the system font registry
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_registry(width, height, FontRegistry::new())
    }

    pub fn with_registry(width: u32, height: u32, registry: FontRegistry) -> Self {
        Self {
            width,
            height,
            family: Some("Arial".to_string()),
            label_style: TextStyle::label(),
            sub_label_style: TextStyle::sub_label(),
            registry,
            shaper: TextShaper::new(),
            rasterizer: GlyphRasterizer::new(),
        }
    }

    /// Preferred font family (`None` goes straight to the generic sans-serif)
    pub fn with_family(mut self, family: Option<String>) -> Self {
        self.family = family;
        self
    }

    pub fn with_styles(mut self, label: TextStyle, sub_label: TextStyle) -> Self {
        self.label_style = label;
        self.sub_label_style = sub_label;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render `label` and optional `sub_label`.
    ///
    /// Never fails: if no font can be resolved the blank canvas is returned
    /// and a warning is logged.
    pub fn render(&mut self, label: &str, sub_label: Option<&str>) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, Rgba([0, 0, 0, 255]));

        let label_style = self.label_style.clone();
        if let Err(err) = self.paint_line(&mut canvas, label, &label_style) {
            tracing::warn!("Could not rasterize label {:?}: {}; using blank canvas", label, err);
            return canvas;
        }

        if let Some(sub) = sub_label {
            let sub_style = self.sub_label_style.clone();
            if let Err(err) = self.paint_line(&mut canvas, sub, &sub_style) {
                tracing::warn!("Could not rasterize sub-label {:?}: {}", sub, err);
            }
        }

        tracing::debug!(
            "Rendered banner {:?}/{:?} into {}x{} canvas",
            label,
            sub_label,
            self.width,
            self.height
        );
        canvas
    }

    fn paint_line(&mut self, canvas: &mut RgbaImage, text: &str, style: &TextStyle) -> Result<()> {
        let font = self.registry.load_with_fallback(
            self.family.as_deref(),
            GenericFont::SansSerif,
            style.weight,
        )?;

        let shaped = self.shaper.shape(text, &font, style.font_size);
        let anchor_y = self.height as f32 * 0.5 + style.offset_y;
        let baseline = anchor_y + font.metrics().middle_baseline_offset(style.font_size);
        let mut pen_x = self.width as f32 * 0.5 - shaped.width_px() * 0.5;

        for glyph in &shaped.glyphs {
            let mask = self.rasterize(&font, glyph.glyph_id, style.font_size)?;
            if !mask.is_empty() {
                let x = pen_x + shaped.scale(glyph.x_offset) + mask.left as f32;
                let y = baseline - shaped.scale(glyph.y_offset) - mask.top as f32;
                blit_coverage(canvas, &mask, x.round() as i64, y.round() as i64, style.color);
            }
            pen_x += shaped.scale(glyph.x_advance);
        }
        Ok(())
    }

    fn rasterize(&mut self, font: &FontFace, glyph_id: u16, size: f32) -> Result<RasterizedGlyph> {
        self.rasterizer.rasterize(font, glyph_id, size)
    }
}

/// Composite a coverage mask onto the canvas (source-over, opaque destination)
pub(crate) fn blit_coverage(
    canvas: &mut RgbaImage,
    mask: &RasterizedGlyph,
    origin_x: i64,
    origin_y: i64,
    color: [u8; 3],
) {
    let (width, height) = canvas.dimensions();
    for my in 0..mask.height {
        let py = origin_y + my as i64;
        if py < 0 || py >= height as i64 {
            continue;
        }
        for mx in 0..mask.width {
            let px = origin_x + mx as i64;
            if px < 0 || px >= width as i64 {
                continue;
            }
            let a = mask.coverage(mx, my) as u32;
            if a == 0 {
                continue;
            }
            let dst = canvas.get_pixel_mut(px as u32, py as u32);
            for c in 0..3 {
                let blended = (color[c] as u32 * a + dst.0[c] as u32 * (255 - a) + 127) / 255;
                dst.0[c] = blended as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_yields_blank_canvas() {
        let mut canvas = BannerCanvas::with_registry(64, 32, FontRegistry::empty());
        let image = canvas.render("2026", Some("Happy New Year"));
        assert_eq!(image.dimensions(), (64, 32));
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of pixels whose channel exceeds 50
    fn channel_bounds(image: &RgbaImage, channel: usize) -> Option<(u32, u32, u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[channel] > 50)
            .fold(None, |bounds, (x, y, _)| match bounds {
                None => Some((x, y, x, y)),
                Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
            })
    }

    #[test]
    fn test_real_font_paints_centered_label_and_lower_sub_label() {
        let Some(data) = crate::registry::known_font_data() else {
            return;
        };
        let mut registry = FontRegistry::empty();
        assert!(registry.load_font_data(data) > 0);

        let mut canvas = BannerCanvas::with_registry(
            BannerCanvas::DEFAULT_WIDTH,
            BannerCanvas::DEFAULT_HEIGHT,
            registry,
        );
        let image = canvas.render("2026", Some("Happy New Year"));

        let (rx0, ry0, rx1, ry1) = channel_bounds(&image, 0).expect("label painted");
        let center_x = (rx0 + rx1) as f32 * 0.5;
        assert!((center_x - 1024.0).abs() < 40.0, "label center {}", center_x);
        let center_y = (ry0 + ry1) as f32 * 0.5;
        assert!((center_y - 512.0).abs() < 80.0, "label middle {}", center_y);

        let (gx0, gy0, gx1, _) = channel_bounds(&image, 1).expect("sub-label painted");
        assert!(gy0 > ry1, "sub-label top {} overlaps label bottom {}", gy0, ry1);
        let sub_center_x = (gx0 + gx1) as f32 * 0.5;
        assert!((sub_center_x - 1024.0).abs() < 40.0, "sub-label center {}", sub_center_x);

        // Blue stays empty and the alpha stays opaque
        assert!(image.pixels().all(|p| p.0[2] == 0 && p.0[3] == 255));
    }

    #[test]
    fn test_real_font_without_sub_label_has_no_green() {
        let Some(data) = crate::registry::known_font_data() else {
            return;
        };
        let mut registry = FontRegistry::empty();
        registry.load_font_data(data);
        let image = BannerCanvas::with_registry(512, 256, registry).render("25", None);
        assert!(channel_bounds(&image, 0).is_some());
        assert!(channel_bounds(&image, 1).is_none());
    }

    #[test]
    fn test_blit_full_coverage_replaces_channel() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mask = RasterizedGlyph {
            bitmap: vec![255, 128, 0, 255],
            width: 2,
            height: 2,
            left: 0,
            top: 0,
        };
        blit_coverage(&mut image, &mask, 1, 1, [255, 0, 0]);
        assert_eq!(image.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(2, 1).0, [128, 0, 0, 255]);
        assert_eq!(image.get_pixel(1, 2).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_blit_green_over_red_attenuates_red() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let mask = RasterizedGlyph {
            bitmap: vec![255],
            width: 1,
            height: 1,
            left: 0,
            top: 0,
        };
        blit_coverage(&mut image, &mask, 0, 0, [0, 255, 0]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_blit_clips_outside_canvas() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let mask = RasterizedGlyph {
            bitmap: vec![255; 9],
            width: 3,
            height: 3,
            left: 0,
            top: 0,
        };
        blit_coverage(&mut image, &mask, -2, -2, [0, 255, 0]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }
}
