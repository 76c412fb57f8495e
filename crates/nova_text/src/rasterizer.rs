//! Glyph rasterization using swash
//!
//! Converts glyph outlines into 8-bit coverage masks.

use crate::font::FontFace;
use crate::{Result, TextError};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

/// Rasterized glyph coverage mask with placement
#[derive(Debug, Clone, Default)]
pub struct RasterizedGlyph {
    /// Coverage (0 = empty, 255 = fully covered), row-major
    pub bitmap: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Offset from the pen position to the mask's left edge
    pub left: i32,
    /// Offset from the baseline up to the mask's top edge
    pub top: i32,
}

impl RasterizedGlyph {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage at mask coordinates
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.bitmap[(y * self.width + x) as usize]
    }
}

/// Glyph rasterizer using swash
pub struct GlyphRasterizer {
    /// Swash scale context (caches scaling state)
    scale_context: ScaleContext,
}

impl GlyphRasterizer {
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
        }
    }

    /// Rasterize a glyph at the given pixel size
    pub fn rasterize(
        &mut self,
        font: &FontFace,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<RasterizedGlyph> {
        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or(TextError::InvalidFontData)?;

        let mut scaler = self.scale_context.builder(swash_font).size(font_size).build();

        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        // Whitespace renders nothing
        let Some(image) = render.render(&mut scaler, glyph_id) else {
            return Ok(RasterizedGlyph::default());
        };

        Ok(RasterizedGlyph {
            bitmap: image.data,
            width: image.placement.width,
            height: image.placement.height,
            left: image.placement.left,
            top: image.placement.top,
        })
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
