//! Text shaping using rustybuzz (HarfBuzz)
//!
//! Converts a label into positioned glyphs with kerning and ligatures.

use crate::font::FontFace;
use rustybuzz::{Face, UnicodeBuffer};

/// A shaped glyph with position information (font units)
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
}

/// Result of shaping a text string
#[derive(Debug, Clone)]
pub struct ShapedText {
    /// Shaped glyphs in visual order
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance width in font units
    pub total_advance: i32,
    pub font_size: f32,
    pub units_per_em: u16,
}

impl ShapedText {
    /// Total width in pixels
    pub fn width_px(&self) -> f32 {
        self.scale(self.total_advance)
    }

    /// Scale a font-unit value to pixels
    pub fn scale(&self, value: i32) -> f32 {
        value as f32 * self.font_size / self.units_per_em as f32
    }
}

/// Text shaper using HarfBuzz via rustybuzz
#[derive(Default)]
pub struct TextShaper;

impl TextShaper {
    pub fn new() -> Self {
        Self
    }

    /// Shape a text string using the given font
    pub fn shape(&self, text: &str, font_face: &FontFace, font_size: f32) -> ShapedText {
        let Some(face) = Face::from_slice(font_face.data(), font_face.face_index()) else {
            return self.fallback_shape(text, font_face, font_size);
        };

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&face, &[], buffer);

        let mut glyphs = Vec::with_capacity(output.len());
        let mut total_advance = 0i32;
        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            glyphs.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
                x_advance: pos.x_advance,
            });
            total_advance += pos.x_advance;
        }

        ShapedText {
            glyphs,
            total_advance,
            font_size,
            units_per_em: font_face.metrics().units_per_em,
        }
    }

    /// Per-character cmap lookup when rustybuzz cannot load the face
    fn fallback_shape(&self, text: &str, font_face: &FontFace, font_size: f32) -> ShapedText {
        tracing::debug!("rustybuzz rejected {:?}, using cmap fallback", font_face);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut total_advance = 0i32;

        for c in text.chars() {
            let glyph_id = font_face.glyph_id(c).unwrap_or(0);
            let advance = font_face.glyph_advance(glyph_id).unwrap_or(500) as i32;
            glyphs.push(ShapedGlyph {
                glyph_id,
                x_offset: 0,
                y_offset: 0,
                x_advance: advance,
            });
            total_advance += advance;
        }

        ShapedText {
            glyphs,
            total_advance,
            font_size,
            units_per_em: font_face.metrics().units_per_em,
        }
    }
}
