//! Font faces and metrics
//!
//! Parses TTF/OTF data with ttf-parser and keeps the raw bytes alive for
//! shaping and rasterization.

use crate::{Result, TextError};
use std::sync::Arc;

/// Font metrics in font units
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Units per em (typically 1000 or 2048)
    pub units_per_em: u16,
    /// Distance from baseline to the top of the em box
    pub ascender: i16,
    /// Distance from baseline to the bottom of the em box (typically negative)
    pub descender: i16,
}

impl FontMetrics {
    /// Scale a value from font units to pixels
    pub fn scale(&self, value: i16, font_size: f32) -> f32 {
        value as f32 * font_size / self.units_per_em as f32
    }

    pub fn ascender_px(&self, font_size: f32) -> f32 {
        self.scale(self.ascender, font_size)
    }

    pub fn descender_px(&self, font_size: f32) -> f32 {
        self.scale(self.descender, font_size)
    }

    /// Baseline offset that puts the middle of the em box on an anchor line
    ///
    /// Returned value is added to the anchor's y (raster coordinates, y down).
    pub fn middle_baseline_offset(&self, font_size: f32) -> f32 {
        (self.ascender_px(font_size) + self.descender_px(font_size)) * 0.5
    }
}

/// A parsed font face
pub struct FontFace {
    /// Raw font data (kept alive for rustybuzz and swash)
    data: Arc<Vec<u8>>,
    /// Face index within the font file (for TTC files)
    face_index: u32,
    metrics: FontMetrics,
    family_name: String,
    weight: u16,
}

impl FontFace {
    /// Load a font from raw TTF/OTF data (uses face index 0)
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_with_index(data, 0)
    }

    /// Load a font from raw data with a specific face index (for TTC collections)
    pub fn from_data_with_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let data = Arc::new(data);

        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| TextError::FontParseError(format!("{:?}", e)))?;

        let metrics = FontMetrics {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
        };

        let family_name = face
            .names()
            .into_iter()
            .find(|n| n.name_id == ttf_parser::name_id::FAMILY)
            .and_then(|n| n.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let weight = face
            .tables()
            .os2
            .map(|os2| os2.weight().to_number())
            .unwrap_or(400);

        Ok(Self {
            data,
            face_index,
            metrics,
            family_name,
            weight,
        })
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Numeric weight from the OS/2 table (400 regular, 700 bold)
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Raw font data for shaping and rasterization
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    fn as_ttf_face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.face_index).ok()
    }

    /// Glyph ID for a character
    pub fn glyph_id(&self, c: char) -> Option<u16> {
        self.as_ttf_face()
            .and_then(|face| face.glyph_index(c))
            .map(|id| id.0)
    }

    /// Horizontal advance for a glyph in font units
    pub fn glyph_advance(&self, glyph_id: u16) -> Option<u16> {
        self.as_ttf_face()
            .and_then(|face| face.glyph_hor_advance(ttf_parser::GlyphId(glyph_id)))
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .field("weight", &self.weight)
            .field("face_index", &self.face_index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_data_is_rejected() {
        let err = FontFace::from_data(vec![0u8; 16]).unwrap_err();
        assert!(matches!(err, TextError::FontParseError(_)));
    }

    #[test]
    fn test_middle_baseline_offset() {
        let metrics = FontMetrics {
            units_per_em: 1000,
            ascender: 900,
            descender: -200,
        };
        // Em box spans [-900, +200] px around the baseline at 1000px
        assert!((metrics.middle_baseline_offset(1000.0) - 350.0).abs() < 1e-3);
    }
}
