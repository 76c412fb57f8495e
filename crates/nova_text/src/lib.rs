//! Text rasterization for Nova
//!
//! This crate provides:
//! - Font discovery (fontdb) and parsing (ttf-parser)
//! - Text shaping (HarfBuzz via rustybuzz)
//! - Glyph rasterization (swash)
//! - [`BannerCanvas`]: a label and optional sub-label painted into separate
//!   color channels of an RGBA canvas, ready for particle sampling

pub mod canvas;
pub mod font;
pub mod rasterizer;
pub mod registry;
pub mod shaper;

pub use canvas::{BannerCanvas, TextStyle};
pub use font::{FontFace, FontMetrics};
pub use rasterizer::{GlyphRasterizer, RasterizedGlyph};
pub use registry::{FontRegistry, GenericFont};
pub use shaper::{ShapedGlyph, ShapedText, TextShaper};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid font data")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
