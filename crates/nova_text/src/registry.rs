//! Font registry for system font discovery and caching
//!
//! Uses fontdb to find fonts by family name or generic category. Known
//! platform font files are loaded eagerly; the full system scan is deferred
//! until a lookup misses. Generic lookups fall back to common named families.

use crate::font::FontFace;
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

/// Generic font category for fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenericFont {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

#[cfg(target_os = "macos")]
const KNOWN_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial.ttf",
];

#[cfg(target_os = "windows")]
const KNOWN_FONT_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const KNOWN_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
];

/// Font registry that discovers and caches fonts
pub struct FontRegistry {
    db: Database,
    /// Cached lookups (Some = found, None = known miss)
    faces: FxHashMap<String, Option<Arc<FontFace>>>,
    system_fonts_loaded: bool,
}

impl FontRegistry {
    /// Create a registry seeded with the known platform fonts
    pub fn new() -> Self {
        let mut db = Database::new();

        let mut loaded_count = 0;
        for path in KNOWN_FONT_PATHS {
            if Path::new(path).exists() && db.load_font_file(path).is_ok() {
                loaded_count += 1;
            }
        }
        tracing::debug!("Loaded {} known system fonts", loaded_count);

        Self {
            db,
            faces: FxHashMap::default(),
            system_fonts_loaded: false,
        }
    }

    /// Create a registry with no fonts and no system scan
    ///
    /// Lookups only succeed for fonts added with [`load_font_data`](Self::load_font_data).
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            faces: FxHashMap::default(),
            system_fonts_loaded: true,
        }
    }

    /// Load a font from raw data (bundled fonts); returns the number of faces added
    pub fn load_font_data(&mut self, data: Vec<u8>) -> usize {
        let before = self.db.len();
        self.db.load_font_data(data);
        let loaded = self.db.len() - before;
        if loaded > 0 {
            tracing::debug!("Loaded {} font faces from data", loaded);
            // New faces may satisfy previously missed lookups
            self.faces.retain(|_, face| face.is_some());
        }
        loaded
    }

    /// Number of faces currently known to the registry
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    fn ensure_system_fonts_loaded(&mut self) {
        if self.system_fonts_loaded {
            return;
        }
        tracing::debug!("Loading all system fonts (lazy scan)...");
        self.db.load_system_fonts();
        self.system_fonts_loaded = true;
        tracing::debug!("System fonts loaded: {} faces", self.db.len());
    }

    /// Load a named family at a weight (100-900)
    pub fn load_font(&mut self, name: &str, weight: u16) -> Result<Arc<FontFace>> {
        self.load_family(name.to_string(), Family::Name(name), weight)
    }

    /// Load a generic family at a weight
    pub fn load_generic(&mut self, generic: GenericFont, weight: u16) -> Result<Arc<FontFace>> {
        let family = match generic {
            GenericFont::SansSerif => Family::SansSerif,
            GenericFont::Serif => Family::Serif,
            GenericFont::Monospace => Family::Monospace,
        };
        self.load_family(format!("__generic_{:?}", generic), family, weight)
    }

    /// Load a named family, falling back to a generic one
    pub fn load_with_fallback(
        &mut self,
        name: Option<&str>,
        generic: GenericFont,
        weight: u16,
    ) -> Result<Arc<FontFace>> {
        if let Some(name) = name {
            let already_tried = self.faces.contains_key(&cache_key(name, weight));
            match self.load_font(name, weight) {
                Ok(face) => return Ok(face),
                Err(_) if !already_tried => {
                    tracing::warn!(
                        "Font '{}' (weight={}) not found, falling back to {:?}",
                        name,
                        weight,
                        generic
                    );
                }
                Err(_) => {}
            }
        }
        self.load_generic(generic, weight)
    }

    fn load_family(&mut self, key: String, family: Family<'_>, weight: u16) -> Result<Arc<FontFace>> {
        let key = cache_key(&key, weight);
        if let Some(cached) = self.faces.get(&key) {
            return cached
                .clone()
                .ok_or_else(|| TextError::FontLoadError(format!("{} not found (cached)", key)));
        }

        let id = match self.query(family, weight) {
            Some(id) => Some(id),
            None if !self.system_fonts_loaded => {
                self.ensure_system_fonts_loaded();
                self.query(family, weight)
            }
            None => None,
        };

        let Some(id) = id else {
            self.faces.insert(key.clone(), None);
            return Err(TextError::FontLoadError(format!("{} not found", key)));
        };

        let face = self
            .db
            .with_face_data(id, |data, face_index| {
                FontFace::from_data_with_index(data.to_vec(), face_index)
            })
            .ok_or(TextError::InvalidFontData)??;
        let face = Arc::new(face);

        tracing::debug!("Resolved {} -> {:?}", key, face);
        self.faces.insert(key, Some(Arc::clone(&face)));
        Ok(face)
    }

    fn query(&self, family: Family<'_>, weight: u16) -> Option<fontdb::ID> {
        if let Some(id) = self.query_one(family, weight) {
            return Some(id);
        }

        // Generic family queries may not match fonts loaded by path
        let id = fallback_names(family)
            .iter()
            .find_map(|name| self.query_one(Family::Name(name), weight));
        if id.is_some() {
            tracing::debug!("Generic {:?} resolved through a named family", family);
        }
        id
    }

    fn query_one(&self, family: Family<'_>, weight: u16) -> Option<fontdb::ID> {
        let families = [family];
        self.db.query(&Query {
            families: &families,
            weight: Weight(weight),
            style: Style::Normal,
            stretch: Stretch::Normal,
        })
    }
}

/// Named families tried when a generic query misses
fn fallback_names(family: Family<'_>) -> &'static [&'static str] {
    match family {
        Family::SansSerif => &[
            "Helvetica",
            "Arial",
            "Liberation Sans",
            "Noto Sans",
            "DejaVu Sans",
            "Roboto",
        ],
        Family::Serif => &["Times New Roman", "Liberation Serif", "Noto Serif", "DejaVu Serif"],
        Family::Monospace => &["Menlo", "Consolas", "Liberation Mono", "DejaVu Sans Mono"],
        _ => &[],
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_key(name: &str, weight: u16) -> String {
    format!("{}:w{}", name, weight)
}

/// First readable file among the known platform fonts
#[cfg(test)]
pub(crate) fn known_font_data() -> Option<Vec<u8>> {
    KNOWN_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok())
}
