//! Scene configuration
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```toml
//! [banners.new]
//! label = "2027"
//! color = "#ff8844"
//!
//! [fireworks]
//! burst_count = 150
//! ```

use crate::error::{Result, SceneError};
use nova_animation::RangeMap;
use nova_core::Color;
use nova_particles::{FireworkConfig, ParticleSampler, StarfieldConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete scene configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    pub fog: FogConfig,
    pub camera: CameraConfig,
    pub stars: StarfieldConfig,
    pub canvas: CanvasConfig,
    pub sampler: ParticleSampler,
    pub banners: BannersConfig,
    pub timeline: TimelineConfig,
    pub fireworks: FireworkConfig,
}

impl SceneConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the values serde cannot (color strings)
    pub fn validate(&self) -> Result<()> {
        self.fog.color()?;
        self.banners.old.tint()?;
        self.banners.new.tint()?;
        Ok(())
    }
}

fn parse_color(value: &str) -> Result<Color> {
    Color::from_hex_str(value).ok_or_else(|| SceneError::InvalidColor(value.to_string()))
}

/// Exponential-squared fog
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FogConfig {
    pub color: String,
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            density: 0.0015,
        }
    }
}

impl FogConfig {
    pub fn color(&self) -> Result<Color> {
        parse_color(&self.color)
    }
}

/// Camera lens and scroll travel
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Camera depth at scroll progress 0
    pub z_start: f32,
    /// Depth travelled between progress 0 and 1
    pub z_end_offset: f32,
    /// Fraction of the remaining distance covered per frame
    pub ease: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 3000.0,
            z_start: 60.0,
            z_end_offset: 1200.0,
            ease: 0.08,
        }
    }
}

/// Glyph canvas used to rasterize banner text
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Preferred font family; the generic sans-serif is used when missing
    pub font_family: Option<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 2048,
            height: 1024,
            font_family: Some("Arial".to_string()),
        }
    }
}

/// The outgoing and incoming banners
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BannersConfig {
    pub old: BannerConfig,
    pub new: BannerConfig,
}

impl Default for BannersConfig {
    fn default() -> Self {
        Self {
            old: BannerConfig {
                label: "2025".to_string(),
                sub_label: Some("Goodbye".to_string()),
                color: "#aaddff".to_string(),
                depth: 0.0,
            },
            new: BannerConfig {
                label: "2026".to_string(),
                sub_label: Some("Happy New Year".to_string()),
                color: "#ffdd44".to_string(),
                depth: 1180.0,
            },
        }
    }
}

/// One text banner
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BannerConfig {
    pub label: String,
    #[serde(default)]
    pub sub_label: Option<String>,
    /// Tint as `#rrggbb`
    pub color: String,
    /// World z of the banner plane
    #[serde(default)]
    pub depth: f32,
}

impl BannerConfig {
    pub fn tint(&self) -> Result<Color> {
        parse_color(&self.color)
    }
}

/// Scroll-driven fades and the interaction threshold
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub old_opacity: RangeMap,
    pub old_scale: RangeMap,
    pub new_opacity: RangeMap,
    /// Progress at which pointer launches become available (inclusive)
    pub interaction_threshold: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            old_opacity: RangeMap::new([0.0, 0.2], [1.0, 0.0]),
            old_scale: RangeMap::new([0.0, 0.2], [1.0, 0.5]),
            new_opacity: RangeMap::new([0.6, 0.9], [0.0, 1.0]),
            interaction_threshold: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.stars.count, 50_000);
        assert_eq!(config.fireworks.burst_count, 100);
        assert_eq!(config.sampler.stride, 3);
    }

    #[test]
    fn test_partial_override() {
        let config = SceneConfig::from_toml_str(
            r##"
            [banners.new]
            label = "2027"
            color = "#ff8844"

            [fireworks]
            burst_count = 150
            sampling = "uniform"
            "##,
        )
        .unwrap();
        assert_eq!(config.banners.new.label, "2027");
        assert_eq!(config.banners.new.depth, 0.0);
        assert_eq!(config.banners.new.sub_label, None);
        assert_eq!(config.banners.old, BannersConfig::default().old);
        assert_eq!(config.fireworks.burst_count, 150);
        assert_eq!(config.fireworks.gravity, 0.03);
        assert_eq!(config.fireworks.sampling, nova_particles::BurstSampling::Uniform);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = SceneConfig::from_toml_str(
            r#"
            [fog]
            color = "black"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::InvalidColor(ref c) if c == "black"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SceneConfig::from_toml_str("[camera\nfov = 10").unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_preserves_defaults() {
        let text = SceneConfig::default().to_toml().unwrap();
        assert!(text.contains("z_end_offset"));
        assert_eq!(SceneConfig::from_toml_str(&text).unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_banner_tints() {
        let banners = BannersConfig::default();
        assert_eq!(banners.new.tint().unwrap(), Color::from_hex(0xffdd44));
        assert_eq!(banners.old.tint().unwrap(), Color::from_hex(0xaaddff));
    }
}
