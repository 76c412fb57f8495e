//! Error types for nova_scene

use nova_platform::PlatformError;
use thiserror::Error;

/// Errors that can occur while setting up or running a scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// Platform error (missing or zero-sized surface)
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Failed to parse a configuration file
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Failed to serialize the configuration
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Failed to read a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A color string is not `#rrggbb`
    #[error("Invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),
}

/// Result type for nova_scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
