//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The window has no surface that can be rendered into
    #[error("No render surface available")]
    SurfaceUnavailable,

    /// The surface exists but has a zero or invalid size
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
