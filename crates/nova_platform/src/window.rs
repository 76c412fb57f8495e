//! Window and render surface abstraction

/// Size of a render surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// Width in logical pixels
    pub width: u32,
    /// Height in logical pixels
    pub height: u32,
    /// Device pixel ratio reported by the platform
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    /// Upper bound applied to the device pixel ratio when sizing buffers
    pub const MAX_PIXEL_RATIO: f64 = 2.0;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Width over height (1.0 for a degenerate surface)
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Pixel ratio clamped to `(0, MAX_PIXEL_RATIO]`
    pub fn clamped_pixel_ratio(&self) -> f64 {
        if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio.min(Self::MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Backing buffer size in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.clamped_pixel_ratio();
        (
            (self.width as f64 * ratio).round() as u32,
            (self.height as f64 * ratio).round() as u32,
        )
    }
}

/// Window abstraction trait
///
/// Implemented by whatever hosts the presentation.
pub trait Window {
    /// The render surface, if one can be created
    fn surface(&self) -> Option<SurfaceSize>;

    /// Request a redraw
    fn request_redraw(&self) {}
}

/// A window without a display, for drivers and tests
#[derive(Clone, Debug, Default)]
pub struct HeadlessWindow {
    surface: Option<SurfaceSize>,
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Some(SurfaceSize::new(width, height)),
        }
    }

    /// A window that cannot provide a surface
    pub fn without_surface() -> Self {
        Self { surface: None }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        if let Some(surface) = self.surface.as_mut() {
            surface.pixel_ratio = pixel_ratio;
        }
        self
    }
}

impl Window for HeadlessWindow {
    fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_clamped() {
        let surface = SurfaceSize::new(800, 600).with_pixel_ratio(3.0);
        assert_eq!(surface.clamped_pixel_ratio(), 2.0);
        assert_eq!(surface.physical_size(), (1600, 1200));
        assert_eq!(SurfaceSize::new(1, 1).with_pixel_ratio(0.0).clamped_pixel_ratio(), 1.0);
        assert_eq!(SurfaceSize::new(1, 1).with_pixel_ratio(1.5).clamped_pixel_ratio(), 1.5);
    }

    #[test]
    fn test_aspect() {
        assert!((SurfaceSize::new(1600, 800).aspect() - 2.0).abs() < 1e-6);
        assert_eq!(SurfaceSize::new(10, 0).aspect(), 1.0);
    }

    #[test]
    fn test_headless_without_surface() {
        assert!(HeadlessWindow::without_surface().surface().is_none());
        assert_eq!(
            HeadlessWindow::new(640, 480).with_pixel_ratio(2.0).surface(),
            Some(SurfaceSize::new(640, 480).with_pixel_ratio(2.0))
        );
    }
}
