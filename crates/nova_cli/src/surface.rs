//! Render surface that logs instead of drawing

use nova_scene::{FrameSnapshot, RenderSurface, Result};

/// Counts what each frame would draw
#[derive(Debug, Default)]
pub struct LoggingSurface {
    pub frames: u64,
    pub peak_points: usize,
    pub last_points: usize,
}

impl LoggingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for LoggingSurface {
    fn present(&mut self, frame: &FrameSnapshot<'_>) -> Result<()> {
        let points = frame.point_count();
        self.frames += 1;
        self.last_points = points;
        self.peak_points = self.peak_points.max(points);

        tracing::trace!(
            "Frame {}: {} points, camera z {:.1}",
            frame.frame,
            points,
            frame.camera.z()
        );
        if frame.frame % 60 == 0 {
            let (width, height) = frame.surface.physical_size();
            tracing::debug!(
                "Frame {} ({:.1}s): {} points, {} fireworks, {}x{} px, hint {:?}",
                frame.frame,
                frame.elapsed,
                points,
                frame.fireworks.len(),
                width,
                height,
                frame.hint.text
            );
        }
        Ok(())
    }
}
