//! Scroll timeline
//!
//! Maps normalized scroll progress onto the camera depth and the banner
//! fades, and eases the camera towards its target once per frame.

use crate::config::{CameraConfig, TimelineConfig};
use nova_animation::Approach;

/// Mutable presentation state shared by input handling and the frame tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimelineState {
    /// Normalized scroll position in `[0, 1]`
    pub scroll_progress: f32,
    /// Whether pointer launches are honored
    pub interaction_enabled: bool,
    /// Seconds of animation time
    pub elapsed: f32,
}

/// Values derived from the timeline for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineFrame {
    pub elapsed: f32,
    /// Eased camera depth
    pub camera_z: f32,
    pub old_opacity: f32,
    pub old_scale: f32,
    pub new_opacity: f32,
}

/// Scroll-driven controller for camera and banners
#[derive(Clone, Debug)]
pub struct SceneTimeline {
    config: TimelineConfig,
    z_start: f32,
    z_travel: f32,
    camera_z: Approach,
    state: TimelineState,
}

impl SceneTimeline {
    pub fn new(config: TimelineConfig, camera: &CameraConfig) -> Self {
        Self {
            config,
            z_start: camera.z_start,
            z_travel: camera.z_end_offset,
            camera_z: Approach::new(camera.z_start, camera.ease),
            state: TimelineState::default(),
        }
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn scroll_progress(&self) -> f32 {
        self.state.scroll_progress
    }

    pub fn interaction_enabled(&self) -> bool {
        self.state.interaction_enabled
    }

    /// Store a new scroll position; returns whether interaction toggled
    pub fn set_scroll_progress(&mut self, progress: f32) -> bool {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let was_enabled = self.state.interaction_enabled;
        self.state.scroll_progress = progress;
        self.state.interaction_enabled = progress >= self.config.interaction_threshold;
        was_enabled != self.state.interaction_enabled
    }

    /// Depth the camera is easing towards
    pub fn camera_target_z(&self) -> f32 {
        self.z_start + self.state.scroll_progress * self.z_travel
    }

    pub fn camera_z(&self) -> f32 {
        self.camera_z.value()
    }

    pub fn old_opacity(&self) -> f32 {
        self.config.old_opacity.sample(self.state.scroll_progress)
    }

    pub fn old_scale(&self) -> f32 {
        self.config.old_scale.sample(self.state.scroll_progress)
    }

    pub fn new_opacity(&self) -> f32 {
        self.config.new_opacity.sample(self.state.scroll_progress)
    }

    /// Advance by `dt` seconds and ease the camera one step
    pub fn tick(&mut self, dt: f32) -> TimelineFrame {
        if dt.is_finite() && dt > 0.0 {
            self.state.elapsed += dt;
        }
        self.camera_z.set_target(self.camera_target_z());
        let camera_z = self.camera_z.step();

        TimelineFrame {
            elapsed: self.state.elapsed,
            camera_z,
            old_opacity: self.old_opacity(),
            old_scale: self.old_scale(),
            new_opacity: self.new_opacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> SceneTimeline {
        SceneTimeline::new(TimelineConfig::default(), &CameraConfig::default())
    }

    #[test]
    fn test_mapping_at_start() {
        let mut timeline = timeline();
        timeline.set_scroll_progress(0.0);
        assert_eq!(timeline.old_opacity(), 1.0);
        assert_eq!(timeline.old_scale(), 1.0);
        assert_eq!(timeline.new_opacity(), 0.0);
        assert_eq!(timeline.camera_target_z(), 60.0);
        assert!(!timeline.interaction_enabled());
    }

    #[test]
    fn test_mapping_at_end() {
        let mut timeline = timeline();
        timeline.set_scroll_progress(1.0);
        assert_eq!(timeline.old_opacity(), 0.0);
        assert_eq!(timeline.old_scale(), 0.5);
        assert_eq!(timeline.new_opacity(), 1.0);
        assert_eq!(timeline.camera_target_z(), 1260.0);
        assert!(timeline.interaction_enabled());
    }

    #[test]
    fn test_midpoints_clamp() {
        let mut timeline = timeline();
        timeline.set_scroll_progress(0.1);
        assert!((timeline.old_opacity() - 0.5).abs() < 1e-5);
        assert!((timeline.old_scale() - 0.75).abs() < 1e-5);
        assert_eq!(timeline.new_opacity(), 0.0);

        timeline.set_scroll_progress(0.5);
        assert_eq!(timeline.old_opacity(), 0.0);
        assert_eq!(timeline.new_opacity(), 0.0);

        timeline.set_scroll_progress(0.75);
        assert!((timeline.new_opacity() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_interaction_threshold_inclusive() {
        let mut timeline = timeline();
        assert!(!timeline.set_scroll_progress(0.899));
        assert!(!timeline.interaction_enabled());
        assert!(timeline.set_scroll_progress(0.9));
        assert!(timeline.interaction_enabled());
        assert!(!timeline.set_scroll_progress(0.95));
        assert!(timeline.set_scroll_progress(0.2));
        assert!(!timeline.interaction_enabled());
    }

    #[test]
    fn test_progress_clamped() {
        let mut timeline = timeline();
        timeline.set_scroll_progress(3.0);
        assert_eq!(timeline.scroll_progress(), 1.0);
        timeline.set_scroll_progress(-1.0);
        assert_eq!(timeline.scroll_progress(), 0.0);
        timeline.set_scroll_progress(f32::NAN);
        assert_eq!(timeline.scroll_progress(), 0.0);
    }

    #[test]
    fn test_camera_eases_towards_target() {
        let mut timeline = timeline();
        timeline.set_scroll_progress(1.0);
        let first = timeline.tick(1.0 / 60.0);
        // 60 + (1260 - 60) * 0.08
        assert!((first.camera_z - 156.0).abs() < 1e-3);

        let mut previous = first.camera_z;
        for _ in 0..200 {
            let frame = timeline.tick(1.0 / 60.0);
            assert!(frame.camera_z >= previous);
            assert!(frame.camera_z <= 1260.0);
            previous = frame.camera_z;
        }
        assert!((previous - 1260.0).abs() < 0.1);
    }

    #[test]
    fn test_tick_advances_elapsed() {
        let mut timeline = timeline();
        timeline.tick(0.5);
        let frame = timeline.tick(0.25);
        assert_eq!(frame.elapsed, 0.75);
        assert_eq!(timeline.state().elapsed, 0.75);
        timeline.tick(-1.0);
        assert_eq!(timeline.state().elapsed, 0.75);
    }
}
