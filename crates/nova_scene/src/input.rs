//! Input routing
//!
//! Translates platform events into scene commands. Scroll positions become
//! normalized progress, pointer presses become launch requests in normalized
//! device coordinates (only while interaction is enabled) and resizes update
//! the tracked surface.

use crate::camera::screen_to_ndc;
use crate::timeline::TimelineState;
use nova_core::{Color, Vec2};
use nova_platform::{
    Event, InputEvent, MouseButton, MouseEvent, ScrollMetrics, SurfaceSize, WindowEvent,
};

/// Normalized scroll progress; `0` when the document cannot scroll
pub fn scroll_progress(metrics: &ScrollMetrics) -> f32 {
    let range = metrics.scroll_range();
    if !range.is_finite() || range <= 0.0 || !metrics.offset.is_finite() {
        return 0.0;
    }
    (metrics.offset / range).clamp(0.0, 1.0)
}

/// Prompt shown to the viewer
#[derive(Clone, Debug, PartialEq)]
pub struct Hint {
    pub text: &'static str,
    pub color: Color,
}

impl Hint {
    pub const SCROLL_TEXT: &'static str = "SCROLL DOWN ▼";
    pub const CLICK_TEXT: &'static str = "CLICK ANYWHERE!";

    pub fn scroll() -> Self {
        Self {
            text: Self::SCROLL_TEXT,
            color: Color::rgba(1.0, 1.0, 1.0, 0.8),
        }
    }

    pub fn click() -> Self {
        Self {
            text: Self::CLICK_TEXT,
            color: Color::from_hex(0xffd700),
        }
    }

    pub fn for_interaction(enabled: bool) -> Self {
        if enabled {
            Self::click()
        } else {
            Self::scroll()
        }
    }
}

/// A state change requested by input
#[derive(Clone, Debug, PartialEq)]
pub enum SceneCommand {
    SetScrollProgress(f32),
    /// Launch a firework through this NDC point
    Launch(Vec2),
    Resize(SurfaceSize),
    Close,
}

/// Stateful translator from platform events to [`SceneCommand`]s
#[derive(Clone, Debug)]
pub struct InputRouter {
    surface: SurfaceSize,
    hint_enabled: Option<bool>,
}

impl InputRouter {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            hint_enabled: None,
        }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Route one event given the current timeline state
    pub fn route(&mut self, event: &Event, state: &TimelineState) -> Option<SceneCommand> {
        match event {
            Event::Input(InputEvent::Scroll(metrics)) => {
                Some(SceneCommand::SetScrollProgress(scroll_progress(metrics)))
            }
            Event::Input(InputEvent::Mouse(MouseEvent::ButtonPressed { button, x, y })) => {
                if *button != MouseButton::Left {
                    return None;
                }
                if !state.interaction_enabled {
                    tracing::trace!(
                        "Ignoring pointer at ({}, {}): progress {:.2}",
                        x,
                        y,
                        state.scroll_progress
                    );
                    return None;
                }
                Some(SceneCommand::Launch(screen_to_ndc(
                    *x,
                    *y,
                    self.surface.width,
                    self.surface.height,
                )))
            }
            Event::Window(WindowEvent::Resized { width, height }) => {
                self.surface.width = *width;
                self.surface.height = *height;
                Some(SceneCommand::Resize(self.surface))
            }
            Event::Window(WindowEvent::ScaleFactorChanged { scale_factor }) => {
                self.surface.pixel_ratio = *scale_factor;
                Some(SceneCommand::Resize(self.surface))
            }
            Event::Window(WindowEvent::CloseRequested) => Some(SceneCommand::Close),
            Event::Frame => None,
        }
    }

    /// The hint for `interaction_enabled`, or `None` if it is already shown
    pub fn update_hint(&mut self, interaction_enabled: bool) -> Option<Hint> {
        if self.hint_enabled == Some(interaction_enabled) {
            return None;
        }
        self.hint_enabled = Some(interaction_enabled);
        Some(Hint::for_interaction(interaction_enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> TimelineState {
        TimelineState {
            scroll_progress: 0.95,
            interaction_enabled: true,
            elapsed: 0.0,
        }
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(&ScrollMetrics::default()), 0.0);
        let metrics = ScrollMetrics {
            offset: 2100.0,
            content_height: 5000.0,
            viewport_height: 800.0,
        };
        assert!((scroll_progress(&metrics) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_progress_guards_zero_range() {
        let metrics = ScrollMetrics {
            offset: 100.0,
            content_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&metrics), 0.0);
        let overscroll = ScrollMetrics {
            offset: 9000.0,
            content_height: 1000.0,
            viewport_height: 800.0,
        };
        assert_eq!(scroll_progress(&overscroll), 1.0);
    }

    #[test]
    fn test_pointer_ignored_until_enabled() {
        let mut router = InputRouter::new(SurfaceSize::new(800, 600));
        let click = Event::Input(InputEvent::click(400.0, 300.0));
        assert_eq!(router.route(&click, &TimelineState::default()), None);
        assert_eq!(router.route(&click, &enabled()), Some(SceneCommand::Launch(Vec2::ZERO)));
    }

    #[test]
    fn test_right_button_ignored() {
        let mut router = InputRouter::new(SurfaceSize::new(800, 600));
        let event = Event::Input(InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Right,
            x: 1.0,
            y: 1.0,
        }));
        assert_eq!(router.route(&event, &enabled()), None);
    }

    #[test]
    fn test_resize_updates_surface_and_ndc() {
        let mut router = InputRouter::new(SurfaceSize::new(800, 600).with_pixel_ratio(2.0));
        let command = router.route(&Event::resized(1000, 500), &enabled());
        assert_eq!(
            command,
            Some(SceneCommand::Resize(SurfaceSize::new(1000, 500).with_pixel_ratio(2.0)))
        );
        let click = Event::Input(InputEvent::click(1000.0, 0.0));
        assert_eq!(router.route(&click, &enabled()), Some(SceneCommand::Launch(Vec2::new(1.0, 1.0))));
    }

    #[test]
    fn test_hint_emitted_on_change_only() {
        let mut router = InputRouter::new(SurfaceSize::new(1, 1));
        assert_eq!(router.update_hint(false), Some(Hint::scroll()));
        assert_eq!(router.update_hint(false), None);
        let click = router.update_hint(true).unwrap();
        assert_eq!(click.text, "CLICK ANYWHERE!");
        assert_eq!(click.color.to_rgba8(), [255, 215, 0, 255]);
        assert_eq!(router.update_hint(true), None);
        assert_eq!(router.update_hint(false).map(|h| h.text), Some("SCROLL DOWN ▼"));
    }
}
