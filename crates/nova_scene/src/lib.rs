//! Nova Scene
//!
//! The scroll-driven presentation: two text banners made of particles sit at
//! different depths in a starfield. Scrolling moves the camera from the first
//! banner to the second while the first fades out and the second fades in.
//! Near the end of the scroll range, clicks launch fireworks onto the second
//! banner's plane.
//!
//! # Architecture
//!
//! - [`SceneConfig`] - every presentation constant, loadable from TOML
//! - [`InputRouter`] - platform events to [`SceneCommand`]s
//! - [`SceneTimeline`] - scroll progress to camera depth and banner fades
//! - [`Session`] - owns all state; `handle_event`, `tick`, `render`
//! - [`RenderSurface`] - the render boundary, fed a [`FrameSnapshot`] per frame
//!
//! # Example
//!
//! ```ignore
//! use nova_platform::{Event, HeadlessWindow, InputEvent};
//! use nova_scene::{SceneConfig, Session};
//! use rand::SeedableRng;
//!
//! let window = HeadlessWindow::new(1280, 720);
//! let rng = rand::rngs::StdRng::seed_from_u64(2026);
//! let mut session = Session::attach(SceneConfig::default(), &window, rng)?;
//!
//! session.handle_event(Event::Input(InputEvent::scroll(4000.0, 5000.0, 720.0)));
//! session.handle_event(Event::Input(InputEvent::click(640.0, 360.0)));
//! let stats = session.tick(1.0 / 60.0);
//! ```

pub mod camera;
pub mod config;
mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod timeline;

pub use camera::{screen_to_ndc, PerspectiveCamera, Ray};
pub use config::{
    BannerConfig, BannersConfig, CameraConfig, CanvasConfig, FogConfig, SceneConfig,
    TimelineConfig,
};
pub use error::{Result, SceneError};
pub use input::{scroll_progress, Hint, InputRouter, SceneCommand};
pub use render::{Fog, FrameSnapshot, RenderSurface};
pub use session::{FrameStats, Session};
pub use timeline::{SceneTimeline, TimelineFrame, TimelineState};
