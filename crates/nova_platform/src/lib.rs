//! Nova Platform Boundary
//!
//! Platform-agnostic types for the host the presentation runs in: a
//! [`Window`] that may or may not provide a render surface, and the events
//! the host delivers (scroll, pointer, resize, frame ticks).
//!
//! # Example
//!
//! ```ignore
//! use nova_platform::prelude::*;
//!
//! let window = HeadlessWindow::new(1280, 720);
//! let surface = window.surface().ok_or(PlatformError::SurfaceUnavailable)?;
//! let events = [
//!     Event::Input(InputEvent::scroll(0.0, 5000.0, 720.0)),
//!     Event::Frame,
//! ];
//! ```

mod error;
mod event;
mod input;
mod window;

pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, WindowEvent};
pub use input::{InputEvent, MouseButton, MouseEvent, ScrollMetrics};
pub use window::{HeadlessWindow, SurfaceSize, Window};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, WindowEvent};
    pub use crate::input::{InputEvent, MouseButton, MouseEvent, ScrollMetrics};
    pub use crate::window::{HeadlessWindow, SurfaceSize, Window};
}
