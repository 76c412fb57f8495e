//! Platform events

use crate::input::InputEvent;

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep delivering events
    #[default]
    Continue,
    /// Stop the driver loop
    Exit,
}

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window-related event
    Window(WindowEvent),
    /// Input event (scroll, pointer)
    Input(InputEvent),
    /// Frame tick - time to advance and render
    Frame,
}

/// Window events
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Viewport was resized
    Resized {
        /// New width in logical pixels
        width: u32,
        /// New height in logical pixels
        height: u32,
    },
    /// Device pixel ratio changed
    ScaleFactorChanged {
        /// New scale factor
        scale_factor: f64,
    },
    /// Window close was requested
    CloseRequested,
}

impl Event {
    /// Shorthand for a resize event
    pub fn resized(width: u32, height: u32) -> Self {
        Event::Window(WindowEvent::Resized { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }

    #[test]
    fn test_resized_shorthand() {
        assert_eq!(
            Event::resized(800, 600),
            Event::Window(WindowEvent::Resized {
                width: 800,
                height: 600
            })
        );
    }
}
