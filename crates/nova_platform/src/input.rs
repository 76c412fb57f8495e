//! Input event types for pointer and scroll

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse or primary pointer event
    Mouse(MouseEvent),
    /// Document scroll position changed
    Scroll(ScrollMetrics),
}

impl InputEvent {
    /// Left-button press at window coordinates
    pub fn click(x: f32, y: f32) -> Self {
        InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x,
            y,
        })
    }

    /// Scroll to `offset` within a document of `content_height` shown in `viewport_height`
    pub fn scroll(offset: f32, content_height: f32, viewport_height: f32) -> Self {
        InputEvent::Scroll(ScrollMetrics {
            offset,
            content_height,
            viewport_height,
        })
    }
}

/// Mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
    },
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Other button with index
    Other(u16),
}

/// Scroll state of the document that drives the presentation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset in logical pixels
    pub offset: f32,
    /// Total scrollable document height
    pub content_height: f32,
    /// Visible viewport height
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Scrollable distance (`content_height - viewport_height`)
    pub fn scroll_range(&self) -> f32 {
        self.content_height - self.viewport_height
    }
}
