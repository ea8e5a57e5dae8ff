//! Window abstraction and configuration

/// Window configuration
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in physical pixels
    pub width: u32,
    /// Initial height in physical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Flurry".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Window abstraction trait
///
/// The viewport size source: reports the current size, with changes
/// announced through `WindowEvent::Resized`.
pub trait Window: Send {
    /// Get window size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Request a redraw
    fn request_redraw(&self);

    /// Check if the window is visible
    fn is_visible(&self) -> bool;
}
