//! Flurry Platform Abstraction Layer
//!
//! Platform-agnostic traits and types for the boundary between the particle
//! engine and its host: viewport size, pointer input, lifecycle, and frame
//! ticks.
//!
//! # Architecture
//!
//! - [`Window`] - Viewport size source and redraw requests
//! - [`EventLoop`] - Delivers [`Event`]s to a single handler on the render thread
//!
//! # Host Implementations
//!
//! - [`headless::ScriptedEventLoop`] - Replays a fixed event script with
//!   deterministic frame timing
//!
//! # Example
//!
//! ```ignore
//! use flurry_platform::*;
//!
//! let event_loop = ScriptedEventLoop::new(WindowConfig::default(), 120)?;
//!
//! event_loop.run(|event, window| {
//!     match event {
//!         Event::Frame => {
//!             // Render frame
//!         }
//!         Event::Window(WindowEvent::CloseRequested) => {
//!             return ControlFlow::Exit;
//!         }
//!         _ => {}
//!     }
//!     ControlFlow::Continue
//! })?;
//! ```

mod error;
mod event;
pub mod headless;
mod input;
mod window;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
pub use headless::{HeadlessWindow, ScriptedEvent, ScriptedEventLoop};
pub use input::{InputEvent, MouseButton, MouseEvent, TouchEvent};
pub use window::{Window, WindowConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
    pub use crate::input::{InputEvent, MouseButton, MouseEvent, TouchEvent};
    pub use crate::window::{Window, WindowConfig};
}
