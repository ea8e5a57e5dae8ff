//! Flurry Application
//!
//! Wires a host event loop to the particle engine.
//!
//! # Example (Headless Run)
//!
//! ```ignore
//! use std::path::Path;
//!
//! use flurry_app::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = AppConfig::load_from_dir(Path::new("."))?;
//!     let scene = SceneScript::demo(config.control.bounds());
//!
//!     let mut event_loop = ScriptedEventLoop::new(config.window_config(), scene.frames)?;
//!     event_loop.schedule_all(scene.to_host_events(config.control.bounds()))?;
//!
//!     let totals = ParticleApp::new(&config)?.run(event_loop)?;
//!     println!("{} particles spawned", totals.spawned);
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod error;
pub mod scene;


pub use app::{ParticleApp, RunTotals, SPRITE_IMAGE};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use scene::{SceneAction, SceneEvent, SceneScript};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{ParticleApp, RunTotals};
    pub use crate::config::AppConfig;
    pub use crate::error::{AppError, Result};
    pub use crate::scene::{SceneAction, SceneEvent, SceneScript};
    pub use flurry_platform::{EventLoop, ScriptedEventLoop, WindowConfig};
}
