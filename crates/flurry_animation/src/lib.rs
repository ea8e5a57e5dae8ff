//! Flurry Animation System
//!
//! Frame scheduling for continuously animated surfaces.
//!
//! # Features
//!
//! - **Running State**: A scheduler is started once and never stops
//! - **Frame Requests**: Each frame re-arms the next one, like `requestAnimationFrame`
//! - **Frame Timing**: Monotonic frame index and measured frame delta

pub mod scheduler;

pub use scheduler::{FrameInfo, FrameScheduler, DEFAULT_TARGET_FPS};
