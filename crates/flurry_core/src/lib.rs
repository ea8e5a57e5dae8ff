//! Flurry Core
//!
//! Foundational types shared by the Flurry particle engine:
//!
//! - **Geometry**: `Point`, `Size`, `Rect`, and 2D affine `Transform`
//! - **Color**: RGBA colors in 0.0..=1.0
//! - **Draw Context**: the Canvas-like surface API renderers draw into
//!
//! # Example
//!
//! ```rust
//! use flurry_core::{Color, DrawContext, DrawContextExt, Point, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
//!
//! ctx.save();
//! ctx.set_global_alpha(0.5);
//! ctx.translate(10.0, 10.0);
//! ctx.fill_circle(Point::new(0.0, 0.0), 8.0, Color::WHITE);
//! ctx.restore();
//!
//! assert_eq!(ctx.save_depth(), 0);
//! ```

pub mod draw;
pub mod geometry;

pub use draw::{CanvasState, DrawCommand, DrawContext, DrawContextExt, ImageId, RecordingContext};
pub use geometry::{Color, Point, Rect, Size, Transform};
