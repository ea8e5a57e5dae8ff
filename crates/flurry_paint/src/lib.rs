//! Flurry Paint/Canvas API
//!
//! A sized 2D drawing surface, similar to an HTML canvas element with its
//! 2D context. All core types are unified with flurry_core.
//!
//! # Example
//!
//! ```ignore
//! use flurry_paint::{Color, PaintContext, Point};
//! use flurry_core::{DrawContext, DrawContextExt};
//!
//! let mut ctx = PaintContext::new(800, 600);
//!
//! ctx.clear_all();
//! ctx.save();
//! ctx.set_global_alpha(0.8);
//! ctx.translate(50.0, 50.0);
//! ctx.fill_circle(Point::new(0.0, 0.0), 10.0, Color::WHITE);
//! ctx.restore();
//!
//! // Get commands for the backend
//! let commands = ctx.take_commands();
//! ```

pub mod context;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from flurry_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use flurry_core::{
    Color, DrawCommand, DrawContext, DrawContextExt, ImageId, Point, Rect, Size, Transform,
};

pub use context::PaintContext;
