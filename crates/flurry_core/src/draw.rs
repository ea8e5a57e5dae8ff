//! Draw Context - the 2D surface API
//!
//! The `DrawContext` trait is the surface resource every Flurry renderer draws
//! into. It follows the HTML Canvas state model rather than a push/pop stack per
//! property:
//!
//! - `save()` snapshots the whole drawing state (transform + global alpha)
//! - `restore()` returns to the most recent snapshot
//! - `transform()` concatenates onto the current transform
//! - `set_global_alpha()` replaces the current alpha
//!
//! # Example
//!
//! ```ignore
//! fn paint(ctx: &mut dyn DrawContext) {
//!     ctx.save();
//!     ctx.set_global_alpha(0.5);
//!     ctx.translate(100.0, 100.0);
//!     ctx.rotate(std::f32::consts::FRAC_PI_4);
//!     ctx.draw_image(ImageId(1), Rect::new(-16.0, -16.0, 32.0, 32.0));
//!     ctx.restore();
//! }
//! ```

use smallvec::{smallvec, SmallVec};

use crate::geometry::{Color, Point, Rect, Size, Transform};

// ─────────────────────────────────────────────────────────────────────────────
// Image Types
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to an image registered with the surface backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The drawing state captured by `save()`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasState {
    pub transform: Transform,
    pub global_alpha: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            global_alpha: 1.0,
        }
    }
}

/// 2D drawing surface
pub trait DrawContext {
    // ─────────────────────────────────────────────────────────────────────────
    // State Stack
    // ─────────────────────────────────────────────────────────────────────────

    /// Push a copy of the current drawing state
    fn save(&mut self);

    /// Pop the most recently saved drawing state
    ///
    /// Unbalanced restores are ignored.
    fn restore(&mut self);

    /// Number of saved states above the root state
    fn save_depth(&self) -> usize;

    // ─────────────────────────────────────────────────────────────────────────
    // Transform and Alpha
    // ─────────────────────────────────────────────────────────────────────────

    /// Concatenate a transform onto the current transform
    fn transform(&mut self, transform: Transform);

    /// Get the current transform
    fn current_transform(&self) -> Transform;

    /// Set the alpha applied to subsequent draws
    ///
    /// Values outside 0.0..=1.0 (and NaN) are ignored.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Get the current global alpha
    fn global_alpha(&self) -> f32;

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Clear a region to transparent (not affected by transform or alpha)
    fn clear_rect(&mut self, rect: Rect);

    /// Draw an image into a rectangle in the current coordinate space
    fn draw_image(&mut self, image: ImageId, rect: Rect);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Size of the drawing surface
    fn viewport_size(&self) -> Size;
}

/// Extension trait with Canvas-style conveniences
pub trait DrawContextExt: DrawContext {
    /// Translate the current transform
    fn translate(&mut self, x: f32, y: f32) {
        self.transform(Transform::translate(x, y));
    }

    /// Rotate the current transform (angle in radians)
    fn rotate(&mut self, angle: f32) {
        self.transform(Transform::rotate(angle));
    }

    /// Clear the entire surface
    fn clear_all(&mut self) {
        let size = self.viewport_size();
        self.clear_rect(size.to_rect());
    }

    /// Run `f` between a `save()` / `restore()` pair
    fn isolated<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.save();
        f(&mut *self);
        self.restore();
    }
}

impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
///
/// Draw operations carry the transform and alpha that were current when they
/// were issued, so a backend can replay them without tracking state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // State
    Save,
    Restore,
    Transform(Transform),
    SetGlobalAlpha(f32),

    // Drawing
    ClearRect(Rect),
    DrawImage {
        image: ImageId,
        rect: Rect,
        transform: Transform,
        alpha: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
        transform: Transform,
        alpha: f32,
    },
}

impl DrawCommand {
    /// Whether this command produces pixels
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            DrawCommand::DrawImage { .. } | DrawCommand::FillCircle { .. }
        )
    }
}

/// A draw context that records commands for later execution
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    states: SmallVec<[CanvasState; 8]>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            states: smallvec![CanvasState::default()],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Change the surface size
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Clear all recorded commands and reset the state stack
    pub fn clear(&mut self) {
        self.commands.clear();
        self.states = smallvec![CanvasState::default()];
    }

    fn state(&self) -> CanvasState {
        self.states.last().copied().unwrap_or_default()
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        if self.states.is_empty() {
            self.states.push(CanvasState::default());
        }
        let last = self.states.len() - 1;
        &mut self.states[last]
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
        let current = self.state();
        self.states.push(current);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
        if self.states.len() > 1 {
            self.states.pop();
        } else {
            tracing::trace!("restore() without matching save()");
        }
    }

    fn save_depth(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    fn transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::Transform(transform));
        let state = self.state_mut();
        state.transform = state.transform.then(&transform);
    }

    fn current_transform(&self) -> Transform {
        self.state().transform
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        if !(0.0..=1.0).contains(&alpha) {
            tracing::trace!("ignoring global alpha {}", alpha);
            return;
        }
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
        self.state_mut().global_alpha = alpha;
    }

    fn global_alpha(&self) -> f32 {
        self.state().global_alpha
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect) {
        let state = self.state();
        self.commands.push(DrawCommand::DrawImage {
            image,
            rect,
            transform: state.transform,
            alpha: state.global_alpha,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let state = self.state();
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
            transform: state.transform,
            alpha: state.global_alpha,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.save();
        ctx.translate(10.0, 20.0);
        ctx.fill_circle(Point::new(0.0, 0.0), 5.0, Color::WHITE);
        ctx.restore();

        assert_eq!(ctx.commands().len(), 4);
        assert_eq!(ctx.save_depth(), 0);
    }

    #[test]
    fn test_save_restore_isolates_state() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.save();
        ctx.set_global_alpha(0.25);
        ctx.translate(50.0, 50.0);
        assert_eq!(ctx.save_depth(), 1);
        assert_eq!(ctx.global_alpha(), 0.25);
        ctx.restore();

        assert_eq!(ctx.global_alpha(), 1.0);
        assert!(ctx.current_transform().is_identity());
    }

    #[test]
    fn test_unbalanced_restore() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        // Should not panic when restoring past the root
        ctx.restore();
        assert_eq!(ctx.save_depth(), 0);
        assert_eq!(ctx.global_alpha(), 1.0);
    }

    #[test]
    fn test_out_of_range_alpha_ignored() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.set_global_alpha(0.5);
        ctx.set_global_alpha(-0.01);
        ctx.set_global_alpha(f32::NAN);
        ctx.set_global_alpha(1.5);

        assert_eq!(ctx.global_alpha(), 0.5);
        assert_eq!(ctx.commands().len(), 1);
    }

    #[test]
    fn test_draw_commands_capture_state() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        ctx.isolated(|ctx| {
            ctx.set_global_alpha(0.5);
            ctx.translate(30.0, 40.0);
            ctx.draw_image(ImageId(7), Rect::new(-5.0, -5.0, 10.0, 10.0));
        });

        let draw = ctx
            .commands()
            .iter()
            .find(|c| c.is_draw())
            .cloned()
            .unwrap();
        match draw {
            DrawCommand::DrawImage {
                image,
                transform,
                alpha,
                ..
            } => {
                assert_eq!(image, ImageId(7));
                assert_eq!(transform.translation(), Point::new(30.0, 40.0));
                assert_eq!(alpha, 0.5);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_clear_all_uses_viewport() {
        let mut ctx = RecordingContext::new(Size::new(320.0, 240.0));
        ctx.clear_all();
        assert_eq!(
            ctx.commands(),
            &[DrawCommand::ClearRect(Rect::new(0.0, 0.0, 320.0, 240.0))]
        );
    }
}
