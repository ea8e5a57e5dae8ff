//! Paint context - Canvas-like drawing surface implementing DrawContext
//!
//! PaintContext pairs a RecordingContext with the canvas's pixel dimensions,
//! the way an HTML canvas element pairs its 2D context with `width`/`height`.
//! Resizing the canvas resets its drawing state, as assigning
//! `canvas.width` does on the web.

use flurry_core::{
    Color, DrawCommand, DrawContext, ImageId, Point, Rect, RecordingContext, Size, Transform,
};

/// The paint context used for 2D particle drawing
pub struct PaintContext {
    recording: RecordingContext,
    width: u32,
    height: u32,
}

impl PaintContext {
    /// Create a new paint context with the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            recording: RecordingContext::new(Size::new(width as f32, height as f32)),
            width,
            height,
        }
    }

    /// Pixel dimensions (width, height)
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Set the canvas pixel dimensions
    ///
    /// Returns `false` without touching the canvas when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }

        tracing::debug!(
            "PaintContext: resize {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
        self.recording
            .set_viewport_size(Size::new(width as f32, height as f32));
        self.recording.clear();
        true
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.recording.take_commands()
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DrawContext Implementation - delegates to RecordingContext
// ═══════════════════════════════════════════════════════════════════════════════

impl DrawContext for PaintContext {
    fn save(&mut self) {
        self.recording.save();
    }

    fn restore(&mut self) {
        self.recording.restore();
    }

    fn save_depth(&self) -> usize {
        self.recording.save_depth()
    }

    fn transform(&mut self, transform: Transform) {
        self.recording.transform(transform);
    }

    fn current_transform(&self) -> Transform {
        self.recording.current_transform()
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.recording.set_global_alpha(alpha);
    }

    fn global_alpha(&self) -> f32 {
        self.recording.global_alpha()
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.recording.clear_rect(rect);
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect) {
        self.recording.draw_image(image, rect);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.recording.fill_circle(center, radius, color);
    }

    fn viewport_size(&self) -> Size {
        self.recording.viewport_size()
    }
}
