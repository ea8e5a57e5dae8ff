//! Keeps the drawing surface matched to the viewport

use flurry_paint::PaintContext;

/// Syncs canvas pixel dimensions to the viewport
///
/// Particles live in absolute surface coordinates and are not touched by a
/// resize.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceSizer {
    resizes: u64,
}

impl SurfaceSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas to exactly the viewport size
    ///
    /// Returns `true` if the canvas dimensions changed. Calling again with
    /// the same viewport is a no-op.
    pub fn fit(&mut self, canvas: &mut PaintContext, width: u32, height: u32) -> bool {
        if !canvas.resize(width, height) {
            return false;
        }

        self.resizes += 1;
        tracing::debug!("surface sized to {}x{}", width, height);
        true
    }

    /// Number of fits that changed the canvas
    pub fn resize_count(&self) -> u64 {
        self.resizes
    }
}
