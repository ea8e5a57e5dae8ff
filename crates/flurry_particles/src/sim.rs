//! The per-frame simulation loop

use flurry_animation::{FrameInfo, FrameScheduler};
use flurry_core::DrawContext;

use crate::particle::{AnyParticle, Particle};
use crate::registry::Registry;
use crate::renderer::Renderer;

/// What happened during one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame index since the loop started
    pub frame: u64,
    /// Particles advanced this frame
    pub updated: usize,
    /// Particles handed to the renderer, including those expiring this frame
    pub rendered: usize,
    /// Particles that produced draw calls
    pub drawn: usize,
    /// Particles removed after reaching zero opacity
    pub pruned: usize,
    /// Particles left in the registry
    pub live: usize,
}

/// Drives update, draw and prune over a registry, one frame per tick
///
/// The loop has a single running state. Once [`start`](Self::start)ed, every
/// tick re-arms the next, so a host that calls [`tick`](Self::tick) on each
/// display refresh keeps the animation going indefinitely.
#[derive(Debug)]
pub struct SimulationLoop<P = AnyParticle> {
    scheduler: FrameScheduler,
    registry: Registry<P>,
    renderer: Renderer,
}

impl<P: Particle> SimulationLoop<P> {
    pub fn new() -> Self {
        Self::with_scheduler(FrameScheduler::new())
    }

    pub fn with_scheduler(scheduler: FrameScheduler) -> Self {
        Self {
            scheduler,
            registry: Registry::new(),
            renderer: Renderer::new(),
        }
    }

    /// Enter the running state and request the first frame
    pub fn start(&mut self) {
        self.scheduler.start();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn registry(&self) -> &Registry<P> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry<P> {
        &mut self.registry
    }

    /// Run one frame if one has been requested
    ///
    /// Clears the surface, then takes every live particle in order through
    /// update, draw and prune-if-expired, and finally requests the next
    /// frame. A particle is rendered in the frame its opacity reaches zero
    /// and is gone before the next update pass. Returns `None` when the loop is not running or no frame
    /// was pending.
    pub fn tick(&mut self, ctx: &mut dyn DrawContext) -> Option<FrameStats> {
        if !self.scheduler.take_frame_request() {
            return None;
        }

        let frame = self.scheduler.begin_frame();
        let stats = self.run_frame(frame, ctx);
        self.scheduler.request_frame();

        tracing::trace!(
            "frame {}: updated={} rendered={} drawn={} pruned={} live={}",
            stats.frame,
            stats.updated,
            stats.rendered,
            stats.drawn,
            stats.pruned,
            stats.live
        );
        Some(stats)
    }

    fn run_frame(&mut self, frame: FrameInfo, ctx: &mut dyn DrawContext) -> FrameStats {
        let renderer = self.renderer;
        renderer.clear(ctx);

        let updated = self.registry.len();
        let mut rendered = 0;
        let mut drawn = 0;
        let pruned = self.registry.update_and_prune(|particle| {
            rendered += 1;
            if renderer.draw_particle(ctx, particle) {
                drawn += 1;
            }
        });

        FrameStats {
            frame: frame.index,
            updated,
            rendered,
            drawn,
            pruned,
            live: self.registry.len(),
        }
    }
}

impl<P: Particle> Default for SimulationLoop<P> {
    fn default() -> Self {
        Self::new()
    }
}
