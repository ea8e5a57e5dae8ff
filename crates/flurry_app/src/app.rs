//! Flurry application
//!
//! `ParticleApp` is the glue between a host event loop and the particle
//! engine. It owns the canvas, the simulation loop and the spawn triggers,
//! and reacts to host events:
//!
//! - first `Resumed`: size the canvas and start the loop
//! - `Resized`: resize the canvas (particles keep their coordinates)
//! - completed click or tap: fire the spawn triggers at that point
//! - `Frame`: run one simulation tick and hand the frame to the host
//! - `CloseRequested`: exit

use std::thread::JoinHandle;

use flurry_animation::FrameScheduler;
use flurry_core::{DrawCommand, ImageId, Point};
use flurry_image::SpriteAsset;
use flurry_paint::PaintContext;
use flurry_particles::{
    spawn_rng, FrameStats, Registry, SimulationLoop, SpawnOutcome, SpawnTriggers, SurfaceSizer,
};
use flurry_platform::{
    ControlFlow, Event, EventLoop, InputEvent, LifecycleEvent, Window, WindowEvent,
};
use rand_chacha::ChaCha8Rng;

use crate::config::AppConfig;
use crate::error::Result;

/// Handle the burst sprite is registered under
pub const SPRITE_IMAGE: ImageId = ImageId(1);

/// Totals accumulated over a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTotals {
    /// Frames simulated
    pub frames: u64,
    /// Particles spawned by triggers
    pub spawned: usize,
    /// Particles handed to the renderer, summed over frames
    pub rendered: usize,
    /// Particles drawn, summed over frames
    pub drawn: usize,
    /// Particles removed after fading out
    pub pruned: usize,
    /// Largest live particle count seen at the end of a frame
    pub peak_live: usize,
    /// Particles live when the run ended
    pub live: usize,
}

impl RunTotals {
    fn record_frame(&mut self, stats: &FrameStats) {
        self.frames += 1;
        self.rendered += stats.rendered;
        self.drawn += stats.drawn;
        self.pruned += stats.pruned;
        self.peak_live = self.peak_live.max(stats.live);
        self.live = stats.live;
    }

    fn record_spawn(&mut self, outcome: &SpawnOutcome) {
        self.spawned += outcome.total();
    }
}

/// The particle application
pub struct ParticleApp {
    canvas: PaintContext,
    sizer: SurfaceSizer,
    sim: SimulationLoop,
    triggers: SpawnTriggers,
    rng: ChaCha8Rng,
    sprite: SpriteAsset,
    sprite_loader: Option<JoinHandle<()>>,
    totals: RunTotals,
    last_frame: Vec<DrawCommand>,
}

impl ParticleApp {
    /// Build the application from a configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let (sprite, sprite_loader) = Self::load_sprite(config);
        let control = config.control.bounds();
        let triggers = SpawnTriggers::new(&config.particles, sprite.clone(), control)
            .consume_control_clicks(config.control.consume_clicks);
        let scheduler = FrameScheduler::with_target_fps(config.engine.target_fps);

        match config.engine.seed {
            Some(seed) => tracing::info!("Random seed: {}", seed),
            None => tracing::debug!("Random seed: from entropy"),
        }

        Ok(Self {
            canvas: PaintContext::default(),
            sizer: SurfaceSizer::new(),
            sim: SimulationLoop::with_scheduler(scheduler),
            triggers,
            rng: spawn_rng(config.engine.seed),
            sprite,
            sprite_loader,
            totals: RunTotals::default(),
            last_frame: Vec::new(),
        })
    }

    fn load_sprite(config: &AppConfig) -> (SpriteAsset, Option<JoinHandle<()>>) {
        let Some(path) = config.sprite.path.clone() else {
            tracing::info!("No sprite configured; burst particles will not be drawn");
            return (SpriteAsset::pending(SPRITE_IMAGE), None);
        };

        if config.sprite.background {
            let (sprite, handle) = SpriteAsset::spawn_load(SPRITE_IMAGE, path);
            return (sprite, Some(handle));
        }

        match SpriteAsset::load(SPRITE_IMAGE, &path) {
            Ok(sprite) => {
                tracing::info!("Sprite loaded from {}", path.display());
                (sprite, None)
            }
            Err(e) => {
                tracing::warn!("Sprite failed to load: {}", e);
                (SpriteAsset::pending(SPRITE_IMAGE), None)
            }
        }
    }

    /// Run on a host event loop until it stops, returning the run totals
    pub fn run<E: EventLoop>(mut self, event_loop: E) -> Result<RunTotals> {
        event_loop.run(|event, window| self.handle_event(event, window))?;
        Ok(self.totals)
    }

    /// React to one host event
    pub fn handle_event<W: Window + ?Sized>(&mut self, event: Event, window: &W) -> ControlFlow {
        match event {
            Event::Lifecycle(LifecycleEvent::Resumed) => {
                if !self.sim.is_running() {
                    let (width, height) = window.size();
                    self.sizer.fit(&mut self.canvas, width, height);
                    self.sim.start();
                    tracing::info!("Particle loop started at {}x{}", width, height);
                } else {
                    tracing::debug!("Resumed");
                }
            }

            Event::Lifecycle(LifecycleEvent::Suspended) => {
                tracing::debug!("Suspended with {} live particles", self.sim.registry().len());
            }

            Event::Window(WindowEvent::Resized { width, height }) => {
                self.sizer.fit(&mut self.canvas, width, height);
            }

            Event::Window(WindowEvent::CloseRequested) => {
                tracing::info!("Close requested");
                return ControlFlow::Exit;
            }

            Event::Window(WindowEvent::Focused(focused)) => {
                tracing::trace!("Focused: {}", focused);
            }

            Event::Input(input) => self.handle_input(&input),

            Event::Frame => self.render_frame(window),
        }

        ControlFlow::Continue
    }

    fn handle_input(&mut self, input: &InputEvent) {
        let Some((x, y)) = input.click_position() else {
            return;
        };

        let outcome = self
            .triggers
            .click(Point::new(x, y), self.sim.registry_mut(), &mut self.rng);
        self.totals.record_spawn(&outcome);
    }

    fn render_frame<W: Window + ?Sized>(&mut self, window: &W) {
        let Some(stats) = self.sim.tick(&mut self.canvas) else {
            return;
        };

        self.totals.record_frame(&stats);
        self.last_frame = self.canvas.take_commands();
        window.request_redraw();

        if stats.frame % 60 == 0 {
            tracing::debug!(
                "frame {}: live={} drawn={} pruned={}",
                stats.frame,
                stats.live,
                stats.drawn,
                stats.pruned
            );
        }
    }

    /// Fire the explosion without a pointer event
    pub fn activate_control(&mut self) -> SpawnOutcome {
        let outcome = self.triggers.activate(self.sim.registry_mut(), &mut self.rng);
        self.totals.record_spawn(&outcome);
        outcome
    }

    /// Block until a background sprite decode has finished
    pub fn wait_for_sprite(&mut self) {
        if let Some(handle) = self.sprite_loader.take() {
            if handle.join().is_err() {
                tracing::warn!("Sprite loader thread panicked");
            }
        }
    }

    pub fn registry(&self) -> &Registry {
        self.sim.registry()
    }

    pub fn canvas(&self) -> &PaintContext {
        &self.canvas
    }

    pub fn sprite(&self) -> &SpriteAsset {
        &self.sprite
    }

    pub fn triggers(&self) -> &SpawnTriggers {
        &self.triggers
    }

    pub fn totals(&self) -> RunTotals {
        self.totals
    }

    /// Draw commands produced by the most recent frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }
}
