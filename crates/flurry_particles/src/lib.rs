//! Flurry Particles
//!
//! A decorative particle engine for 2D canvas surfaces.
//!
//! # Components
//!
//! - **Particle Model**: [`BurstParticle`] (rotating sprite under gravity) and
//!   [`AmbientParticle`] (rising colored circle), both implementing [`Particle`]
//! - **Registry**: [`Registry`] keeps live particles in draw order and prunes
//!   expired ones in a single in-order pass
//! - **Renderer**: [`Renderer`] clears the surface and draws each particle in
//!   isolation
//! - **Simulation Loop**: [`SimulationLoop`] runs update, draw and prune once
//!   per scheduled frame
//! - **Spawn Triggers**: [`SpawnTriggers`] turn clicks and control activation
//!   into particle batches
//! - **Surface Sizing**: [`SurfaceSizer`] keeps the canvas matched to the
//!   viewport
//!
//! # Example
//!
//! ```rust
//! use flurry_core::{ImageId, Point, Rect};
//! use flurry_image::SpriteAsset;
//! use flurry_paint::PaintContext;
//! use flurry_particles::{spawn_rng, ParticleParams, SimulationLoop, SpawnTriggers};
//!
//! let mut canvas = PaintContext::new(800, 600);
//! let mut sim: SimulationLoop = SimulationLoop::new();
//! let mut rng = spawn_rng(Some(7));
//!
//! let triggers = SpawnTriggers::new(
//!     &ParticleParams::default(),
//!     SpriteAsset::pending(ImageId(1)),
//!     Rect::new(350.0, 280.0, 100.0, 40.0),
//! );
//! triggers.click(Point::new(50.0, 50.0), sim.registry_mut(), &mut rng);
//!
//! sim.start();
//! let stats = sim.tick(&mut canvas).unwrap();
//! assert_eq!(stats.live, 10);
//! ```

pub mod ambient;
pub mod burst;
pub mod params;
pub mod particle;
pub mod registry;
pub mod renderer;
pub mod sim;
pub mod sizing;
pub mod spawn;

pub use ambient::{AmbientOverrides, AmbientParticle};
pub use burst::BurstParticle;
pub use params::{
    AmbientParams, BurstParams, ExplosionParams, HeartParams, ParamsError, ParticleParams, Span,
    DEFAULT_HEART_BURST_COUNT, DEFAULT_PALETTE,
};
pub use particle::{AnyParticle, Particle, ParticleKind};
pub use registry::Registry;
pub use renderer::Renderer;
pub use sim::{FrameStats, SimulationLoop};
pub use sizing::SurfaceSizer;
pub use spawn::{spawn_rng, AmbientTrigger, ExplosionTrigger, SpawnOutcome, SpawnTriggers};
