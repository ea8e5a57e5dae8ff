//! Spawn triggers: turn input into batches of new particles

use flurry_core::{Point, Rect};
use flurry_image::SpriteAsset;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ambient::{AmbientOverrides, AmbientParticle};
use crate::burst::BurstParticle;
use crate::params::{AmbientParams, BurstParams, ParticleParams, DEFAULT_HEART_BURST_COUNT};
use crate::particle::AnyParticle;
use crate::registry::Registry;

/// Random source used for spawning
///
/// A fixed seed gives a reproducible run; `None` seeds from the OS.
pub fn spawn_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Sprite burst fired when the control is activated
#[derive(Clone, Debug)]
pub struct ExplosionTrigger {
    count: usize,
    params: BurstParams,
    sprite: SpriteAsset,
}

impl ExplosionTrigger {
    pub fn new(params: &ParticleParams, sprite: SpriteAsset) -> Self {
        Self {
            count: params.explosion.count,
            params: params.explosion.apply(&params.burst),
            sprite,
        }
    }

    /// Spawn a burst at the center of the control's on-screen bounds
    pub fn fire<R: Rng + ?Sized>(
        &self,
        control: Rect,
        registry: &mut Registry<AnyParticle>,
        rng: &mut R,
    ) -> usize {
        self.fire_at(control.center(), registry, rng)
    }

    /// Spawn a burst at a point
    pub fn fire_at<R: Rng + ?Sized>(
        &self,
        at: Point,
        registry: &mut Registry<AnyParticle>,
        rng: &mut R,
    ) -> usize {
        let spawned = registry.spawn_batch(
            (0..self.count)
                .map(|_| BurstParticle::new(at, self.sprite.clone(), &self.params, &mut *rng)),
        );
        tracing::debug!("explosion at ({}, {}): {} particles", at.x, at.y, spawned);
        spawned
    }
}

/// Circle burst fired by page clicks
#[derive(Clone, Debug)]
pub struct AmbientTrigger {
    count: usize,
    params: AmbientParams,
}

impl AmbientTrigger {
    pub fn new(params: &ParticleParams) -> Self {
        Self {
            count: params.heart.count,
            params: params.ambient.clone(),
        }
    }

    /// Spawn the per-click batch at a point
    pub fn fire<R: Rng + ?Sized>(
        &self,
        at: Point,
        registry: &mut Registry<AnyParticle>,
        rng: &mut R,
    ) -> usize {
        self.heart_burst(at, Some(self.count), AmbientOverrides::default(), registry, rng)
    }

    /// Spawn `count` particles at a point (20 when not given)
    pub fn heart_burst<R: Rng + ?Sized>(
        &self,
        at: Point,
        count: Option<usize>,
        overrides: AmbientOverrides,
        registry: &mut Registry<AnyParticle>,
        rng: &mut R,
    ) -> usize {
        let count = count.unwrap_or(DEFAULT_HEART_BURST_COUNT);
        let spawned = registry.spawn_batch((0..count).map(|_| {
            AmbientParticle::with_overrides(at, overrides, &self.params, &mut *rng)
        }));
        tracing::debug!("heart burst at ({}, {}): {} particles", at.x, at.y, spawned);
        spawned
    }
}

/// What a pointer release spawned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnOutcome {
    /// Sprite particles from activating the control
    pub burst: usize,
    /// Circle particles from the page click
    pub ambient: usize,
}

impl SpawnOutcome {
    pub fn total(&self) -> usize {
        self.burst + self.ambient
    }
}

/// Routes pointer input to the two triggers
///
/// A click inside the control activates it first. The click then reaches the
/// page and spawns the ambient batch as well, unless the control is set to
/// consume its clicks.
#[derive(Clone, Debug)]
pub struct SpawnTriggers {
    control: Rect,
    consume_control_clicks: bool,
    explosion: ExplosionTrigger,
    ambient: AmbientTrigger,
}

impl SpawnTriggers {
    pub fn new(params: &ParticleParams, sprite: SpriteAsset, control: Rect) -> Self {
        Self {
            control,
            consume_control_clicks: false,
            explosion: ExplosionTrigger::new(params, sprite),
            ambient: AmbientTrigger::new(params),
        }
    }

    /// Stop clicks on the control from also reaching the page
    pub fn consume_control_clicks(mut self, consume: bool) -> Self {
        self.consume_control_clicks = consume;
        self
    }

    /// Activate the control directly (keyboard or programmatic activation)
    pub fn activate<R: Rng + ?Sized>(
        &self,
        registry: &mut Registry<AnyParticle>,
        rng: &mut R,
    ) -> SpawnOutcome {
        SpawnOutcome {
            burst: self.explosion.fire(self.control, registry, rng),
            ambient: 0,
        }
    }

    /// Handle a completed click or tap at a point
    pub fn click<R: Rng + ?Sized>(
        &self,
        at: Point,
        registry: &mut Registry<AnyParticle>,
        rng: &mut R,
    ) -> SpawnOutcome {
        let mut outcome = SpawnOutcome::default();

        if self.control.contains(at) {
            outcome.burst = self.explosion.fire(self.control, registry, rng);
            if self.consume_control_clicks {
                return outcome;
            }
        }

        outcome.ambient = self.ambient.fire(at, registry, rng);
        outcome
    }
}
