//! The particle capability shared by every variant

use flurry_core::{DrawContext, Point};

use crate::ambient::AmbientParticle;
use crate::burst::BurstParticle;

/// A short-lived, self-animating visual element
///
/// Opacity never increases. A particle is expired, and eligible for removal,
/// exactly when its opacity has reached zero or below.
pub trait Particle {
    /// Advance physics and decay by one frame
    fn update(&mut self);

    /// Draw the current state into the surface
    ///
    /// Callers isolate each draw between `save()` and `restore()`.
    fn draw(&self, ctx: &mut dyn DrawContext);

    /// Current opacity (1.0 at spawn)
    fn opacity(&self) -> f32;

    /// Current position in surface pixels
    fn position(&self) -> Point;

    fn is_expired(&self) -> bool {
        self.opacity() <= 0.0
    }

    /// Whether drawing would produce anything this frame
    fn is_visible(&self) -> bool {
        !self.is_expired()
    }
}

/// Which variant a particle is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Burst,
    Ambient,
}

/// Any particle variant, for mixed collections
#[derive(Clone, Debug)]
pub enum AnyParticle {
    Burst(BurstParticle),
    Ambient(AmbientParticle),
}

impl AnyParticle {
    pub fn kind(&self) -> ParticleKind {
        match self {
            AnyParticle::Burst(_) => ParticleKind::Burst,
            AnyParticle::Ambient(_) => ParticleKind::Ambient,
        }
    }

    pub fn as_burst(&self) -> Option<&BurstParticle> {
        match self {
            AnyParticle::Burst(p) => Some(p),
            AnyParticle::Ambient(_) => None,
        }
    }

    pub fn as_ambient(&self) -> Option<&AmbientParticle> {
        match self {
            AnyParticle::Ambient(p) => Some(p),
            AnyParticle::Burst(_) => None,
        }
    }
}

impl Particle for AnyParticle {
    fn update(&mut self) {
        match self {
            AnyParticle::Burst(p) => p.update(),
            AnyParticle::Ambient(p) => p.update(),
        }
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        match self {
            AnyParticle::Burst(p) => p.draw(ctx),
            AnyParticle::Ambient(p) => p.draw(ctx),
        }
    }

    fn opacity(&self) -> f32 {
        match self {
            AnyParticle::Burst(p) => p.opacity(),
            AnyParticle::Ambient(p) => p.opacity(),
        }
    }

    fn position(&self) -> Point {
        match self {
            AnyParticle::Burst(p) => p.position(),
            AnyParticle::Ambient(p) => p.position(),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            AnyParticle::Burst(p) => p.is_visible(),
            AnyParticle::Ambient(p) => p.is_visible(),
        }
    }
}

impl From<BurstParticle> for AnyParticle {
    fn from(particle: BurstParticle) -> Self {
        AnyParticle::Burst(particle)
    }
}

impl From<AmbientParticle> for AnyParticle {
    fn from(particle: AmbientParticle) -> Self {
        AnyParticle::Ambient(particle)
    }
}
