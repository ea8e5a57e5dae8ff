//! Ordered collection of live particles

use crate::particle::{AnyParticle, Particle};

/// Live particles in insertion order
///
/// New particles are appended at the tail, so iteration order is draw order
/// and later particles paint over earlier ones.
#[derive(Clone, Debug)]
pub struct Registry<P = AnyParticle> {
    particles: Vec<P>,
}

impl<P: Particle> Registry<P> {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Append a particle
    pub fn spawn(&mut self, particle: impl Into<P>) {
        self.particles.push(particle.into());
    }

    /// Append a batch of particles, returning how many were added
    pub fn spawn_batch<I>(&mut self, particles: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<P>,
    {
        let before = self.particles.len();
        self.particles.extend(particles.into_iter().map(Into::into));
        self.particles.len() - before
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live particles in draw order
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.particles.iter()
    }

    /// Drop every particle
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advance every particle one frame and drop the expired ones
    ///
    /// Each particle is visited exactly once, in order: it is updated, handed
    /// to `on_frame`, and removed on the spot if its opacity has reached zero.
    /// A particle therefore still reaches `on_frame` in the frame it expires.
    /// Survivors are compacted within the same pass and keep their relative
    /// order.
    ///
    /// Returns the number of particles removed.
    pub fn update_and_prune<F>(&mut self, mut on_frame: F) -> usize
    where
        F: FnMut(&P),
    {
        let before = self.particles.len();
        self.particles.retain_mut(|particle| {
            particle.update();
            on_frame(particle);
            !particle.is_expired()
        });
        before - self.particles.len()
    }
}

impl<P: Particle> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flurry_core::{DrawContext, Point};

    /// Particle with a fixed lifespan, tagged for order checks
    #[derive(Debug)]
    struct Countdown {
        tag: usize,
        frames_left: i32,
        updates: usize,
    }

    impl Countdown {
        fn new(tag: usize, frames: i32) -> Self {
            Self {
                tag,
                frames_left: frames,
                updates: 0,
            }
        }
    }

    impl Particle for Countdown {
        fn update(&mut self) {
            self.frames_left -= 1;
            self.updates += 1;
        }

        fn draw(&self, _ctx: &mut dyn DrawContext) {}

        fn opacity(&self) -> f32 {
            self.frames_left as f32
        }

        fn position(&self) -> Point {
            Point::ZERO
        }
    }

    fn tags(registry: &Registry<Countdown>) -> Vec<usize> {
        registry.iter().map(|p| p.tag).collect()
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut registry: Registry<Countdown> = Registry::new();
        registry.spawn(Countdown::new(0, 5));
        registry.spawn(Countdown::new(1, 5));
        assert_eq!(
            registry.spawn_batch((2..5).map(|tag| Countdown::new(tag, 5))),
            3
        );

        assert_eq!(registry.len(), 5);
        assert_eq!(tags(&registry), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_adjacent_expired_not_skipped() {
        let mut registry: Registry<Countdown> = Registry::new();
        registry.spawn(Countdown::new(0, 3));
        registry.spawn(Countdown::new(1, 1));
        registry.spawn(Countdown::new(2, 1));
        registry.spawn(Countdown::new(3, 3));

        let mut visited = Vec::new();
        let pruned = registry.update_and_prune(|p| visited.push(p.tag));

        assert_eq!(pruned, 2);
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(tags(&registry), vec![0, 3]);
        // No survivor updated twice
        assert!(registry.iter().all(|p| p.updates == 1));
    }

    #[test]
    fn test_expiring_particle_reaches_callback_once_more() {
        let mut registry: Registry<Countdown> = Registry::new();
        registry.spawn(Countdown::new(0, 3));

        let mut seen = Vec::new();
        assert_eq!(registry.update_and_prune(|p| seen.push(p.opacity())), 0);
        assert_eq!(registry.update_and_prune(|p| seen.push(p.opacity())), 0);
        assert_eq!(registry.len(), 1);

        // Third update drops opacity to zero: handed over, then removed in that same pass
        assert_eq!(registry.update_and_prune(|p| seen.push(p.opacity())), 1);
        assert!(registry.is_empty());
        assert_eq!(seen, vec![2.0, 1.0, 0.0]);

        assert_eq!(registry.update_and_prune(|p| seen.push(p.opacity())), 0);
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_membership_matches_opacity() {
        let mut registry: Registry<Countdown> = Registry::new();
        for tag in 0..20 {
            registry.spawn(Countdown::new(tag, (tag % 7) as i32 + 1));
        }

        for _ in 0..8 {
            registry.update_and_prune(|_| {});
            assert!(registry.iter().all(|p| p.opacity() > 0.0));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut registry: Registry<Countdown> = Registry::new();
        registry.spawn(Countdown::new(0, 3));
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.update_and_prune(|_| {}), 0);
    }
}
