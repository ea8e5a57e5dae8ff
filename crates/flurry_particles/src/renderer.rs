//! Per-frame surface drawing

use flurry_core::{DrawContext, DrawContextExt};

use crate::particle::Particle;

/// Draws particles onto a surface
///
/// Every particle is drawn inside its own `save()`/`restore()` pair so
/// translation, rotation and alpha never carry over to the next particle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the whole surface
    pub fn clear(&self, ctx: &mut dyn DrawContext) {
        ctx.clear_all();
    }

    /// Draw one particle, returning whether it was drawn
    ///
    /// Expired particles and particles with nothing to show are skipped.
    pub fn draw_particle<P>(&self, ctx: &mut dyn DrawContext, particle: &P) -> bool
    where
        P: Particle + ?Sized,
    {
        if !particle.is_visible() {
            return false;
        }

        ctx.isolated(|ctx| particle.draw(ctx));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::AmbientParticle;
    use crate::burst::BurstParticle;
    use crate::params::{AmbientParams, BurstParams};
    use crate::particle::AnyParticle;
    use crate::registry::Registry;
    use flurry_core::{DrawCommand, ImageId, Point, RecordingContext, Size};
    use flurry_image::{ImageData, SpriteAsset};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sprite(ready: bool) -> SpriteAsset {
        if ready {
            let data = ImageData::from_rgba(vec![0u8; 4], 1, 1).unwrap();
            SpriteAsset::ready(ImageId(1), data)
        } else {
            SpriteAsset::pending(ImageId(1))
        }
    }

    fn mixed_registry(sprite_ready: bool) -> Registry<AnyParticle> {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut registry = Registry::new();
        registry.spawn(BurstParticle::new(
            Point::new(10.0, 10.0),
            sprite(sprite_ready),
            &BurstParams::default(),
            &mut rng,
        ));
        registry.spawn(AmbientParticle::new(
            Point::new(20.0, 20.0),
            &AmbientParams::default(),
            &mut rng,
        ));
        registry
    }

    fn draw_all(ctx: &mut RecordingContext, registry: &Registry<AnyParticle>) -> usize {
        let renderer = Renderer::new();
        renderer.clear(ctx);
        registry
            .iter()
            .filter(|particle| renderer.draw_particle(&mut *ctx, *particle))
            .count()
    }

    #[test]
    fn test_clear_then_draw_in_order() {
        let registry = mixed_registry(true);
        let mut ctx = RecordingContext::new(Size::new(640.0, 480.0));

        assert_eq!(draw_all(&mut ctx, &registry), 2);

        let commands = ctx.commands();
        assert_eq!(
            commands[0],
            DrawCommand::ClearRect(Size::new(640.0, 480.0).to_rect())
        );
        let draws: Vec<_> = commands.iter().filter(|c| c.is_draw()).collect();
        assert!(matches!(draws[0], DrawCommand::DrawImage { .. }));
        assert!(matches!(draws[1], DrawCommand::FillCircle { .. }));
    }

    #[test]
    fn test_state_does_not_leak_between_particles() {
        let registry = mixed_registry(true);
        let mut ctx = RecordingContext::new(Size::new(640.0, 480.0));
        draw_all(&mut ctx, &registry);

        assert_eq!(ctx.save_depth(), 0);
        let circle = ctx
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .cloned()
            .unwrap();
        match circle {
            DrawCommand::FillCircle {
                transform, alpha, ..
            } => {
                assert!(transform.is_identity());
                assert_eq!(alpha, 1.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_pending_sprite_skipped() {
        let registry = mixed_registry(false);
        let mut ctx = RecordingContext::new(Size::new(640.0, 480.0));

        assert_eq!(draw_all(&mut ctx, &registry), 1);
        assert_eq!(ctx.commands().iter().filter(|c| c.is_draw()).count(), 1);
    }
}
