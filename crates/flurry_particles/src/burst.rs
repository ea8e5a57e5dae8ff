//! Sprite particles thrown out by the explosion trigger

use flurry_core::{DrawContext, DrawContextExt, Point, Rect, Size};
use flurry_image::SpriteAsset;
use rand::Rng;

use crate::params::BurstParams;
use crate::particle::Particle;

/// A rotating, fading sprite under gravity
#[derive(Clone, Debug)]
pub struct BurstParticle {
    position: Point,
    size: f32,
    speed_x: f32,
    speed_y: f32,
    /// Degrees
    rotation: f32,
    rotation_speed: f32,
    opacity: f32,
    decay: f32,
    gravity: f32,
    sprite: SpriteAsset,
}

impl BurstParticle {
    /// Spawn a particle at `position` with parameters drawn from `params`
    pub fn new<R: Rng + ?Sized>(
        position: Point,
        sprite: SpriteAsset,
        params: &BurstParams,
        rng: &mut R,
    ) -> Self {
        Self {
            position,
            size: params.size.sample(rng),
            speed_x: params.speed_x.sample(rng),
            speed_y: params.speed_y.sample(rng),
            rotation: params.rotation.sample(rng),
            rotation_speed: params.rotation_speed.sample(rng),
            opacity: 1.0,
            decay: params.decay,
            gravity: params.gravity,
            sprite,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Velocity as (speed_x, speed_y) in pixels per frame
    pub fn velocity(&self) -> (f32, f32) {
        (self.speed_x, self.speed_y)
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Degrees per frame
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn sprite(&self) -> &SpriteAsset {
        &self.sprite
    }
}

impl Particle for BurstParticle {
    fn update(&mut self) {
        self.position.x += self.speed_x;
        self.position.y += self.speed_y;
        self.speed_y += self.gravity;
        self.rotation += self.rotation_speed;
        self.opacity -= self.decay;
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        // Sprite still decoding
        if !self.sprite.is_ready() {
            return;
        }

        ctx.set_global_alpha(self.opacity);
        ctx.translate(self.position.x, self.position.y);
        ctx.rotate(self.rotation.to_radians());
        ctx.draw_image(
            self.sprite.image_id(),
            Rect::from_center(Point::ZERO, Size::new(self.size, self.size)),
        );
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn position(&self) -> Point {
        self.position
    }

    fn is_visible(&self) -> bool {
        !self.is_expired() && self.sprite.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flurry_core::{DrawCommand, ImageId, RecordingContext};
    use flurry_image::ImageData;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ready_sprite() -> SpriteAsset {
        let data = ImageData::from_rgba(vec![255u8; 4], 1, 1).unwrap();
        SpriteAsset::ready(ImageId(1), data)
    }

    fn particle(sprite: SpriteAsset) -> BurstParticle {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        BurstParticle::new(Point::new(100.0, 100.0), sprite, &BurstParams::default(), &mut rng)
    }

    #[test]
    fn test_defaults_in_range() {
        let params = BurstParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let p = BurstParticle::new(Point::ZERO, ready_sprite(), &params, &mut rng);
            assert!(params.size.contains(p.size()));
            assert!(params.speed_x.contains(p.velocity().0));
            assert!(params.speed_y.contains(p.velocity().1));
            assert!(params.rotation.contains(p.rotation()));
            assert!(params.rotation_speed.contains(p.rotation_speed()));
            assert_eq!(p.opacity(), 1.0);
        }
    }

    #[test]
    fn test_update_physics() {
        let mut p = particle(ready_sprite());
        let (sx, sy) = p.velocity();
        let rotation = p.rotation();

        p.update();

        assert_eq!(p.position(), Point::new(100.0 + sx, 100.0 + sy));
        assert!((p.velocity().1 - (sy + 0.3)).abs() < 1e-6);
        assert_eq!(p.velocity().0, sx);
        assert!((p.rotation() - (rotation + p.rotation_speed())).abs() < 1e-4);
        assert!((p.opacity() - 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_non_increasing() {
        let mut p = particle(ready_sprite());
        let mut last = p.opacity();
        for _ in 0..150 {
            p.update();
            assert!(p.opacity() <= last);
            last = p.opacity();
        }
        assert!(p.is_expired());
    }

    #[test]
    fn test_lifespan_about_100_frames() {
        let mut p = particle(ready_sprite());
        for _ in 0..95 {
            p.update();
        }
        assert!(!p.is_expired());
        for _ in 0..10 {
            p.update();
        }
        assert!(p.is_expired());
    }

    #[test]
    fn test_draw_rotated_sprite() {
        let p = particle(ready_sprite());
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
        p.draw(&mut ctx);

        let draw = ctx
            .commands()
            .iter()
            .find(|c| c.is_draw())
            .cloned()
            .unwrap();
        match draw {
            DrawCommand::DrawImage {
                image,
                rect,
                transform,
                alpha,
            } => {
                assert_eq!(image, ImageId(1));
                assert_eq!(rect.width(), p.size());
                assert_eq!(rect.center(), Point::ZERO);
                assert_eq!(alpha, 1.0);
                let origin = transform.transform_point(Point::ZERO);
                assert!((origin.x - 100.0).abs() < 1e-4);
                assert!((origin.y - 100.0).abs() < 1e-4);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_pending_sprite_draws_nothing() {
        let mut p = particle(SpriteAsset::pending(ImageId(1)));
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));

        p.draw(&mut ctx);
        assert!(ctx.commands().is_empty());
        assert!(!p.is_visible());

        // Still updates and decays on schedule
        p.update();
        assert!((p.opacity() - 0.99).abs() < 1e-6);
    }
}
