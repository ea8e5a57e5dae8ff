//! Small fading circles spawned by page clicks

use flurry_core::{Color, DrawContext, Point};
use rand::Rng;

use crate::params::AmbientParams;
use crate::particle::Particle;

/// Explicit values for an ambient particle
///
/// Zero and NaN count as omitted and fall back to a random value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AmbientOverrides {
    /// Circle radius
    pub size: Option<f32>,
    /// Vertical speed in pixels per frame
    pub speed_y: Option<f32>,
}

impl AmbientOverrides {
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn speed_y(mut self, speed_y: f32) -> Self {
        self.speed_y = Some(speed_y);
        self
    }
}

fn given(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// A rising, fading filled circle
#[derive(Clone, Debug)]
pub struct AmbientParticle {
    position: Point,
    size: f32,
    speed_x: f32,
    speed_y: f32,
    opacity: f32,
    decay: f32,
    color: Color,
}

impl AmbientParticle {
    /// Spawn a particle with fully randomized parameters
    pub fn new<R: Rng + ?Sized>(position: Point, params: &AmbientParams, rng: &mut R) -> Self {
        Self::with_overrides(position, AmbientOverrides::default(), params, rng)
    }

    /// Spawn a particle, keeping any given size or vertical speed
    pub fn with_overrides<R: Rng + ?Sized>(
        position: Point,
        overrides: AmbientOverrides,
        params: &AmbientParams,
        rng: &mut R,
    ) -> Self {
        let size = given(overrides.size).unwrap_or_else(|| params.size.sample(rng));
        let speed_y = given(overrides.speed_y).unwrap_or_else(|| params.speed_y.sample(rng));
        let speed_x = params.speed_x.sample(rng);
        let color = params.pick_color(rng);

        Self {
            position,
            size,
            speed_x,
            speed_y,
            opacity: 1.0,
            decay: params.decay,
            color,
        }
    }

    /// Circle radius
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Velocity as (speed_x, speed_y) in pixels per frame
    pub fn velocity(&self) -> (f32, f32) {
        (self.speed_x, self.speed_y)
    }

    /// Palette color (always opaque; opacity is applied at draw time)
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Particle for AmbientParticle {
    fn update(&mut self) {
        self.position.x += self.speed_x;
        self.position.y += self.speed_y;
        self.opacity -= self.decay;
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_circle(self.position, self.size, self.color.with_alpha(self.opacity));
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_PALETTE;
    use flurry_core::{DrawCommand, RecordingContext, Size};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    fn in_palette(color: Color) -> bool {
        DEFAULT_PALETTE
            .iter()
            .any(|[r, g, b]| color == Color::from_rgb8(*r, *g, *b))
    }

    #[test]
    fn test_defaults_in_range() {
        let params = AmbientParams::default();
        let mut rng = rng();
        for _ in 0..200 {
            let p = AmbientParticle::new(Point::new(50.0, 50.0), &params, &mut rng);
            assert!(params.size.contains(p.size()));
            assert!(params.speed_x.contains(p.velocity().0));
            assert!(params.speed_y.contains(p.velocity().1));
            assert!(in_palette(p.color()));
            assert_eq!(p.opacity(), 1.0);
        }
    }

    #[test]
    fn test_explicit_overrides_kept() {
        let overrides = AmbientOverrides::default().size(20.0).speed_y(-5.0);
        let p = AmbientParticle::with_overrides(
            Point::ZERO,
            overrides,
            &AmbientParams::default(),
            &mut rng(),
        );
        assert_eq!(p.size(), 20.0);
        assert_eq!(p.velocity().1, -5.0);
    }

    #[test]
    fn test_falsy_overrides_randomized() {
        let params = AmbientParams::default();
        let overrides = AmbientOverrides::default().size(0.0).speed_y(f32::NAN);
        let p = AmbientParticle::with_overrides(Point::ZERO, overrides, &params, &mut rng());
        assert!(params.size.contains(p.size()));
        assert!(params.speed_y.contains(p.velocity().1));
    }

    #[test]
    fn test_update_no_gravity() {
        let params = AmbientParams::default();
        let mut p = AmbientParticle::new(Point::new(10.0, 10.0), &params, &mut rng());
        let (sx, sy) = p.velocity();

        p.update();
        p.update();

        assert!((p.position().x - (10.0 + 2.0 * sx)).abs() < 1e-5);
        assert!((p.position().y - (10.0 + 2.0 * sy)).abs() < 1e-5);
        assert_eq!(p.velocity(), (sx, sy));
        assert!((p.opacity() - 0.96).abs() < 1e-6);
    }

    #[test]
    fn test_lifespan_about_50_frames() {
        let mut p = AmbientParticle::new(Point::ZERO, &AmbientParams::default(), &mut rng());
        for _ in 0..48 {
            p.update();
        }
        assert!(!p.is_expired());
        for _ in 0..5 {
            p.update();
        }
        assert!(p.is_expired());
    }

    #[test]
    fn test_draw_alpha_tracks_opacity() {
        let params = AmbientParams::default();
        let mut p = AmbientParticle::new(Point::new(5.0, 6.0), &params, &mut rng());
        p.update();

        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        p.draw(&mut ctx);

        match &ctx.commands()[0] {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
                ..
            } => {
                assert_eq!(*center, p.position());
                assert_eq!(*radius, p.size());
                assert_eq!(color.a, p.opacity());
                assert!(color.same_rgb(&p.color()));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
