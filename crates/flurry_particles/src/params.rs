//! Tuning parameters for particle variants and spawn triggers
//!
//! Every value here has a default matching the stock effect, and every table
//! deserializes with missing fields filled from those defaults, so a config
//! file only needs to name what it changes.

use flurry_core::Color;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning values the simulation cannot run with
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A sampling range with an infinite or NaN bound or width
    #[error("{field}: range [{min}, {max}) must have finite bounds and width")]
    Span {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// Opacity would never reach zero, or would climb
    #[error("{field}: decay must be positive and finite, got {value}")]
    Decay { field: &'static str, value: f32 },

    #[error("{field}: gravity must be finite, got {value}")]
    Gravity { field: &'static str, value: f32 },
}

/// Half-open sampling range `[min, max)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A span centered on zero: `[-half, half)`
    pub const fn symmetric(half: f32) -> Self {
        Self::new(-half, half)
    }

    /// Whether both bounds and the width are finite
    pub fn is_finite(&self) -> bool {
        (self.max - self.min).is_finite()
    }

    /// Draw a value from the span
    ///
    /// A degenerate span (`min >= max`) or one that is not finite always
    /// yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min < self.max && self.is_finite() {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    /// Check whether a value lies in the span
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ParamsError> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(ParamsError::Span {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

fn check_decay(field: &'static str, value: f32) -> Result<(), ParamsError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::Decay { field, value })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Variant parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Sprite particle parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstParams {
    /// Opacity lost per frame
    pub decay: f32,
    /// Added to `speed_y` every frame
    pub gravity: f32,
    /// Side length of the sprite in pixels
    pub size: Span,
    pub speed_x: Span,
    pub speed_y: Span,
    /// Initial rotation in degrees
    pub rotation: Span,
    /// Degrees per frame
    pub rotation_speed: Span,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            decay: 0.01,
            gravity: 0.3,
            size: Span::new(24.0, 56.0),
            speed_x: Span::symmetric(5.0),
            speed_y: Span::new(-12.0, -4.0),
            rotation: Span::new(0.0, 360.0),
            rotation_speed: Span::symmetric(5.0),
        }
    }
}

/// Stock ambient palette: pink, gold, and light pink
pub const DEFAULT_PALETTE: [[u8; 3]; 3] = [[255, 107, 154], [255, 210, 102], [255, 160, 220]];

/// Circle particle parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientParams {
    /// Opacity lost per frame
    pub decay: f32,
    /// RGB colors picked from at creation
    pub palette: Vec<[u8; 3]>,
    /// Circle radius in pixels
    pub size: Span,
    pub speed_x: Span,
    pub speed_y: Span,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            decay: 0.02,
            palette: DEFAULT_PALETTE.to_vec(),
            size: Span::new(6.0, 12.0),
            speed_x: Span::symmetric(1.0),
            speed_y: Span::new(-3.0, -1.0),
        }
    }
}

impl BurstParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_decay("burst.decay", self.decay)?;
        if !self.gravity.is_finite() {
            return Err(ParamsError::Gravity {
                field: "burst.gravity",
                value: self.gravity,
            });
        }
        self.size.check("burst.size")?;
        self.speed_x.check("burst.speed_x")?;
        self.speed_y.check("burst.speed_y")?;
        self.rotation.check("burst.rotation")?;
        self.rotation_speed.check("burst.rotation_speed")
    }
}

impl AmbientParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_decay("ambient.decay", self.decay)?;
        self.size.check("ambient.size")?;
        self.speed_x.check("ambient.speed_x")?;
        self.speed_y.check("ambient.speed_y")
    }

    /// Pick a palette color, falling back to the first stock color when the
    /// palette is empty
    pub fn pick_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let [r, g, b] = self
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(DEFAULT_PALETTE[0]);
        Color::from_rgb8(r, g, b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trigger parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Explosion trigger parameters
///
/// Only velocity and spin are overridden; size, initial rotation, decay and
/// gravity come from [`BurstParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionParams {
    /// Particles spawned per activation
    pub count: usize,
    pub speed_x: Span,
    pub speed_y: Span,
    pub rotation_speed: Span,
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self {
            count: 40,
            speed_x: Span::symmetric(10.0),
            speed_y: Span::new(-16.0, -4.0),
            rotation_speed: Span::symmetric(7.5),
        }
    }
}

impl ExplosionParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.speed_x.check("explosion.speed_x")?;
        self.speed_y.check("explosion.speed_y")?;
        self.rotation_speed.check("explosion.rotation_speed")
    }

    /// Burst parameters with this trigger's overrides applied
    pub fn apply(&self, base: &BurstParams) -> BurstParams {
        BurstParams {
            speed_x: self.speed_x,
            speed_y: self.speed_y,
            rotation_speed: self.rotation_speed,
            ..base.clone()
        }
    }
}

/// Heart burst helper default count
pub const DEFAULT_HEART_BURST_COUNT: usize = 20;

/// Page click trigger parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartParams {
    /// Particles spawned per page click
    pub count: usize,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self { count: 10 }
    }
}

/// All particle tuning, grouped the way config files lay it out
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleParams {
    pub burst: BurstParams,
    pub ambient: AmbientParams,
    pub explosion: ExplosionParams,
    pub heart: HeartParams,
}

impl ParticleParams {
    /// Reject values that would panic while sampling or keep a particle
    /// alive forever
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.burst.validate()?;
        self.ambient.validate()?;
        self.explosion.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_span_sample_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let span = Span::new(-16.0, -4.0);
        for _ in 0..500 {
            assert!(span.contains(span.sample(&mut rng)));
        }
    }

    #[test]
    fn test_degenerate_span() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Span::new(3.0, 3.0).sample(&mut rng), 3.0);
        assert_eq!(Span::new(5.0, 1.0).sample(&mut rng), 5.0);
    }

    #[test]
    fn test_unbounded_span_yields_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Span::new(-1.0, f32::INFINITY).sample(&mut rng), -1.0);
        assert_eq!(Span::new(f32::MIN, f32::MAX).sample(&mut rng), f32::MIN);
        assert!(Span::new(f32::NAN, 1.0).sample(&mut rng).is_nan());
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(ParticleParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unbounded_spans() {
        let mut params = ParticleParams::default();
        params.ambient.speed_x = Span::new(-1.0, f32::INFINITY);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::Span {
                field: "ambient.speed_x",
                ..
            })
        ));

        // Finite bounds whose width overflows
        let mut params = ParticleParams::default();
        params.explosion.speed_x = Span::new(f32::MIN, f32::MAX);
        assert!(matches!(params.validate(), Err(ParamsError::Span { .. })));

        let mut params = ParticleParams::default();
        params.burst.rotation = Span::new(f32::NAN, 360.0);
        assert!(matches!(params.validate(), Err(ParamsError::Span { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_decay() {
        for decay in [0.0, -0.02, f32::NAN, f32::INFINITY] {
            let mut params = ParticleParams::default();
            params.ambient.decay = decay;
            assert!(matches!(
                params.validate(),
                Err(ParamsError::Decay {
                    field: "ambient.decay",
                    ..
                })
            ));

            let mut params = ParticleParams::default();
            params.burst.decay = decay;
            assert!(matches!(
                params.validate(),
                Err(ParamsError::Decay {
                    field: "burst.decay",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_gravity() {
        let mut params = ParticleParams::default();
        params.burst.gravity = f32::NEG_INFINITY;
        assert!(matches!(params.validate(), Err(ParamsError::Gravity { .. })));

        // Zero and negative gravity are fine
        params.burst.gravity = -0.3;
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_explosion_overrides_are_partial() {
        let base = BurstParams::default();
        let params = ExplosionParams::default().apply(&base);

        assert_eq!(params.speed_x, Span::symmetric(10.0));
        assert_eq!(params.speed_y, Span::new(-16.0, -4.0));
        assert_eq!(params.rotation_speed, Span::symmetric(7.5));
        assert_eq!(params.size, base.size);
        assert_eq!(params.rotation, base.rotation);
        assert_eq!(params.decay, base.decay);
        assert_eq!(params.gravity, base.gravity);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let params = AmbientParams {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(params.pick_color(&mut rng), Color::from_rgb8(255, 107, 154));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let params: ParticleParams = toml::from_str(
            r#"
            [burst]
            gravity = 0.5

            [heart]
            count = 3
            "#,
        )
        .unwrap();

        assert_eq!(params.burst.gravity, 0.5);
        assert_eq!(params.burst.decay, 0.01);
        assert_eq!(params.heart.count, 3);
        assert_eq!(params.explosion, ExplosionParams::default());
        assert_eq!(params.ambient.palette.len(), 3);
    }
}
