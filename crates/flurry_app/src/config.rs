//! Flurry configuration file handling
//!
//! Flurry reads a single `flurry.toml`. Every section and field is optional;
//! anything missing takes the stock value.
//!
//! ```toml
//! [window]
//! title = "Flurry"
//! width = 1280
//! height = 720
//!
//! [sprite]
//! path = "assets/sprite.png"
//!
//! [control]
//! x = 560.0
//! y = 336.0
//!
//! [engine]
//! seed = 42
//!
//! [particles.explosion]
//! count = 60
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use flurry_core::Rect;
use flurry_particles::ParticleParams;
use flurry_platform::WindowConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Name of the configuration file looked up by [`AppConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "flurry.toml";

// =============================================================================
// Sections
// =============================================================================

/// Viewport settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WindowSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_title() -> String {
    "Flurry".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Burst sprite settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SpriteSection {
    /// Image file; without one, sprite particles are simulated but never drawn
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Decode on a worker thread instead of at startup
    #[serde(default = "default_background")]
    pub background: bool,
}

fn default_background() -> bool {
    true
}

impl Default for SpriteSection {
    fn default() -> Self {
        Self {
            path: None,
            background: default_background(),
        }
    }
}

/// The control that fires the explosion
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ControlSection {
    #[serde(default = "default_control_x")]
    pub x: f32,
    #[serde(default = "default_control_y")]
    pub y: f32,
    #[serde(default = "default_control_width")]
    pub width: f32,
    #[serde(default = "default_control_height")]
    pub height: f32,
    /// Keep clicks on the control from also reaching the page
    #[serde(default)]
    pub consume_clicks: bool,
}

fn default_control_x() -> f32 {
    320.0
}

fn default_control_y() -> f32 {
    276.0
}

fn default_control_width() -> f32 {
    160.0
}

fn default_control_height() -> f32 {
    48.0
}

impl Default for ControlSection {
    fn default() -> Self {
        Self {
            x: default_control_x(),
            y: default_control_y(),
            width: default_control_width(),
            height: default_control_height(),
            consume_clicks: false,
        }
    }
}

impl ControlSection {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Engine settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EngineSection {
    /// Fixed random seed; omit for a different run every time
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,
}

fn default_target_fps() -> u32 {
    flurry_animation::DEFAULT_TARGET_FPS
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: default_target_fps(),
        }
    }
}

// =============================================================================
// flurry.toml
// =============================================================================

/// Application configuration (flurry.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowSection,
    #[serde(default)]
    pub sprite: SpriteSection,
    #[serde(default)]
    pub control: ControlSection,
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub particles: ParticleParams,
}

impl AppConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// A relative sprite path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let mut config = Self::from_toml_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        if let (Some(sprite), Some(dir)) = (config.sprite.path.as_mut(), path.parent()) {
            if sprite.is_relative() {
                *sprite = dir.join(&*sprite);
            }
        }

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `flurry.toml` from a directory, or defaults if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(AppError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.engine.target_fps == 0 {
            return Err(AppError::Config("target_fps must be at least 1".to_string()));
        }
        if self.control.width < 0.0 || self.control.height < 0.0 {
            return Err(AppError::Config(
                "control width and height must not be negative".to_string(),
            ));
        }
        self.particles
            .validate()
            .map_err(|e| AppError::Config(format!("particles.{}", e)))
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::new(self.window.title.clone()).size(self.window.width, self.window.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.particles.explosion.count, 40);
        assert_eq!(config.particles.heart.count, 10);
        assert_eq!(config.engine.target_fps, 60);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            width = 1200

            [engine]
            seed = 42

            [particles.explosion]
            count = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.particles.explosion.count, 60);
        assert_eq!(config.particles.burst.decay, 0.01);
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = AppConfig::from_toml_str("[window]\nwidth = 0\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_unbounded_speed_rejected() {
        let result =
            AppConfig::from_toml_str("[particles.ambient.speed_x]\nmin = -1.0\nmax = inf\n");
        match result {
            Err(AppError::Config(message)) => {
                assert!(message.contains("particles.ambient.speed_x"), "{}", message)
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_decay_rejected() {
        let result = AppConfig::from_toml_str("[particles.ambient]\ndecay = -0.02\n");
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = AppConfig::from_toml_str("[particles.burst]\ndecay = 0.0\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_non_finite_gravity_rejected() {
        let result = AppConfig::from_toml_str("[particles.burst]\ngravity = nan\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = AppConfig::from_toml_str("[window\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.engine.seed = Some(9);
        config.control.consume_clicks = true;

        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_resolves_sprite_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[sprite]\npath = \"assets/sprite.png\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(
            config.sprite.path,
            Some(dir.path().join("assets/sprite.png"))
        );
    }

    #[test]
    fn test_control_bounds() {
        let control = ControlSection::default();
        let bounds = control.bounds();
        assert_eq!(bounds.center().x, 400.0);
        assert_eq!(bounds.center().y, 300.0);
    }
}
