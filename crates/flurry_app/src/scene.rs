//! Scene scripts: timed host events for headless runs
//!
//! ```toml
//! frames = 240
//!
//! [[events]]
//! frame = 10
//! type = "activate"
//!
//! [[events]]
//! frame = 30
//! type = "click"
//! x = 120.0
//! y = 80.0
//!
//! [[events]]
//! frame = 90
//! type = "resize"
//! width = 1200
//! height = 800
//! ```

use std::fs;
use std::path::Path;

use flurry_core::Rect;
use flurry_platform::{Event, InputEvent, LifecycleEvent, ScriptedEvent, WindowEvent};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A host action
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneAction {
    /// Left click at a point
    Click { x: f32, y: f32 },
    /// Touch tap at a point
    Tap {
        x: f32,
        y: f32,
        #[serde(default)]
        id: u64,
    },
    /// Click the explosion control at its center
    Activate,
    /// Viewport resize
    Resize { width: u32, height: u32 },
    /// Page goes to the background
    Suspend,
    /// Page comes back to the foreground
    Resume,
    /// Window close
    Close,
}

/// An action at a given frame
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SceneEvent {
    pub frame: u64,
    #[serde(flatten)]
    pub action: SceneAction,
}

impl SceneEvent {
    pub fn new(frame: u64, action: SceneAction) -> Self {
        Self { frame, action }
    }
}

fn default_frames() -> u64 {
    600
}

/// A scripted run: how many display refreshes, and what happens when
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SceneScript {
    #[serde(default = "default_frames")]
    pub frames: u64,
    #[serde(default)]
    pub events: Vec<SceneEvent>,
}

impl Default for SceneScript {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            events: Vec::new(),
        }
    }
}

impl SceneScript {
    /// Built-in scene used when no script is given
    ///
    /// Activates the control, clicks around the page, resizes once, and
    /// leaves enough frames for everything to fade out.
    pub fn demo(control: Rect) -> Self {
        let center = control.center();
        Self {
            frames: 300,
            events: vec![
                SceneEvent::new(5, SceneAction::Activate),
                SceneEvent::new(20, SceneAction::Click { x: 120.0, y: 90.0 }),
                SceneEvent::new(
                    45,
                    SceneAction::Tap {
                        x: center.x,
                        y: center.y,
                        id: 1,
                    },
                ),
                SceneEvent::new(60, SceneAction::Click { x: 600.0, y: 420.0 }),
                SceneEvent::new(
                    90,
                    SceneAction::Resize {
                        width: 1024,
                        height: 768,
                    },
                ),
            ],
        }
    }

    /// Parse a scene from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::Scene(e.to_string()))
    }

    /// Load a scene file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Scene(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::Scene(format!("{}: {}", path.display(), e)))
    }

    /// Lower the script into host events
    ///
    /// Clicks and taps become press/release pairs delivered before the same
    /// frame. `control` is needed to aim activations.
    pub fn to_host_events(&self, control: Rect) -> Vec<ScriptedEvent> {
        let mut events = Vec::with_capacity(self.events.len() * 2);

        for SceneEvent { frame, action } in &self.events {
            let frame = *frame;
            let mut push = |event: Event| events.push(ScriptedEvent { frame, event });

            match action {
                SceneAction::Click { x, y } => {
                    InputEvent::left_click(*x, *y)
                        .into_iter()
                        .for_each(|input| push(Event::Input(input)));
                }
                SceneAction::Tap { x, y, id } => {
                    InputEvent::tap(*id, *x, *y)
                        .into_iter()
                        .for_each(|input| push(Event::Input(input)));
                }
                SceneAction::Activate => {
                    let center = control.center();
                    InputEvent::left_click(center.x, center.y)
                        .into_iter()
                        .for_each(|input| push(Event::Input(input)));
                }
                SceneAction::Resize { width, height } => push(Event::Window(WindowEvent::Resized {
                    width: *width,
                    height: *height,
                })),
                SceneAction::Suspend => push(Event::Lifecycle(LifecycleEvent::Suspended)),
                SceneAction::Resume => push(Event::Lifecycle(LifecycleEvent::Resumed)),
                SceneAction::Close => push(Event::Window(WindowEvent::CloseRequested)),
            }
        }

        events
    }
}
