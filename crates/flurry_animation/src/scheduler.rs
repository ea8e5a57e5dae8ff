//! Frame scheduler
//!
//! The scheduler is the explicit form of a `requestAnimationFrame` chain: once
//! started it stays running, and every frame re-arms a request for the next
//! one. Hosts drive it by calling [`FrameScheduler::take_frame_request`] on
//! each display refresh and rendering only when a request was pending.
//!
//! ```ignore
//! let mut scheduler = FrameScheduler::new();
//! scheduler.start();
//!
//! // On each display refresh:
//! if scheduler.take_frame_request() {
//!     let frame = scheduler.begin_frame();
//!     render(frame);
//!     scheduler.request_frame();
//! }
//! ```

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Target frame rate used when none is configured
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Timing information for a single frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame index since the scheduler started
    pub index: u64,
    /// Seconds since the previous frame began
    pub dt: f32,
}

/// Drives the per-frame tick
#[derive(Debug)]
pub struct FrameScheduler {
    running: bool,
    /// Set when a frame has been requested and not yet taken
    frame_requested: Cell<bool>,
    frame_count: u64,
    last_frame: Option<Instant>,
    target_fps: u32,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            running: false,
            frame_requested: Cell::new(false),
            frame_count: 0,
            last_frame: None,
            target_fps: DEFAULT_TARGET_FPS,
        }
    }

    /// Create a scheduler with a specific target frame rate
    pub fn with_target_fps(fps: u32) -> Self {
        let mut scheduler = Self::new();
        scheduler.set_target_fps(fps);
        scheduler
    }

    /// Set the target frame rate (minimum 1)
    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Nominal time between frames at the target frame rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    /// Enter the running state and request the first frame
    ///
    /// Starting an already running scheduler does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        tracing::debug!("FrameScheduler: start at {} fps", self.target_fps);
        self.running = true;
        self.request_frame();
    }

    /// Check if the scheduler has been started
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request that the next display refresh renders a frame
    pub fn request_frame(&self) {
        self.frame_requested.set(true);
    }

    /// Check and clear the pending frame request
    ///
    /// Always `false` before [`start`](Self::start) has been called.
    pub fn take_frame_request(&self) -> bool {
        self.running && self.frame_requested.replace(false)
    }

    /// Check the pending frame request without clearing it
    pub fn has_frame_request(&self) -> bool {
        self.running && self.frame_requested.get()
    }

    /// Begin a frame, measuring time since the previous one
    pub fn begin_frame(&mut self) -> FrameInfo {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a frame at an explicit timestamp
    ///
    /// The first frame reports the nominal frame interval as its delta.
    pub fn begin_frame_at(&mut self, now: Instant) -> FrameInfo {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => self.frame_interval().as_secs_f32(),
        };
        self.last_frame = Some(now);

        let info = FrameInfo {
            index: self.frame_count,
            dt,
        };
        self.frame_count += 1;

        tracing::trace!("FrameScheduler: frame {} (dt {:.4}s)", info.index, info.dt);
        info
    }

    /// Number of frames begun since the scheduler was created
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
