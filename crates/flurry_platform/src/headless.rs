//! Headless host backend
//!
//! `ScriptedEventLoop` plays back a fixed list of host events against a
//! virtual window, one display refresh at a time. It is the host used by the
//! CLI and by end-to-end tests: frame timing is deterministic and no display
//! is required.
//!
//! Playback follows browser conventions for a backgrounded page: while the
//! application is suspended the window is hidden and no `Event::Frame` is
//! delivered, although scripted input still is.

use std::cell::Cell;
use std::collections::VecDeque;

use crate::error::{PlatformError, Result};
use crate::event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
use crate::window::{Window, WindowConfig};

/// Virtual window backing the headless host
#[derive(Debug)]
pub struct HeadlessWindow {
    size: Cell<(u32, u32)>,
    visible: Cell<bool>,
    redraw_requested: Cell<bool>,
}

impl HeadlessWindow {
    /// Create a window from a configuration
    pub fn new(config: &WindowConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(PlatformError::WindowCreation(format!(
                "window size must be non-zero, got {}x{}",
                config.width, config.height
            )));
        }

        tracing::debug!(
            "Headless window '{}' {}x{}",
            config.title,
            config.width,
            config.height
        );
        Ok(Self {
            size: Cell::new((config.width, config.height)),
            visible: Cell::new(true),
            redraw_requested: Cell::new(false),
        })
    }

    /// Check and clear the redraw request flag
    pub fn take_redraw_request(&self) -> bool {
        self.redraw_requested.replace(false)
    }

    fn apply(&self, event: &Event) {
        match event {
            Event::Window(WindowEvent::Resized { width, height }) => {
                self.size.set((*width, *height));
            }
            Event::Lifecycle(LifecycleEvent::Suspended) => self.visible.set(false),
            Event::Lifecycle(LifecycleEvent::Resumed) => self.visible.set(true),
            _ => {}
        }
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn request_redraw(&self) {
        self.redraw_requested.set(true);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// A host event queued for a specific display refresh
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedEvent {
    /// Refresh index the event is delivered before
    pub frame: u64,
    /// The event itself
    pub event: Event,
}

/// Event loop that replays a script for a fixed number of display refreshes
#[derive(Debug)]
pub struct ScriptedEventLoop {
    window: HeadlessWindow,
    script: VecDeque<ScriptedEvent>,
    frames: u64,
}

impl ScriptedEventLoop {
    /// Create an event loop that runs for `frames` display refreshes
    pub fn new(config: WindowConfig, frames: u64) -> Result<Self> {
        Ok(Self {
            window: HeadlessWindow::new(&config)?,
            script: VecDeque::new(),
            frames,
        })
    }

    /// Number of display refreshes this loop will run for
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of events still queued
    pub fn pending_events(&self) -> usize {
        self.script.len()
    }

    /// Queue an event to be delivered before refresh `frame`
    ///
    /// Events scheduled for the same refresh are delivered in the order they
    /// were queued.
    pub fn schedule(&mut self, frame: u64, event: Event) -> Result<()> {
        if frame >= self.frames {
            return Err(PlatformError::InvalidScript(format!(
                "event at frame {} is past the end of the run ({} frames)",
                frame, self.frames
            )));
        }

        let index = self.script.partition_point(|queued| queued.frame <= frame);
        self.script.insert(index, ScriptedEvent { frame, event });
        Ok(())
    }

    /// Queue several events
    pub fn schedule_all(&mut self, events: impl IntoIterator<Item = ScriptedEvent>) -> Result<()> {
        for ScriptedEvent { frame, event } in events {
            self.schedule(frame, event)?;
        }
        Ok(())
    }
}

impl EventLoop for ScriptedEventLoop {
    type Window = HeadlessWindow;

    fn run<F>(self, mut handler: F) -> Result<()>
    where
        F: FnMut(Event, &Self::Window) -> ControlFlow,
    {
        let ScriptedEventLoop {
            window,
            mut script,
            frames,
        } = self;

        tracing::debug!(
            "ScriptedEventLoop: running {} frames with {} scripted events",
            frames,
            script.len()
        );

        if handler(Event::Lifecycle(LifecycleEvent::Resumed), &window) == ControlFlow::Exit {
            return Ok(());
        }

        let mut suspended = false;
        for frame in 0..frames {
            while script.front().is_some_and(|next| next.frame <= frame) {
                let Some(ScriptedEvent { event, .. }) = script.pop_front() else {
                    break;
                };

                window.apply(&event);
                match event {
                    Event::Lifecycle(LifecycleEvent::Suspended) => suspended = true,
                    Event::Lifecycle(LifecycleEvent::Resumed) => suspended = false,
                    _ => {}
                }

                let close = event == Event::Window(WindowEvent::CloseRequested);
                if handler(event, &window) == ControlFlow::Exit || close {
                    tracing::debug!("ScriptedEventLoop: exiting at frame {}", frame);
                    return Ok(());
                }
            }

            if suspended {
                tracing::trace!("ScriptedEventLoop: frame {} withheld while suspended", frame);
                continue;
            }

            window.take_redraw_request();
            if handler(Event::Frame, &window) == ControlFlow::Exit {
                tracing::debug!("ScriptedEventLoop: exiting at frame {}", frame);
                return Ok(());
            }
        }

        Ok(())
    }
}
