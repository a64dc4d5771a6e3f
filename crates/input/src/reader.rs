//! Non-blocking keyboard reader.
//!
//! Each poll drains the pending terminal events (up to a fixed batch size, so
//! a flood of auto-repeats cannot stall a tick) and reduces them to one
//! [`ControlState`]. Quit keys raise the scheduler's shutdown flag.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::core::{ControlSource, Shutdown};
use crate::map::{map_key, should_quit};
use crate::types::{Control, ControlState};

/// Upper bound on events consumed by a single poll.
pub const MAX_KEYS_PER_POLL: usize = 64;

/// Controls collected by one poll.
#[derive(Debug, Clone, Default)]
pub struct KeyBatch {
    pub controls: ArrayVec<Control, MAX_KEYS_PER_POLL>,
    pub quit: bool,
}

impl KeyBatch {
    /// Record one terminal event. Returns `false` once the batch is full.
    pub fn push_event(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event {
            self.push_key(*key);
        }
        !self.controls.is_full()
    }

    pub fn push_key(&mut self, key: KeyEvent) {
        // Terminal auto-repeat arrives as presses or repeats; both move the ship.
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        let _ = self.controls.try_push(map_key(key));
    }

    pub fn reduce(&self) -> ControlState {
        ControlState::from_controls(self.controls.iter().copied())
    }
}

/// Keyboard-backed [`ControlSource`].
#[derive(Debug, Clone)]
pub struct KeyboardControls {
    shutdown: Shutdown,
}

impl KeyboardControls {
    pub fn new(shutdown: Shutdown) -> Self {
        Self { shutdown }
    }

    /// Drain pending events without blocking.
    pub fn drain(&mut self) -> io::Result<KeyBatch> {
        let mut batch = KeyBatch::default();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if !batch.push_event(&event) {
                break;
            }
        }
        Ok(batch)
    }
}

impl ControlSource for KeyboardControls {
    fn read_controls(&mut self) -> ControlState {
        match self.drain() {
            Ok(batch) => {
                if batch.quit {
                    self.shutdown.trigger();
                }
                batch.reduce()
            }
            Err(err) => {
                warn!(error = %err, "failed to read terminal events");
                ControlState::default()
            }
        }
    }
}
