//! The terminal-backed [`Canvas`].

use std::time::Instant;

use anyhow::Result;

use crate::core::{Bounds, Canvas};
use crate::fb::{Cell, FrameBuffer};
use crate::renderer::TerminalRenderer;
use crate::throttle::FlushThrottle;
use crate::types::Intensity;

/// Framebuffer plus renderer. Writes land in memory; `refresh` pushes them
/// to the terminal.
pub struct TerminalCanvas {
    fb: FrameBuffer,
    renderer: TerminalRenderer,
    throttle: FlushThrottle,
    /// Bumped on every cell that actually changes.
    generation: u64,
    bell_pending: bool,
    started: Instant,
}

impl TerminalCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            renderer: TerminalRenderer::new(),
            throttle: FlushThrottle::default(),
            generation: 0,
            bell_pending: false,
            started: Instant::now(),
        }
    }

    /// Canvas sized to the current terminal.
    pub fn from_terminal() -> Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::new(width, height))
    }

    /// Switch the terminal to raw mode on the alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }
}

impl Canvas for TerminalCanvas {
    fn dimensions(&self) -> Bounds {
        self.fb.dimensions()
    }

    fn put(&mut self, row: usize, column: usize, symbol: char, intensity: Intensity) {
        let (Ok(x), Ok(y)) = (u16::try_from(column), u16::try_from(row)) else {
            return;
        };
        let cell = Cell {
            ch: symbol,
            intensity,
        };
        if self.fb.get(x, y).is_some_and(|old| old != cell) {
            self.fb.set(x, y, cell);
            self.generation += 1;
        }
    }

    fn beep(&mut self) {
        self.bell_pending = true;
    }

    fn refresh(&mut self) -> Result<()> {
        if self.bell_pending {
            self.bell_pending = false;
            self.renderer.bell()?;
        }

        let now_ms = self.started.elapsed().as_millis() as u64;
        if self.throttle.should_flush(now_ms, self.generation) {
            self.renderer.draw(&self.fb)?;
        }
        Ok(())
    }
}
