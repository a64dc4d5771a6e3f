//! Projectile.
//!
//! Shows a two-tick muzzle flash at the start position, rings the bell, then
//! moves a marker at constant speed until it leaves the surface interior.

use anyhow::Result;

use tui_starfield_types::{Intensity, FIRE_FLASH_GLYPH, FIRE_LAUNCH_GLYPH};

use crate::blit::put_glyph;
use crate::canvas::Canvas;
use crate::geometry::{Position, Velocity};
use crate::task::{Step, Task, TaskContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireState {
    /// Nothing drawn yet.
    Launch,
    /// Launch glyph is on screen.
    Flash,
    /// Flash glyph is on screen.
    Ignition,
    /// Travel glyph is on screen at the current position.
    Traveling,
    Exited,
}

#[derive(Debug, Clone)]
pub struct Fire {
    position: Position,
    velocity: Velocity,
    symbol: char,
    state: FireState,
}

impl Fire {
    pub fn new(start: Position, velocity: Velocity) -> Self {
        let symbol = if velocity.columns_speed != 0.0 { '-' } else { '|' };
        Self {
            position: start,
            velocity,
            symbol,
            state: FireState::Launch,
        }
    }

    pub fn state(&self) -> FireState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    fn put(&self, canvas: &mut dyn Canvas, symbol: char) {
        put_glyph(
            canvas,
            self.position.row,
            self.position.column,
            symbol,
            Intensity::Normal,
        );
    }

    /// Draw at the current position if it is still inside the border.
    fn travel(&mut self, canvas: &mut dyn Canvas) -> Step {
        let bounds = canvas.dimensions();
        let max_row = bounds.rows as f64 - 1.0;
        let max_column = bounds.columns as f64 - 1.0;
        let Position { row, column } = self.position;

        if 0.0 < row && row < max_row && 0.0 < column && column < max_column {
            self.put(canvas, self.symbol);
            Step::Continue
        } else {
            self.state = FireState::Exited;
            Step::Done
        }
    }
}

impl Task for Fire {
    fn name(&self) -> &'static str {
        "fire"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        let canvas = &mut *ctx.canvas;
        let step = match self.state {
            FireState::Launch => {
                self.put(canvas, FIRE_LAUNCH_GLYPH);
                self.state = FireState::Flash;
                Step::Continue
            }
            FireState::Flash => {
                self.put(canvas, FIRE_FLASH_GLYPH);
                self.state = FireState::Ignition;
                Step::Continue
            }
            FireState::Ignition => {
                self.put(canvas, ' ');
                self.position = self.position.offset(self.velocity);
                canvas.beep();
                self.state = FireState::Traveling;
                self.travel(canvas)
            }
            FireState::Traveling => {
                self.put(canvas, ' ');
                self.position = self.position.offset(self.velocity);
                self.travel(canvas)
            }
            FireState::Exited => Step::Done,
        };
        Ok(step)
    }
}
