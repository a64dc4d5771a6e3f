//! Player spaceship.
//!
//! Each cycle picks the next frame, clamps the position so the frame stays on
//! the surface, draws it, then polls input once per sub-tick for a fixed number
//! of sub-ticks before erasing the frame at the position it was drawn.
//! Movement during a cycle is applied unclamped and corrected on the next one.

use std::sync::Arc;

use anyhow::{bail, Result};

use tui_starfield_types::{ticks_for, ControlState, SHIP_FRAME_DURATION, SHIP_TICKS_PER_FRAME};

use crate::blit::draw_frame;
use crate::canvas::ControlSource;
use crate::fire::Fire;
use crate::frame::Frame;
use crate::geometry::{clamp_position, Position, Velocity};
use crate::task::{Step, Task, TaskContext};

pub struct Spaceship {
    frames: Arc<[Frame]>,
    next_frame: usize,
    /// Frame currently on screen, drawn at `previous`.
    drawn: Option<usize>,
    position: Position,
    previous: Position,
    ticks_per_frame: u32,
    remaining: u32,
    controls: Box<dyn ControlSource>,
    last_controls: ControlState,
    /// Projectile velocity when the trigger spawns shots.
    gun: Option<Velocity>,
}

impl Spaceship {
    pub fn new(frames: Arc<[Frame]>, start: Position, controls: Box<dyn ControlSource>) -> Self {
        Self {
            frames,
            next_frame: 0,
            drawn: None,
            position: start,
            previous: start,
            ticks_per_frame: ticks_for(SHIP_TICKS_PER_FRAME, SHIP_FRAME_DURATION),
            remaining: 0,
            controls,
            last_controls: ControlState::default(),
            gun: None,
        }
    }

    /// Sub-ticks each frame stays on screen. Zero is raised to one.
    pub fn with_ticks_per_frame(mut self, ticks: u32) -> Self {
        self.ticks_per_frame = ticks.max(1);
        self
    }

    /// Spawn a [`Fire`] with `velocity` whenever the trigger is pressed.
    pub fn with_gun(mut self, velocity: Velocity) -> Self {
        self.gun = Some(velocity);
        self
    }

    /// Working position, possibly off-field until the next cycle clamps it.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where the current frame was drawn.
    pub fn drawn_at(&self) -> Option<Position> {
        self.drawn.map(|_| self.previous)
    }

    pub fn last_controls(&self) -> ControlState {
        self.last_controls
    }

    fn begin_cycle(&mut self, ctx: &mut TaskContext<'_>) -> Result<()> {
        if self.frames.is_empty() {
            bail!("spaceship has no frames to draw");
        }

        if let Some(index) = self.drawn.take() {
            let frame = &self.frames[index];
            draw_frame(&mut *ctx.canvas, self.previous.row, self.previous.column, frame, true);
        }

        let index = self.next_frame % self.frames.len();
        self.next_frame = (index + 1) % self.frames.len();

        let frame = &self.frames[index];
        self.position = clamp_position(ctx.canvas.dimensions(), frame.size(), self.position);
        self.previous = self.position;
        draw_frame(&mut *ctx.canvas, self.position.row, self.position.column, frame, false);

        self.drawn = Some(index);
        self.remaining = self.ticks_per_frame;
        Ok(())
    }

    fn fire_from_nose(&self, ctx: &mut TaskContext<'_>, velocity: Velocity) {
        let width = self
            .drawn
            .map(|index| self.frames[index].size().columns)
            .unwrap_or(0);
        // One row above the nose, so the muzzle flash does not eat the sprite.
        let start = Position::new(
            self.previous.row - 1.0,
            self.previous.column + (width / 2) as f64,
        );
        ctx.spawn(Fire::new(start, velocity));
    }
}

impl Task for Spaceship {
    fn name(&self) -> &'static str {
        "spaceship"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        if self.remaining == 0 {
            self.begin_cycle(ctx)?;
        }

        let controls = self.controls.read_controls();
        self.position.row += controls.rows_direction as f64;
        self.position.column += controls.columns_direction as f64;
        self.last_controls = controls;

        if controls.space_pressed {
            if let Some(velocity) = self.gun {
                self.fire_from_nose(ctx, velocity);
            }
        }

        self.remaining -= 1;
        Ok(Step::Continue)
    }
}
