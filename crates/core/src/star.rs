//! Blinking star.
//!
//! Cycles one glyph through dim, normal, bold, normal forever. The glyph is
//! written on entering a phase; the task then yields once per tick for the
//! rest of the phase.

use anyhow::Result;

use tui_starfield_types::{ticks_for, Intensity, BLINK_RATIOS, BLINK_TICKS_PER_PERIOD};

use crate::blit::put_glyph;
use crate::task::{Step, Task, TaskContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    Dim,
    Normal,
    Bold,
    Fading,
}

impl BlinkPhase {
    pub fn next(self) -> Self {
        match self {
            BlinkPhase::Dim => BlinkPhase::Normal,
            BlinkPhase::Normal => BlinkPhase::Bold,
            BlinkPhase::Bold => BlinkPhase::Fading,
            BlinkPhase::Fading => BlinkPhase::Dim,
        }
    }

    pub fn intensity(self) -> Intensity {
        match self {
            BlinkPhase::Dim => Intensity::Dim,
            BlinkPhase::Normal | BlinkPhase::Fading => Intensity::Normal,
            BlinkPhase::Bold => Intensity::Bold,
        }
    }

    fn index(self) -> usize {
        match self {
            BlinkPhase::Dim => 0,
            BlinkPhase::Normal => 1,
            BlinkPhase::Bold => 2,
            BlinkPhase::Fading => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Blink {
    row: usize,
    column: usize,
    symbol: char,
    durations: [u32; 4],
    phase: BlinkPhase,
    /// Ticks left in the current phase; 0 before the first step.
    remaining: u32,
    started: bool,
}

impl Blink {
    /// `period` scales every phase; 1.0 gives the reference 20000:3000:5000:3000 ticks.
    pub fn new(row: usize, column: usize, symbol: char, period: f64) -> Self {
        let durations = BLINK_RATIOS.map(|ratio| ticks_for(BLINK_TICKS_PER_PERIOD * ratio, period));
        Self::with_durations(row, column, symbol, durations)
    }

    /// Explicit phase lengths in ticks (dim, normal, bold, normal). Zero is raised to one.
    pub fn with_durations(row: usize, column: usize, symbol: char, durations: [u32; 4]) -> Self {
        Self {
            row,
            column,
            symbol,
            durations: durations.map(|ticks| ticks.max(1)),
            phase: BlinkPhase::Dim,
            remaining: 0,
            started: false,
        }
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn durations(&self) -> [u32; 4] {
        self.durations
    }
}

impl Task for Blink {
    fn name(&self) -> &'static str {
        "star"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        if self.remaining == 0 {
            if self.started {
                self.phase = self.phase.next();
            }
            self.started = true;
            put_glyph(
                &mut *ctx.canvas,
                self.row as f64,
                self.column as f64,
                self.symbol,
                self.phase.intensity(),
            );
            self.remaining = self.durations[self.phase.index()];
        }

        self.remaining -= 1;
        Ok(Step::Continue)
    }
}
