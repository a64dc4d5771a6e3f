//! In-memory doubles for unit tests.

use std::collections::VecDeque;

use tui_starfield_types::{ControlState, Intensity};

use crate::canvas::{Canvas, ControlSource};
use crate::geometry::Bounds;

pub(crate) struct GridCanvas {
    bounds: Bounds,
    cells: Vec<(char, Intensity)>,
    pub writes: Vec<(usize, usize, char)>,
    pub refreshes: usize,
    pub beeps: usize,
}

impl GridCanvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            bounds: Bounds::new(rows, columns),
            cells: vec![(' ', Intensity::Normal); rows * columns],
            writes: Vec::new(),
            refreshes: 0,
            beeps: 0,
        }
    }

    pub fn fill(&mut self, symbol: char) {
        self.cells.fill((symbol, Intensity::Normal));
    }

    pub fn symbol(&self, row: usize, column: usize) -> char {
        self.cells[row * self.bounds.columns + column].0
    }

    pub fn intensity(&self, row: usize, column: usize) -> Intensity {
        self.cells[row * self.bounds.columns + column].1
    }

    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|(ch, _)| *ch == symbol).count()
    }
}

impl Canvas for GridCanvas {
    fn dimensions(&self) -> Bounds {
        self.bounds
    }

    fn put(&mut self, row: usize, column: usize, symbol: char, intensity: Intensity) {
        assert!(row < self.bounds.rows && column < self.bounds.columns);
        self.cells[row * self.bounds.columns + column] = (symbol, intensity);
        self.writes.push((row, column, symbol));
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}

/// Replays a fixed list of polls, then reports no input.
pub(crate) struct ScriptedControls(pub VecDeque<ControlState>);

impl ControlSource for ScriptedControls {
    fn read_controls(&mut self) -> ControlState {
        self.0.pop_front().unwrap_or_default()
    }
}
