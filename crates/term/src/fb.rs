//! Framebuffer of character cells.

use crate::core::{Bounds, Canvas};
use crate::types::Intensity;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub intensity: Intensity,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            intensity: Intensity::Normal,
        }
    }
}

/// 2D framebuffer of character cells, addressed as (x, y).
///
/// Also usable directly as a headless [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Overwrite with `other`, reusing this buffer's allocation.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, intensity: Intensity) {
        self.set(x, y, Cell { ch, intensity });
    }

    /// Text of row `y`, one char per cell.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).unwrap_or_default().ch)
            .collect()
    }

    /// Number of cells that are not blank.
    pub fn ink(&self) -> usize {
        self.cells.iter().filter(|cell| cell.ch != ' ').count()
    }
}

impl Canvas for FrameBuffer {
    fn dimensions(&self) -> Bounds {
        Bounds::new(self.height as usize, self.width as usize)
    }

    fn put(&mut self, row: usize, column: usize, symbol: char, intensity: Intensity) {
        if let (Ok(x), Ok(y)) = (u16::try_from(column), u16::try_from(row)) {
            self.put_char(x, y, symbol, intensity);
        }
    }
}
