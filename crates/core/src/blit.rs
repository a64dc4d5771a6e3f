//! Clipped drawing onto a [`Canvas`].

use tui_starfield_types::Intensity;

use crate::canvas::Canvas;
use crate::frame::Frame;

/// Draw `frame` with its top-left corner at (`start_row`, `start_column`).
///
/// Coordinates are rounded to the nearest cell and may lie off-surface; cells
/// outside the surface are clipped. Spaces in the pattern are transparent and
/// never written. With `negative` set, every drawn cell is overwritten with a
/// space instead, which erases a previous draw at the same anchor.
pub fn draw_frame<C>(
    canvas: &mut C,
    start_row: f64,
    start_column: f64,
    frame: &Frame,
    negative: bool,
) where
    C: Canvas + ?Sized,
{
    let bounds = canvas.dimensions();
    let (rows, columns) = (bounds.rows as i64, bounds.columns as i64);
    let top = start_row.round() as i64;
    let left = start_column.round() as i64;

    for (dy, line) in frame.lines().enumerate() {
        let row = top + dy as i64;
        if row < 0 {
            continue;
        }
        if row >= rows {
            break;
        }

        for (dx, symbol) in line.chars().enumerate() {
            let column = left + dx as i64;
            if column < 0 {
                continue;
            }
            if column >= columns {
                break;
            }
            if symbol == ' ' {
                continue;
            }
            if is_last_cell(row, column, rows, columns) {
                continue;
            }

            let symbol = if negative { ' ' } else { symbol };
            canvas.put(row as usize, column as usize, symbol, Intensity::Normal);
        }
    }
}

/// Write one glyph at a possibly fractional, possibly off-surface position.
///
/// Off-surface positions are ignored. Unlike [`draw_frame`], a space is
/// written as-is, so this also clears a cell.
pub fn put_glyph<C>(canvas: &mut C, row: f64, column: f64, symbol: char, intensity: Intensity)
where
    C: Canvas + ?Sized,
{
    let bounds = canvas.dimensions();
    let (rows, columns) = (bounds.rows as i64, bounds.columns as i64);
    let row = row.round() as i64;
    let column = column.round() as i64;

    if row < 0 || column < 0 || row >= rows || column >= columns {
        return;
    }
    if is_last_cell(row, column, rows, columns) {
        return;
    }
    canvas.put(row as usize, column as usize, symbol, intensity);
}

// Some terminal backends fail when writing the bottom-right cell.
#[inline(always)]
fn is_last_cell(row: i64, column: i64, rows: i64, columns: i64) -> bool {
    row == rows - 1 && column == columns - 1
}
