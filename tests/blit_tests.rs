//! Sprite blitting against a headless framebuffer.

use tui_starfield::core::{draw_frame, Bounds, Canvas, Frame};
use tui_starfield::term::FrameBuffer;
use tui_starfield::types::Intensity;

/// Canvas that records writes and panics on out-of-range ones.
struct Recorder {
    bounds: Bounds,
    writes: Vec<(usize, usize, char)>,
}

impl Recorder {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            bounds: Bounds::new(rows, columns),
            writes: Vec::new(),
        }
    }
}

impl Canvas for Recorder {
    fn dimensions(&self) -> Bounds {
        self.bounds
    }

    fn put(&mut self, row: usize, column: usize, symbol: char, _intensity: Intensity) {
        assert!(row < self.bounds.rows, "row {row} out of range");
        assert!(column < self.bounds.columns, "column {column} out of range");
        self.writes.push((row, column, symbol));
    }
}

fn rocket() -> Frame {
    Frame::new("  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  )\n ( )")
}

#[test]
fn block_at_origin_writes_exactly_fifteen_cells() {
    let mut fb = FrameBuffer::new(80, 24);
    let block = Frame::new("#####\n#####\n#####");

    draw_frame(&mut fb, 0.0, 0.0, &block, false);
    assert_eq!(fb.ink(), 15);
    for y in 0..3 {
        assert_eq!(&fb.row_text(y)[..6], "##### ");
    }
    assert_eq!(fb.row_text(3).trim(), "");

    draw_frame(&mut fb, 0.0, 0.0, &block, true);
    assert_eq!(fb.ink(), 0);
}

#[test]
fn never_writes_outside_surface() {
    let frame = rocket();
    let anchors = [-12.0, -4.6, -0.5, 0.0, 0.49, 3.5, 7.0, 9.4, 15.0];

    for &(rows, columns) in &[(1, 1), (3, 4), (10, 10), (24, 80)] {
        for &row in &anchors {
            for &column in &anchors {
                let mut canvas = Recorder::new(rows, columns);
                draw_frame(&mut canvas, row, column, &frame, false);
                assert!(
                    !canvas
                        .writes
                        .iter()
                        .any(|&(r, c, _)| r + 1 == rows && c + 1 == columns),
                    "bottom-right cell written"
                );
                assert!(canvas.writes.iter().all(|&(_, _, ch)| ch != ' '));
            }
        }
    }
}

#[test]
fn transparent_cells_keep_background() {
    let mut fb = FrameBuffer::new(10, 12);
    for y in 0..12 {
        for x in 0..10 {
            fb.put_char(x, y, '~', Intensity::Dim);
        }
    }

    let frame = rocket();
    draw_frame(&mut fb, 1.0, 2.0, &frame, false);

    // Row 0 of the sprite is "  ." : two transparent cells then a dot.
    assert_eq!(&fb.row_text(1)[2..5], "~~.");
    // "'   '" keeps the three inner background cells.
    assert_eq!(&fb.row_text(6)[2..7], "'~~~'");
}

#[test]
fn erase_restores_blank_and_keeps_untouched_cells() {
    let mut fb = FrameBuffer::new(20, 20);
    // A star sitting in the sprite's transparent area.
    fb.put_char(5, 8, '+', Intensity::Bold);
    let before = fb.clone();

    let frame = rocket();
    draw_frame(&mut fb, 3.0, 3.0, &frame, false);
    assert_ne!(fb, before);
    draw_frame(&mut fb, 3.0, 3.0, &frame, true);

    assert_eq!(fb, before);
}

#[test]
fn partially_visible_sprite_is_clipped() {
    let mut fb = FrameBuffer::new(6, 4);
    let frame = rocket();

    draw_frame(&mut fb, 1.0, 3.0, &frame, false);
    assert_eq!(fb.row_text(1), "     .");
    assert_eq!(fb.row_text(2), "    .'");
    assert_eq!(fb.row_text(3), "    | ");
}

#[test]
fn ragged_lines_are_drawn_as_is() {
    let mut fb = FrameBuffer::new(6, 3);
    draw_frame(&mut fb, 0.0, 0.0, &Frame::new("a\nbcd\nef"), false);
    assert_eq!(fb.row_text(0), "a     ");
    assert_eq!(fb.row_text(1), "bcd   ");
    assert_eq!(fb.row_text(2), "ef    ");
}
