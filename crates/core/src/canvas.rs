//! Capabilities the core consumes but does not implement.

use tui_starfield_types::{ControlState, Intensity};

use crate::geometry::Bounds;

/// A fixed-size grid of addressable character cells.
///
/// Implementations only ever receive in-bounds coordinates from the core's
/// drawing helpers; writes outside the grid may be ignored.
pub trait Canvas {
    /// Current size of the surface.
    fn dimensions(&self) -> Bounds;

    /// Write one character with the given intensity.
    fn put(&mut self, row: usize, column: usize, symbol: char, intensity: Intensity);

    /// Fire-and-forget audible alert.
    fn beep(&mut self) {}

    /// Flush pending writes to the visible screen.
    fn refresh(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Non-blocking input poll.
///
/// Drains every key press since the previous call and returns the reduced
/// state; returns `ControlState::default()` when nothing is pending.
pub trait ControlSource {
    fn read_controls(&mut self) -> ControlState;
}

/// Input source that never reports a key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoControls;

impl ControlSource for NoControls {
    fn read_controls(&mut self) -> ControlState {
        ControlState::default()
    }
}
