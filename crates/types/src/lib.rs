//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the animation core, the
//! keyboard reader and the terminal backend. Nothing here performs I/O.
//!
//! # Timing Constants
//!
//! Animation timing is counted in scheduler ticks, not milliseconds. One tick is
//! one full pass of the run loop over the live task set.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 1 | Wall-clock pacing of one scheduler pass |
//! | `BLINK_TICKS_PER_PERIOD` | 1000 | Ticks per unit of star blink period |
//! | `BLINK_RATIOS` | 20:3:5:3 | Dim / normal / bold / normal phase ratios |
//! | `SHIP_TICKS_PER_FRAME` | 500 | Sub-ticks per unit of ship frame duration |
//! | `SHIP_FRAME_DURATION` | 0.3 | Ship frame duration multiplier |
//! | `FIRE_ROW_SPEED` | -0.05 | Default projectile speed (rows per tick) |
//!
//! # Examples
//!
//! ```
//! use tui_starfield_types::{Control, ControlState};
//!
//! let mut state = ControlState::default();
//! state.apply(Control::Up);
//! state.apply(Control::Right);
//! state.apply(Control::Fire);
//!
//! assert_eq!(state.rows_direction, -1);
//! assert_eq!(state.columns_direction, 1);
//! assert!(state.space_pressed);
//!
//! // Unknown keys leave the state untouched.
//! state.apply(Control::Other);
//! assert_eq!(state.rows_direction, -1);
//! ```

/// Default wall-clock pacing of one scheduler pass (1ms).
pub const DEFAULT_TICK_MS: u64 = 1;

/// Glyphs a star may be drawn with.
pub const STAR_GLYPHS: [char; 4] = ['+', '*', '.', ':'];

/// Default inclusive range for the number of stars in the sky.
pub const DEFAULT_MIN_STARS: usize = 100;
pub const DEFAULT_MAX_STARS: usize = 250;

/// Ticks per unit of a star's blink period.
pub const BLINK_TICKS_PER_PERIOD: f64 = 1000.0;

/// Phase length ratios for dim, normal, bold, normal.
pub const BLINK_RATIOS: [f64; 4] = [20.0, 3.0, 5.0, 3.0];

/// Sub-ticks per unit of ship frame duration.
pub const SHIP_TICKS_PER_FRAME: f64 = 500.0;

/// Ship frame duration multiplier used at startup.
pub const SHIP_FRAME_DURATION: f64 = 0.3;

/// Default projectile speed in rows per tick (negative is upward).
pub const FIRE_ROW_SPEED: f64 = -0.05;

/// Glyph drawn on the first tick of a launch.
pub const FIRE_LAUNCH_GLYPH: char = '*';

/// Glyph drawn on the second tick of a launch.
pub const FIRE_FLASH_GLYPH: char = 'O';

/// Convert a duration multiplier into a tick count.
///
/// Never returns zero, so every timed phase yields at least once.
pub fn ticks_for(base: f64, multiplier: f64) -> u32 {
    let ticks = (base * multiplier).floor();
    if ticks.is_finite() && ticks >= 1.0 {
        ticks.min(u32::MAX as f64) as u32
    } else {
        1
    }
}

/// Display intensity of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// A single classified key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Fire,
    /// Anything else; ignored by the reducer.
    Other,
}

/// Controls accumulated over one input poll.
///
/// Recomputed on every poll; `Default` is the "no keys pending" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    /// -1 up, 1 down, 0 none.
    pub rows_direction: i8,
    /// -1 left, 1 right, 0 none.
    pub columns_direction: i8,
    pub space_pressed: bool,
}

impl ControlState {
    /// Fold one key press into the state. The last press per axis wins.
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Up => self.rows_direction = -1,
            Control::Down => self.rows_direction = 1,
            Control::Left => self.columns_direction = -1,
            Control::Right => self.columns_direction = 1,
            Control::Fire => self.space_pressed = true,
            Control::Other => {}
        }
    }

    /// Reduce a batch of key presses.
    pub fn from_controls<I: IntoIterator<Item = Control>>(controls: I) -> Self {
        let mut state = Self::default();
        for control in controls {
            state.apply(control);
        }
        state
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
