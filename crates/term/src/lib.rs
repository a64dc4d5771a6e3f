//! Terminal display surface.
//!
//! Tasks draw into an in-memory framebuffer through the core `Canvas` trait;
//! a refresh diffs it against what the terminal last showed and writes only
//! the changed runs.
//!
//! Goals:
//! - Keep `core` free of terminal I/O and testable against a plain grid
//! - Flush at most once per scheduler pass, and only when something changed
//! - Honour the per-cell dim/normal/bold intensity

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod throttle;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use canvas::TerminalCanvas;
pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::FlushThrottle;
