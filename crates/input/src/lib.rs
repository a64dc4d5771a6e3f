//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Control`] and provides the
//! non-blocking keyboard reader the spaceship polls once per sub-tick.

pub mod map;
pub mod reader;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use map::{map_key, should_quit};
pub use reader::{KeyBatch, KeyboardControls, MAX_KEYS_PER_POLL};
