//! TUI Starfield (workspace facade crate).
//!
//! Re-exports the member crates as `tui_starfield::{core,input,term,types}` and
//! holds the environment-driven [`Config`] used by the binary.

pub mod config;

pub use tui_starfield_core as core;
pub use tui_starfield_input as input;
pub use tui_starfield_term as term;
pub use tui_starfield_types as types;

pub use config::Config;
