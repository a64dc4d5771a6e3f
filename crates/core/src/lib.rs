//! Core animation module - cooperative tasks over a shared character grid
//!
//! This module contains the compositing primitives and the run loop. It has
//! **no dependency** on a terminal, so everything here can be driven against
//! an in-memory grid in tests.
//!
//! # Module Structure
//!
//! - [`canvas`]: capability traits for the display surface and the input reader
//! - [`frame`]: multi-line glyph patterns and their bounding box
//! - [`geometry`]: bounds, positions, velocities and the position clamp
//! - [`blit`]: clipped drawing and erasing of glyph patterns
//! - [`task`]: the `Task` trait every animation implements
//! - [`scheduler`]: the run loop that resumes all live tasks once per pass
//! - [`star`], [`fire`], [`spaceship`]: the animation tasks
//! - [`sky`], [`rng`]: seeded star-field generation
//!
//! # Scheduling
//!
//! Scheduling is cooperative and single-threaded. Each task is a state machine
//! advanced by one [`Task::step`] call per pass; a step is one suspension point.
//! All tasks share one `&mut dyn Canvas` in turn, so no locking is involved.
//!
//! # Example
//!
//! ```
//! use tui_starfield_core::canvas::Canvas;
//! use tui_starfield_core::geometry::Bounds;
//! use tui_starfield_core::{Fire, Position, Scheduler, Velocity};
//! use tui_starfield_types::Intensity;
//!
//! struct Null;
//!
//! impl Canvas for Null {
//!     fn dimensions(&self) -> Bounds {
//!         Bounds::new(10, 10)
//!     }
//!     fn put(&mut self, _row: usize, _column: usize, _symbol: char, _intensity: Intensity) {}
//! }
//!
//! let mut scheduler = Scheduler::default();
//! scheduler.spawn(Fire::new(Position::new(5.0, 5.0), Velocity::new(-1.0, 0.0)));
//!
//! let outcome = scheduler.run(&mut Null).unwrap();
//! assert!(scheduler.is_empty());
//! assert_eq!(outcome, tui_starfield_core::RunOutcome::Drained);
//! ```

pub mod blit;
pub mod canvas;
pub mod error;
pub mod fire;
pub mod frame;
pub mod geometry;
pub mod rng;
pub mod scheduler;
pub mod sky;
pub mod spaceship;
pub mod star;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use tui_starfield_types as types;

// Re-export commonly used types for convenience
pub use blit::{draw_frame, put_glyph};
pub use canvas::{Canvas, ControlSource, NoControls};
pub use error::LoadError;
pub use fire::{Fire, FireState};
pub use frame::Frame;
pub use geometry::{clamp_position, Bounds, Position, Velocity};
pub use rng::SimpleRng;
pub use scheduler::{PassReport, RunOutcome, Scheduler, Shutdown};
pub use sky::{scatter_stars, StarFieldConfig};
pub use spaceship::Spaceship;
pub use star::{Blink, BlinkPhase};
pub use task::{Step, Task, TaskContext};
