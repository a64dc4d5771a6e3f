//! The unit of cooperative execution.

use crate::canvas::Canvas;

/// Result of advancing a task by one suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The task yielded and wants to be resumed next pass.
    Continue,
    /// The task finished; it is never resumed again.
    Done,
}

/// An animation advanced one tick at a time by the [`Scheduler`](crate::Scheduler).
///
/// A step must not block. Returning `Err` is treated like completion: the
/// task is dropped from the live set and the rest keep running.
pub trait Task {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    fn step(&mut self, ctx: &mut TaskContext<'_>) -> anyhow::Result<Step>;
}

/// What a task may touch while it runs: the shared surface and a queue for
/// tasks it wants to start.
pub struct TaskContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TaskContext<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, spawned: &'a mut Vec<Box<dyn Task>>) -> Self {
        Self { canvas, spawned }
    }

    /// Queue a new task. It joins the live set after the current pass.
    pub fn spawn<T: Task + 'static>(&mut self, task: T) {
        self.spawned.push(Box::new(task));
    }
}
