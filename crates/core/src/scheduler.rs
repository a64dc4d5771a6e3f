//! Cooperative run loop.
//!
//! One pass resumes every live task exactly once, in order, then refreshes the
//! canvas once. Tasks that finish (or fail) during a pass are dropped without
//! disturbing the rest of the pass; tasks spawned during a pass first run on
//! the next one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use tui_starfield_types::DEFAULT_TICK_MS;

use crate::canvas::Canvas;
use crate::task::{Step, Task, TaskContext};

/// Cloneable stop flag, checked between passes.
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Why [`Scheduler::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every task completed.
    Drained,
    /// The shutdown flag was raised.
    Cancelled,
}

/// Counters for a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    pub resumed: usize,
    pub completed: usize,
    pub failed: usize,
    pub spawned: usize,
}

pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    /// Tasks spawned during the current pass.
    incoming: Vec<Box<dyn Task>>,
    shutdown: Shutdown,
    tick: Duration,
    passes: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Scheduler {
    /// `tick` is the minimum wall-clock length of one pass.
    pub fn new(tick: Duration) -> Self {
        Self {
            tasks: Vec::new(),
            incoming: Vec::new(),
            shutdown: Shutdown::new(),
            tick,
            passes: 0,
        }
    }

    /// Scheduler paced at [`DEFAULT_TICK_MS`].
    pub fn paced() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TICK_MS))
    }

    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    pub fn spawn<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push(Box::new(task));
    }

    pub fn extend<T, I>(&mut self, tasks: I)
    where
        T: Task + 'static,
        I: IntoIterator<Item = T>,
    {
        self.tasks
            .extend(tasks.into_iter().map(|task| Box::new(task) as Box<dyn Task>));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Names of the live tasks, in resumption order.
    pub fn task_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|task| task.name())
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Resume every live task once, then refresh the canvas once.
    pub fn run_pass(&mut self, canvas: &mut dyn Canvas) -> Result<PassReport> {
        let mut report = PassReport::default();

        {
            let mut ctx = TaskContext::new(&mut *canvas, &mut self.incoming);
            self.tasks.retain_mut(|task| {
                report.resumed += 1;
                match task.step(&mut ctx) {
                    Ok(Step::Continue) => true,
                    Ok(Step::Done) => {
                        report.completed += 1;
                        debug!(task = task.name(), "task completed");
                        false
                    }
                    Err(err) => {
                        report.failed += 1;
                        warn!(task = task.name(), error = %err, "task failed, dropping it");
                        false
                    }
                }
            });
        }

        if !self.incoming.is_empty() {
            report.spawned = self.incoming.len();
            debug!(count = report.spawned, "tasks spawned");
            self.tasks.append(&mut self.incoming);
        }

        self.passes += 1;
        canvas.refresh()?;
        Ok(report)
    }

    /// Run passes until every task completes or shutdown is triggered.
    pub fn run(&mut self, canvas: &mut dyn Canvas) -> Result<RunOutcome> {
        info!(tasks = self.tasks.len(), "scheduler started");

        let outcome = loop {
            if self.shutdown.is_triggered() {
                break RunOutcome::Cancelled;
            }
            if self.tasks.is_empty() {
                break RunOutcome::Drained;
            }

            let started = Instant::now();
            self.run_pass(canvas)?;

            if let Some(rest) = self.tick.checked_sub(started.elapsed()) {
                if !rest.is_zero() {
                    thread::sleep(rest);
                }
            }
        };

        info!(?outcome, passes = self.passes, "scheduler stopped");
        Ok(outcome)
    }
}
