//! Integration tests for the run loop and the animation tasks together.

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use tui_starfield::core::{
    scatter_stars, Bounds, Canvas, ControlSource, Fire, Frame, NoControls, RunOutcome, Scheduler,
    Shutdown, SimpleRng, Spaceship, StarFieldConfig, Step, Task, TaskContext, Velocity,
};
use tui_starfield::term::FrameBuffer;
use tui_starfield::types::{ControlState, Intensity};

/// FrameBuffer that counts refreshes and bells.
struct CountingCanvas {
    fb: FrameBuffer,
    refreshes: usize,
    beeps: usize,
}

impl CountingCanvas {
    fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            refreshes: 0,
            beeps: 0,
        }
    }
}

impl Canvas for CountingCanvas {
    fn dimensions(&self) -> Bounds {
        self.fb.dimensions()
    }

    fn put(&mut self, row: usize, column: usize, symbol: char, intensity: Intensity) {
        self.fb.put(row, column, symbol, intensity);
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}

struct Named {
    label: &'static str,
    finishes: bool,
}

impl Task for Named {
    fn name(&self) -> &'static str {
        self.label
    }

    fn step(&mut self, _ctx: &mut TaskContext<'_>) -> Result<Step> {
        Ok(if self.finishes { Step::Done } else { Step::Continue })
    }
}

/// Replays polls, then triggers shutdown once the script runs out.
struct Script {
    polls: VecDeque<ControlState>,
    shutdown: Shutdown,
}

impl ControlSource for Script {
    fn read_controls(&mut self) -> ControlState {
        match self.polls.pop_front() {
            Some(state) => state,
            None => {
                self.shutdown.trigger();
                ControlState::default()
            }
        }
    }
}

fn frames() -> Arc<[Frame]> {
    Arc::from(vec![
        Frame::new("  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  )\n ( )"),
        Frame::new("  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n  )\n ( )\n  ("),
    ])
}

#[test]
fn completed_task_leaves_live_set_after_one_pass() {
    let mut scheduler = Scheduler::default();
    scheduler.spawn(Named { label: "a", finishes: false });
    scheduler.spawn(Named { label: "b", finishes: true });
    scheduler.spawn(Named { label: "c", finishes: false });

    let mut canvas = CountingCanvas::new(80, 24);
    let report = scheduler.run_pass(&mut canvas).unwrap();

    assert_eq!(scheduler.task_names().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(canvas.refreshes, 1);
    assert_eq!(report.completed, 1);
}

#[test]
fn projectile_completes_in_finite_ticks() {
    let mut scheduler = Scheduler::default();
    scheduler.spawn(Fire::new(Bounds::new(24, 80).center(), Velocity::new(-0.05, 0.0)));

    let mut canvas = CountingCanvas::new(80, 24);
    let outcome = scheduler.run(&mut canvas).unwrap();

    assert_eq!(outcome, RunOutcome::Drained);
    assert!(scheduler.passes() < 300);
    assert_eq!(canvas.beeps, 1);
    assert_eq!(canvas.fb.ink(), 0);
}

#[test]
fn diagonal_projectile_exits_through_side() {
    let mut scheduler = Scheduler::default();
    scheduler.spawn(Fire::new(Bounds::new(10, 10).center(), Velocity::new(-0.3, 0.9)));

    let mut canvas = CountingCanvas::new(10, 10);
    assert_eq!(scheduler.run(&mut canvas).unwrap(), RunOutcome::Drained);
    assert_eq!(canvas.fb.ink(), 0);
}

#[test]
fn spaceship_runs_until_shutdown() {
    let shutdown = Shutdown::new();
    let script = Script {
        polls: VecDeque::from(vec![
            ControlState {
                rows_direction: -1,
                columns_direction: 1,
                space_pressed: false,
            };
            40
        ]),
        shutdown: shutdown.clone(),
    };

    let bounds = Bounds::new(24, 80);
    let mut scheduler = Scheduler::default().with_shutdown(shutdown);
    scheduler.spawn(
        Spaceship::new(frames(), bounds.center(), Box::new(script)).with_ticks_per_frame(5),
    );

    let mut canvas = CountingCanvas::new(80, 24);
    assert_eq!(scheduler.run(&mut canvas).unwrap(), RunOutcome::Cancelled);

    // 40 scripted polls plus the one that hit the end of the script.
    assert_eq!(scheduler.passes(), 41);
    assert_eq!(scheduler.len(), 1);

    // After 40 moves up-right the ship sits clamped in the top-right corner:
    // row 0, column 80 - 5. Its nose is two cells in.
    let top = canvas.fb.row_text(0);
    assert_eq!(top.find('.'), Some(75 + 2));
}

#[test]
fn armed_spaceship_launches_shots() {
    let shutdown = Shutdown::new();
    let fire = ControlState {
        space_pressed: true,
        ..ControlState::default()
    };
    let script = Script {
        polls: VecDeque::from(vec![fire, ControlState::default(), fire]),
        shutdown: shutdown.clone(),
    };

    let mut scheduler = Scheduler::default().with_shutdown(shutdown);
    scheduler.spawn(
        Spaceship::new(frames(), Bounds::new(24, 80).center(), Box::new(script))
            .with_gun(Velocity::new(-1.0, 0.0)),
    );

    let mut canvas = CountingCanvas::new(80, 24);
    scheduler.run_pass(&mut canvas).unwrap();
    assert_eq!(scheduler.task_names().collect::<Vec<_>>(), vec!["spaceship", "fire"]);

    scheduler.run_pass(&mut canvas).unwrap();
    scheduler.run_pass(&mut canvas).unwrap();
    assert_eq!(scheduler.task_names().filter(|n| *n == "fire").count(), 2);
}

#[test]
fn full_scene_retires_only_the_shot() {
    let bounds = Bounds::new(24, 80);
    let mut scheduler = Scheduler::default();

    let stars = scatter_stars(
        bounds,
        StarFieldConfig {
            min_stars: 30,
            max_stars: 30,
        },
        &mut SimpleRng::new(2024),
    );
    scheduler.extend(stars);
    scheduler.spawn(Fire::new(bounds.center(), Velocity::new(-0.5, 0.0)));
    scheduler.spawn(Spaceship::new(frames(), bounds.center(), Box::new(NoControls)));

    let mut canvas = CountingCanvas::new(80, 24);
    for _ in 0..100 {
        scheduler.run_pass(&mut canvas).unwrap();
    }

    // The shot is gone; 30 stars and the ship remain.
    assert_eq!(scheduler.len(), 31);
    assert!(scheduler.task_names().all(|name| name != "fire"));
    assert_eq!(canvas.refreshes, 100);
    assert_eq!(canvas.beeps, 1);
}
