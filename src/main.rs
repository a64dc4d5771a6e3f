//! Terminal starfield runner (default binary).
//!
//! Loads the two spaceship frames, switches the terminal into raw mode and
//! runs the stars, the opening shot and the spaceship until `q`, `Esc` or
//! `Ctrl-C` is pressed.

use std::fs::File;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_starfield::core::{
    scatter_stars, Canvas, Fire, Frame, Scheduler, Shutdown, SimpleRng, Spaceship, Velocity,
};
use tui_starfield::input::KeyboardControls;
use tui_starfield::term::TerminalCanvas;
use tui_starfield::types::FIRE_ROW_SPEED;
use tui_starfield::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    // Missing sprites are fatal before the terminal is touched.
    let frames = load_frames(&config)?;

    let mut canvas = TerminalCanvas::from_terminal()?;
    canvas.enter()?;

    let result = run(&config, frames, &mut canvas);

    // Always try to restore terminal state.
    let _ = canvas.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("tui_starfield=info,tui_starfield_core=info,tui_starfield_input=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

fn load_frames(config: &Config) -> Result<Arc<[Frame]>> {
    let frames = config
        .frame_paths()
        .iter()
        .map(Frame::load)
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = frames.len(), dir = %config.data_dir.display(), "spaceship frames loaded");
    Ok(Arc::from(frames))
}

fn run(config: &Config, frames: Arc<[Frame]>, canvas: &mut TerminalCanvas) -> Result<()> {
    let bounds = canvas.dimensions();
    let shutdown = Shutdown::new();
    let mut scheduler = Scheduler::new(config.tick).with_shutdown(shutdown.clone());

    let seed = config.seed_or_clock();
    let stars = scatter_stars(bounds, config.stars, &mut SimpleRng::new(seed));
    info!(rows = bounds.rows, columns = bounds.columns, stars = stars.len(), seed, "sky ready");
    scheduler.extend(stars);

    let shot = Velocity::new(FIRE_ROW_SPEED, 0.0);
    scheduler.spawn(Fire::new(bounds.center(), shot));

    let mut ship = Spaceship::new(
        frames,
        bounds.center(),
        Box::new(KeyboardControls::new(shutdown)),
    );
    if config.ship_gun {
        ship = ship.with_gun(shot);
    }
    scheduler.spawn(ship);

    let outcome = scheduler.run(canvas)?;
    info!(?outcome, passes = scheduler.passes(), "animation finished");
    Ok(())
}
