//! Runtime configuration from environment variables.
//!
//! - `STARFIELD_DATA_DIR`: directory holding `frame1.txt` and `frame2.txt` (default: "./data")
//! - `STARFIELD_MIN_STARS` / `STARFIELD_MAX_STARS`: star count range (default: 100 / 250,
//!   at most 10000)
//! - `STARFIELD_SEED`: star-field seed (default: derived from the clock)
//! - `STARFIELD_TICK_MS`: minimum wall-clock length of a pass (default: 1)
//! - `STARFIELD_SHIP_GUN`: "1" or "true" lets the trigger fire shots
//! - `STARFIELD_LOG`: log file path; logging is off when unset

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::StarFieldConfig;
use crate::types::DEFAULT_TICK_MS;

pub const FRAME_FILES: [&str; 2] = ["frame1.txt", "frame2.txt"];

/// Largest accepted star count; larger values fall back to the default.
pub const MAX_STAR_COUNT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub stars: StarFieldConfig,
    pub seed: Option<u32>,
    pub tick: Duration,
    pub ship_gun: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            stars: StarFieldConfig::default(),
            seed: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            ship_gun: false,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let parsed = |key: &str| non_empty(key).and_then(|s| s.parse::<u64>().ok());

        let data_dir = non_empty("STARFIELD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let star_count = |key: &str| {
            parsed(key)
                .and_then(|v| usize::try_from(v).ok())
                .filter(|&v| v <= MAX_STAR_COUNT)
        };

        let min_stars = star_count("STARFIELD_MIN_STARS").unwrap_or(defaults.stars.min_stars);
        let max_stars = star_count("STARFIELD_MAX_STARS").unwrap_or(defaults.stars.max_stars);
        let stars = StarFieldConfig {
            min_stars: min_stars.min(max_stars),
            max_stars: min_stars.max(max_stars),
        };

        let seed = parsed("STARFIELD_SEED").and_then(|v| u32::try_from(v).ok());
        let tick = parsed("STARFIELD_TICK_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);
        let ship_gun = non_empty("STARFIELD_SHIP_GUN")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let log_path = non_empty("STARFIELD_LOG").map(PathBuf::from);

        Self {
            data_dir,
            stars,
            seed,
            tick,
            ship_gun,
            log_path,
        }
    }

    pub fn frame_paths(&self) -> [PathBuf; 2] {
        FRAME_FILES.map(|name| self.data_dir.join(name))
    }

    /// Configured seed, or one taken from the clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
