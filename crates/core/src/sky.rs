//! Star-field generation.

use tui_starfield_types::{DEFAULT_MAX_STARS, DEFAULT_MIN_STARS, STAR_GLYPHS};

use crate::geometry::Bounds;
use crate::rng::SimpleRng;
use crate::star::Blink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFieldConfig {
    pub min_stars: usize,
    pub max_stars: usize,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            min_stars: DEFAULT_MIN_STARS,
            max_stars: DEFAULT_MAX_STARS,
        }
    }
}

/// Create a random number of blinking stars inside the surface border.
///
/// Each star gets its own position, glyph and blink period. A surface without
/// an interior (fewer than 3 rows or columns) gets no stars.
pub fn scatter_stars(bounds: Bounds, config: StarFieldConfig, rng: &mut SimpleRng) -> Vec<Blink> {
    if bounds.rows < 3 || bounds.columns < 3 {
        return Vec::new();
    }

    let count = rng.range_inclusive(config.min_stars, config.max_stars);
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let row = rng.range_inclusive(1, bounds.rows - 2);
        let column = rng.range_inclusive(1, bounds.columns - 2);
        let symbol = rng.choose(&STAR_GLYPHS).copied().unwrap_or('*');
        let period = rng.next_f64();
        stars.push(Blink::new(row, column, symbol, period));
    }
    stars
}
