//! Bounds, positions and the position clamp.

/// Rows by columns of a surface or a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    pub rows: usize,
    pub columns: usize,
}

impl Bounds {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Centre cell, rounded down.
    pub fn center(&self) -> Position {
        Position::new((self.rows / 2) as f64, (self.columns / 2) as f64)
    }
}

/// Top-left anchor of a sprite. Fractional values accumulate sub-cell motion
/// and are rounded only when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub row: f64,
    pub column: f64,
}

impl Position {
    pub const fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    pub fn offset(self, velocity: Velocity) -> Self {
        Self {
            row: self.row + velocity.rows_speed,
            column: self.column + velocity.columns_speed,
        }
    }
}

/// Per-tick deltas applied to a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub rows_speed: f64,
    pub columns_speed: f64,
}

impl Velocity {
    pub const fn new(rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            rows_speed,
            columns_speed,
        }
    }
}

/// Restrict `proposed` so a sprite of size `sprite` stays entirely on `surface`.
///
/// When the sprite is larger than the surface on an axis, that axis clamps to 0.
pub fn clamp_position(surface: Bounds, sprite: Bounds, proposed: Position) -> Position {
    let field_height = (surface.rows as f64 - sprite.rows as f64).max(0.0);
    let field_width = (surface.columns as f64 - sprite.columns as f64).max(0.0);

    Position {
        row: proposed.row.max(0.0).min(field_height),
        column: proposed.column.max(0.0).min(field_width),
    }
}
