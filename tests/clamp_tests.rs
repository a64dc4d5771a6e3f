use tui_starfield::core::{clamp_position, Bounds, Frame, Position};

#[test]
fn clamp_scenario_ten_by_ten() {
    let clamped = clamp_position(Bounds::new(10, 10), Bounds::new(4, 4), Position::new(20.0, -5.0));
    assert_eq!(clamped, Position::new(6.0, 0.0));
}

#[test]
fn clamp_bounds_hold_for_many_inputs() {
    let surfaces = [Bounds::new(24, 80), Bounds::new(5, 5), Bounds::new(2, 40), Bounds::new(0, 0)];
    let sprite = Frame::new("  .\n .'.\n |o|\n.'o'.\n|.-.|").size();
    let samples = [-1e6, -7.5, -1.0, -0.25, 0.0, 0.5, 3.0, 11.9, 19.0, 79.5, 1e6];

    for surface in surfaces {
        let max_row = (surface.rows as f64 - sprite.rows as f64).max(0.0);
        let max_column = (surface.columns as f64 - sprite.columns as f64).max(0.0);
        for &row in &samples {
            for &column in &samples {
                let p = clamp_position(surface, sprite, Position::new(row, column));
                assert!(p.row >= 0.0 && p.row <= max_row, "{surface:?} {p:?}");
                assert!(p.column >= 0.0 && p.column <= max_column, "{surface:?} {p:?}");
                assert_eq!(clamp_position(surface, sprite, p), p);
            }
        }
    }
}

#[test]
fn sprite_taller_than_surface_pins_row_to_zero() {
    let sprite = Frame::new("a\nb\nc\nd\ne\nf").size();
    let p = clamp_position(Bounds::new(4, 20), sprite, Position::new(3.0, 25.0));
    assert_eq!(p, Position::new(0.0, 19.0));
}
