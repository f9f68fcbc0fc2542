//! Translation between board points, vertex names and pixel positions.
//!
//! Vertex names use letters A-T (skipping I) for columns and 1-19 for rows,
//! with row 1 at the bottom edge. Board points count `y` from the top, so
//! `A1` is `(0, 18)` and `A19` is `(0, 0)`.

use crate::board::Point;
use crate::constants::{COLUMNS, N};

/// Parse a vertex such as `"D4"` (case-insensitive).
///
/// Returns `None` for malformed or off-board vertices.
pub fn parse_coord(s: &str) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    let x = COLUMNS.iter().position(|&c| c as char == col_char)?;

    let row: usize = chars.as_str().parse().ok()?;
    if !(1..=N).contains(&row) {
        return None;
    }
    Some((x, N - row))
}

/// Convert a board point to a vertex name (e.g. `"D4"`).
///
/// # Panics
/// If `x` or `y` is not below the board size.
pub fn str_coord((x, y): Point) -> String {
    format!("{}{}", COLUMNS[x] as char, N - y)
}

/// Map a pixel position to the nearest intersection.
///
/// The grid is drawn with a one-cell margin, so intersection `(0, 0)` sits
/// at `(cell_size, cell_size)`. Returns `None` when the nearest
/// intersection is off the board. Halves round toward +∞, so a click
/// exactly half a cell into the margin still lands on the edge line.
pub fn pixel_to_point(px: f64, py: f64, cell_size: f64) -> Option<Point> {
    if cell_size.is_nan() || cell_size <= 0.0 {
        return None;
    }
    let axis = |p: f64| {
        let v = (p / cell_size - 1.0 + 0.5).floor();
        (v >= 0.0 && v < N as f64).then_some(v as usize)
    };
    Some((axis(px)?, axis(py)?))
}
